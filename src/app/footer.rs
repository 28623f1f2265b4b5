use leptos::prelude::*;

use crate::content::{build_year, INITIALS, NAME, SOCIAL_LINKS};

#[component]
pub fn Footer() -> impl IntoView {
    let year = build_year();

    view! {
        <footer class="border-t border-border py-8">
            <div class="container-custom flex flex-col md:flex-row items-center justify-between gap-4">
                <div class="flex items-center gap-2">
                    <span class="w-8 h-8 rounded-full bg-primary text-primary-foreground flex items-center justify-center text-sm font-bold">
                        {INITIALS}
                    </span>
                    <span class="text-sm text-muted-foreground">
                        "© " {year} " " {NAME} ". All rights reserved."
                    </span>
                </div>
                <div class="flex gap-4">
                    {SOCIAL_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label=link.label
                                    class="text-xl hover:text-primary transition-colors"
                                >
                                    <i class=link.icon></i>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </footer>
    }
}

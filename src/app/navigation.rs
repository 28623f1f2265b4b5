use leptos::prelude::*;
use leptos_use::use_window_scroll;
use log::warn;

use super::reveal::client_rect;
use super::theme::ThemeToggle;
use crate::content::{FIRST_NAME, INITIALS, NAV_ITEMS, RESUME_FILENAME, RESUME_PATH};
use crate::scroll::{anchor_id, is_scrolled, section_scroll_target};

fn scroll_to_section(id: &str) {
    let Some(el) = document().get_element_by_id(id) else {
        warn!("no section with id {id}");
        return;
    };
    let window = window();
    let page_offset = window.scroll_y().unwrap_or_default();
    let top = section_scroll_target(client_rect(&el).top, page_offset);
    window.scroll_to_with_x_and_y(0.0, top);
}

#[component]
pub fn Navigation() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let scrolled = Memo::new(move |_| is_scrolled(scroll_y.get()));
    let (menu_open, set_menu_open) = signal(false);

    let go_to = move |href: &'static str| {
        set_menu_open.set(false);
        scroll_to_section(anchor_id(href));
    };

    let nav_links = move |class: &'static str| {
        NAV_ITEMS
            .iter()
            .map(|item| {
                let href = item.href;
                view! {
                    <button class=class on:click=move |_| go_to(href)>
                        {item.label}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <nav class=move || {
            format!(
                "fixed top-0 inset-x-0 z-40 h-16 transition-all duration-300 {}",
                if scrolled.get() {
                    "glass-morphism shadow-lg"
                } else {
                    "bg-transparent"
                },
            )
        }>
            <div class="container-custom h-full flex items-center justify-between">
                <button
                    class="flex items-center gap-2 font-bold text-xl"
                    on:click=move |_| go_to("#about")
                >
                    <span class="w-10 h-10 rounded-full bg-primary text-primary-foreground flex items-center justify-center">
                        {INITIALS}
                    </span>
                    <span class="gradient-text hidden sm:inline">{FIRST_NAME}</span>
                </button>

                <div class="hidden md:flex items-center gap-6">
                    {nav_links("text-sm font-medium hover:text-primary transition-colors")}
                    <a
                        href=RESUME_PATH
                        download=RESUME_FILENAME
                        class="px-4 py-2 rounded-md bg-primary text-primary-foreground text-sm font-medium hover:opacity-90"
                    >
                        "Resume"
                    </a>
                    <ThemeToggle />
                </div>

                <div class="flex md:hidden items-center gap-2">
                    <ThemeToggle />
                    <button
                        class="p-2"
                        aria-label="Toggle menu"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>

            <Show when=move || menu_open.get()>
                <div class="md:hidden glass-morphism border-t border-border">
                    <div class="container-custom py-4 flex flex-col gap-3">
                        {nav_links("text-left py-2 font-medium hover:text-primary transition-colors")}
                        <a
                            href=RESUME_PATH
                            download=RESUME_FILENAME
                            class="py-2 font-medium text-primary"
                            on:click=move |_| set_menu_open.set(false)
                        >
                            "Download Resume"
                        </a>
                    </div>
                </div>
            </Show>
        </nav>
    }
}

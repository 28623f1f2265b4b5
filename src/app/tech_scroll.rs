use leptos::prelude::*;

use crate::content::TECHNOLOGIES;

/// Endless ticker of technology badges. The list is rendered twice so the
/// `marquee` keyframes can loop at the halfway point without a seam.
#[component]
pub fn TechScroll() -> impl IntoView {
    let badges = || {
        TECHNOLOGIES
            .iter()
            .map(|tech| {
                view! {
                    <div class="flex items-center gap-2 px-5 py-2 mx-3 rounded-full glass-morphism whitespace-nowrap">
                        <span class="text-lg">{tech.icon}</span>
                        <span class="font-medium">{tech.name}</span>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <div class="py-8 overflow-hidden border-y border-border bg-muted/30">
            <div class="marquee flex w-max hover:[animation-play-state:paused]">
                {badges()} {badges()}
            </div>
        </div>
    }
}

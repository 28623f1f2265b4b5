use leptos::{html, prelude::*};
use leptos_use::use_window_scroll;

use super::reveal::{use_reveal, RevealItem};
use super::tilt::TiltCard;
use crate::content::{FUN_FACTS, INITIALS, INTERESTS, NAME, PERSONAL_BLURB, QUOTE, ROLE};
use crate::parallax::{
    scroll_drift, FloatingParticle, ParallaxProfile, PARTICLE_COUNT, PARTICLE_DRIFT_RATE,
};
use crate::reveal::{Entrance, RevealMargin, Stagger};

const INTEREST_CARDS: Stagger = Stagger::new(800, 100);
const FACTS: Stagger = Stagger::new(1200, 100);

/// Dots bobbing behind the section, drifting with the page scroll.
#[component]
fn FloatingParticles() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();

    view! {
        <div
            class="absolute inset-0 pointer-events-none"
            aria-hidden="true"
            style:transform=move || {
                format!("translateY({}px)", scroll_drift(scroll_y.get(), PARTICLE_DRIFT_RATE))
            }
        >
            {(0..PARTICLE_COUNT)
                .map(|i| {
                    view! {
                        <span
                            class="floating-particle absolute w-2 h-2 rounded-full bg-foreground/20"
                            style=FloatingParticle::nth(i).style()
                        ></span>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn Personal() -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let revealed = use_reveal(node, RevealMargin::SECTION);
    let (hovered_interest, set_hovered_interest) = signal(None::<usize>);
    let (quote, author) = QUOTE;

    view! {
        <section id="personal" class="section-padding relative overflow-hidden">
            <FloatingParticles />
            <div node_ref=node class="container-custom relative z-10">
                <RevealItem revealed class="text-center mb-12">
                    <h2 class="text-4xl font-bold gradient-text mb-4">"Beyond the Code"</h2>
                </RevealItem>
                <div class="grid lg:grid-cols-3 gap-8">
                    <RevealItem revealed entrance=Entrance::Left>
                        <TiltCard
                            profile=ParallaxProfile::PROFILE_CARD
                            class="glass-morphism rounded-2xl p-8 text-center"
                        >
                            <div class="w-24 h-24 mx-auto rounded-full bg-gradient-to-br from-primary to-purple-500 flex items-center justify-center text-3xl font-bold text-white mb-4">
                                {INITIALS}
                            </div>
                            <h3 class="text-xl font-semibold">{NAME}</h3>
                            <p class="text-primary text-sm mb-4">{ROLE}</p>
                            <p class="text-sm text-muted-foreground leading-relaxed">
                                {PERSONAL_BLURB}
                            </p>
                        </TiltCard>
                    </RevealItem>

                    <div class="lg:col-span-2 space-y-8">
                        <div class="grid sm:grid-cols-2 md:grid-cols-3 gap-4">
                            {INTERESTS
                                .iter()
                                .enumerate()
                                .map(|(i, interest)| {
                                    view! {
                                        <RevealItem
                                            revealed
                                            delay=INTEREST_CARDS.delay(i)
                                            entrance=Entrance::Scale
                                        >
                                            <div
                                                class="group relative overflow-hidden glass-morphism rounded-xl p-4 text-center cursor-pointer transition-all duration-300 hover:-translate-y-1"
                                                on:mouseenter=move |_| set_hovered_interest.set(Some(i))
                                                on:mouseleave=move |_| set_hovered_interest.set(None)
                                            >
                                                <div class="absolute inset-0 bg-gradient-to-r from-blue-500/10 to-purple-500/10 opacity-0 group-hover:opacity-100 transition-opacity duration-300"></div>
                                                <div class="relative">
                                                    <div class="w-12 h-12 mx-auto mb-2 rounded-full bg-foreground/10 flex items-center justify-center text-2xl transition-transform duration-300 group-hover:scale-110 group-hover:rotate-[360deg]">
                                                        {interest.emoji}
                                                    </div>
                                                    <p class="font-semibold">{interest.label}</p>
                                                    <p class=move || {
                                                        format!(
                                                            "text-xs text-muted-foreground transition-opacity duration-300 {}",
                                                            if hovered_interest.get() == Some(i) {
                                                                "opacity-100"
                                                            } else {
                                                                "opacity-70"
                                                            },
                                                        )
                                                    }>{interest.description}</p>
                                                </div>
                                            </div>
                                        </RevealItem>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <div class="glass-morphism rounded-xl p-6">
                            <h3 class="text-lg font-semibold mb-4">"Fun Facts"</h3>
                            <ul class="grid sm:grid-cols-2 gap-3">
                                {FUN_FACTS
                                    .iter()
                                    .enumerate()
                                    .map(|(i, fact)| {
                                        view! {
                                            <li>
                                                <RevealItem
                                                    revealed
                                                    delay=FACTS.delay(i)
                                                    entrance=Entrance::Right
                                                    class="text-sm"
                                                >
                                                    {*fact}
                                                </RevealItem>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </div>

                        <RevealItem
                            revealed
                            delay=FACTS.delay(FUN_FACTS.len())
                            entrance=Entrance::Fade
                        >
                            <blockquote class="border-l-4 border-primary pl-4 italic">
                                <p class="text-lg">"\u{201c}" {quote} "\u{201d}"</p>
                                <footer class="text-sm text-muted-foreground mt-2">
                                    "- " {author}
                                </footer>
                            </blockquote>
                        </RevealItem>
                    </div>
                </div>
            </div>
        </section>
    }
}

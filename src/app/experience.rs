use leptos::{html, prelude::*};

use super::reveal::{use_reveal, RevealItem};
use crate::content::{Experience as Role, EXPERIENCES};
use crate::reveal::{Entrance, RevealMargin, Stagger};

const CARDS: Stagger = Stagger::new(0, 200);

/// One timeline entry. Each card latches on its own so long timelines reveal
/// as they are scrolled through.
#[component]
fn ExperienceCard(role: Role, index: usize) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let revealed = use_reveal(node, RevealMargin::CARD);
    let entrance = if index % 2 == 0 {
        Entrance::Left
    } else {
        Entrance::Right
    };
    let points = CARDS.then(index, 100);

    view! {
        <div node_ref=node class="relative pl-8 md:pl-12">
            <span class="absolute left-0 top-2 w-4 h-4 rounded-full bg-primary ring-4 ring-primary/20"></span>
            <RevealItem
                revealed
                delay=CARDS.delay(index)
                entrance
                class="glass-morphism rounded-xl p-6"
            >
                <div class="flex flex-wrap items-start justify-between gap-2 mb-4">
                    <div>
                        <h3 class="text-xl font-semibold">{role.title}</h3>
                        <p class="text-primary font-medium">{role.company}</p>
                    </div>
                    <div class="flex items-center gap-2 text-sm text-muted-foreground">
                        <span>{role.period}</span>
                        {role
                            .status
                            .map(|status| {
                                view! {
                                    <span class="px-2 py-0.5 rounded-full bg-green-500/20 text-green-500 text-xs font-medium">
                                        {status}
                                    </span>
                                }
                            })}
                    </div>
                </div>
                <ul class="space-y-2">
                    {role
                        .achievements
                        .iter()
                        .enumerate()
                        .map(|(i, achievement)| {
                            view! {
                                <li>
                                    <RevealItem
                                        revealed
                                        delay=points.delay(i)
                                        entrance=Entrance::Fade
                                        class="flex gap-2 text-sm leading-relaxed"
                                    >
                                        <span class="text-primary">"▹"</span>
                                        <span>{*achievement}</span>
                                    </RevealItem>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </RevealItem>
        </div>
    }
}

#[component]
pub fn Experience() -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let revealed = use_reveal(node, RevealMargin::SECTION);

    view! {
        <section id="experience" class="section-padding bg-muted/30">
            <div node_ref=node class="container-custom max-w-4xl">
                <RevealItem revealed class="text-center mb-12">
                    <h2 class="text-4xl font-bold gradient-text mb-4">"Experience"</h2>
                    <p class="text-muted-foreground">"Where I've been building"</p>
                </RevealItem>
                <div class="relative space-y-8 before:absolute before:left-[7px] before:top-0 before:h-full before:w-0.5 before:bg-border">
                    {EXPERIENCES
                        .iter()
                        .enumerate()
                        .map(|(index, role)| view! { <ExperienceCard role=*role index /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

use leptos::{html, prelude::*};

use super::reveal::{use_reveal, RevealItem};
use crate::content::{Skill, SKILL_CATEGORIES};
use crate::reveal::{transition_delay_style, RevealMargin, Stagger};

const CATEGORIES: Stagger = Stagger::new(0, 200);

#[component]
fn SkillBar(skill: Skill, revealed: Signal<bool>, delay: std::time::Duration) -> impl IntoView {
    view! {
        <div>
            <div class="flex justify-between text-sm mb-1">
                <span class="font-medium">{skill.name}</span>
                <span class="text-muted-foreground">{skill.level} "%"</span>
            </div>
            <div class="h-2 rounded-full bg-muted overflow-hidden">
                <div
                    class="h-full rounded-full bg-gradient-to-r from-primary to-purple-500 transition-[width] duration-1000 ease-out"
                    style=move || {
                        let width = if revealed.get() { skill.level } else { 0 };
                        format!("width: {width}%; {}", transition_delay_style(delay))
                    }
                ></div>
            </div>
        </div>
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let revealed = use_reveal(node, RevealMargin::SECTION);

    view! {
        <section id="skills" class="section-padding">
            <div node_ref=node class="container-custom">
                <RevealItem revealed class="text-center mb-12">
                    <h2 class="text-4xl font-bold gradient-text mb-4">"Skills"</h2>
                    <p class="text-muted-foreground">"What I work with day to day"</p>
                </RevealItem>
                <div class="grid md:grid-cols-2 gap-8">
                    {SKILL_CATEGORIES
                        .iter()
                        .enumerate()
                        .map(|(i, category)| {
                            let bars = CATEGORIES.then(i, 100);
                            view! {
                                <RevealItem
                                    revealed
                                    delay=CATEGORIES.delay(i)
                                    class="glass-morphism rounded-xl p-6"
                                >
                                    <h3 class=format!(
                                        "text-xl font-semibold mb-6 {}",
                                        category.color,
                                    )>{category.title}</h3>
                                    <div class="space-y-4">
                                        {category
                                            .skills
                                            .iter()
                                            .enumerate()
                                            .map(|(j, skill)| {
                                                view! {
                                                    <SkillBar skill=*skill revealed delay=bars.delay(j) />
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </RevealItem>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

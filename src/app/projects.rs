use leptos::{html, prelude::*};

use super::reveal::{use_reveal, RevealItem};
use super::tilt::TiltCard;
use crate::content::PROJECTS;
use crate::parallax::ParallaxProfile;
use crate::reveal::{Entrance, RevealMargin, Stagger};

const CARDS: Stagger = Stagger::new(0, 200);

#[component]
pub fn Projects() -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let revealed = use_reveal(node, RevealMargin::SECTION);

    view! {
        <section id="projects" class="section-padding">
            <div node_ref=node class="container-custom">
                <RevealItem revealed class="text-center mb-12">
                    <h2 class="text-4xl font-bold gradient-text mb-4">"Projects"</h2>
                    <p class="text-muted-foreground">"A few things I've shipped"</p>
                </RevealItem>
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(i, project)| {
                            view! {
                                <RevealItem revealed delay=CARDS.delay(i) entrance=Entrance::Scale>
                                    <TiltCard
                                        profile=ParallaxProfile::COMPACT
                                        class="group glass-morphism rounded-xl overflow-hidden h-full"
                                    >
                                        <div class="relative h-48 overflow-hidden">
                                            <img
                                                src=project.image
                                                alt=project.title
                                                loading="lazy"
                                                class="w-full h-full object-cover transition-transform duration-500 group-hover:scale-110"
                                            />
                                            <div class="absolute inset-0 bg-black/60 opacity-0 group-hover:opacity-100 transition-opacity flex items-center justify-center gap-4">
                                                {project
                                                    .links
                                                    .iter()
                                                    .map(|link| {
                                                        view! {
                                                            <a
                                                                href=link.url
                                                                target="_blank"
                                                                rel="noopener noreferrer"
                                                                class="px-4 py-2 rounded-md bg-primary text-primary-foreground text-sm font-medium"
                                                            >
                                                                {link.label}
                                                            </a>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </div>
                                        </div>
                                        <div class="p-6">
                                            <h3 class="text-xl font-semibold mb-2">{project.title}</h3>
                                            <p class="text-sm text-muted-foreground mb-4">
                                                {project.description}
                                            </p>
                                            <div class="flex flex-wrap gap-2">
                                                {project
                                                    .tags
                                                    .iter()
                                                    .map(|tag| {
                                                        view! {
                                                            <span class="px-2 py-1 rounded-md bg-primary/10 text-primary text-xs">
                                                                {*tag}
                                                            </span>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </div>
                                        </div>
                                    </TiltCard>
                                </RevealItem>
                            }
                        })
                        .collect_view()}
                </div>
                <RevealItem revealed delay=CARDS.delay(PROJECTS.len()) class="text-center mt-12">
                    <p class="text-muted-foreground mb-4">"Have something in mind?"</p>
                    <a
                        href="#contact"
                        class="inline-block px-6 py-3 rounded-md bg-primary text-primary-foreground font-medium hover:opacity-90"
                    >
                        "Let's build it together"
                    </a>
                </RevealItem>
            </div>
        </section>
    }
}

use leptos::{html, prelude::*};

use super::reveal::{use_reveal, RevealItem};
use super::tilt::TiltCard;
use crate::content::{EMAIL, HERO_STATS, LOCATION, NAME, RESUME_FILENAME, RESUME_PATH, ROLE, SUMMARY};
use crate::parallax::ParallaxProfile;
use crate::reveal::{Entrance, RevealMargin, Stagger};

const HEADLINE: Stagger = Stagger::new(0, 200);
const STATS: Stagger = Stagger::new(800, 100);

#[component]
pub fn Hero() -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let revealed = use_reveal(node, RevealMargin::SECTION);

    view! {
        <section id="about" class="min-h-screen flex items-center pt-16 section-padding">
            <div node_ref=node class="container-custom grid lg:grid-cols-2 gap-12 items-center">
                <div class="space-y-6">
                    <RevealItem revealed delay=HEADLINE.delay(0)>
                        <p class="text-primary font-medium">"Hi there, I'm"</p>
                    </RevealItem>
                    <RevealItem revealed delay=HEADLINE.delay(1)>
                        <h1 class="text-5xl md:text-6xl font-bold gradient-text">{NAME}</h1>
                    </RevealItem>
                    <RevealItem revealed delay=HEADLINE.delay(2)>
                        <h2 class="text-2xl md:text-3xl text-muted-foreground">{ROLE}</h2>
                    </RevealItem>
                    <RevealItem revealed delay=HEADLINE.delay(3)>
                        <p class="text-lg leading-relaxed max-w-xl">{SUMMARY}</p>
                    </RevealItem>
                    <RevealItem revealed delay=HEADLINE.delay(4)>
                        <div class="flex flex-wrap gap-4 text-sm text-muted-foreground">
                            <span>"📍 " {LOCATION}</span>
                            <a href=format!("mailto:{EMAIL}") class="hover:text-primary">
                                "📧 "
                                {EMAIL}
                            </a>
                        </div>
                    </RevealItem>
                    <RevealItem revealed delay=HEADLINE.delay(5)>
                        <div class="flex flex-wrap gap-4">
                            <a
                                href="#contact"
                                class="px-6 py-3 rounded-md bg-primary text-primary-foreground font-medium hover:opacity-90 transition"
                            >
                                "Get in touch"
                            </a>
                            <a
                                href=RESUME_PATH
                                download=RESUME_FILENAME
                                class="px-6 py-3 rounded-md border border-border font-medium hover:bg-accent transition"
                            >
                                "Download Resume"
                            </a>
                        </div>
                    </RevealItem>
                </div>

                <RevealItem revealed delay=STATS.base entrance=Entrance::Scale>
                    <TiltCard profile=ParallaxProfile::WIDE class="glass-morphism rounded-2xl p-8">
                        <div class="grid grid-cols-2 gap-6">
                            {HERO_STATS
                                .iter()
                                .enumerate()
                                .map(|(i, stat)| {
                                    view! {
                                        <RevealItem revealed delay=STATS.delay(i + 1) entrance=Entrance::Fade>
                                            <div class="text-center p-4 rounded-xl bg-background/50">
                                                <div class=format!("text-3xl font-bold {}", stat.accent)>
                                                    {stat.value}
                                                </div>
                                                <div class="text-sm text-muted-foreground mt-1">
                                                    {stat.label}
                                                </div>
                                            </div>
                                        </RevealItem>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </TiltCard>
                </RevealItem>
            </div>
        </section>
    }
}

use leptos::{html, prelude::*};

use super::reveal::{use_reveal, RevealItem};
use crate::content::{CERTIFICATIONS, EDUCATION};
use crate::reveal::{Entrance, RevealMargin, Stagger};

const DEGREES: Stagger = Stagger::new(0, 200);
const CERTS: Stagger = Stagger::new(400, 100);

#[component]
pub fn Education() -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let revealed = use_reveal(node, RevealMargin::SECTION);

    view! {
        <section id="education" class="section-padding bg-muted/30">
            <div node_ref=node class="container-custom max-w-5xl">
                <RevealItem revealed class="text-center mb-12">
                    <h2 class="text-4xl font-bold gradient-text mb-4">"Education"</h2>
                </RevealItem>
                <div class="grid md:grid-cols-2 gap-8 mb-12">
                    {EDUCATION
                        .iter()
                        .enumerate()
                        .map(|(i, edu)| {
                            view! {
                                <RevealItem
                                    revealed
                                    delay=DEGREES.delay(i)
                                    class="glass-morphism rounded-xl p-6"
                                >
                                    <span class="text-xs uppercase tracking-wide text-primary">
                                        {edu.kind}
                                    </span>
                                    <h3 class="text-lg font-semibold mt-2">{edu.degree}</h3>
                                    <p class="text-muted-foreground">{edu.institution}</p>
                                    <div class="flex justify-between text-sm mt-4">
                                        <span>{edu.period}</span>
                                        <span class="font-medium">{edu.grade}</span>
                                    </div>
                                </RevealItem>
                            }
                        })
                        .collect_view()}
                </div>
                <RevealItem revealed delay=CERTS.base class="text-center mb-6">
                    <h3 class="text-2xl font-semibold">"Certifications"</h3>
                </RevealItem>
                <div class="grid sm:grid-cols-3 gap-4">
                    {CERTIFICATIONS
                        .iter()
                        .enumerate()
                        .map(|(i, cert)| {
                            view! {
                                <RevealItem
                                    revealed
                                    delay=CERTS.delay(i + 1)
                                    entrance=Entrance::Scale
                                    class=format!("rounded-xl p-4 text-center {}", cert.color)
                                >
                                    <div class="text-3xl mb-2">{cert.icon}</div>
                                    <p class="font-semibold">{cert.title}</p>
                                    <p class="text-xs opacity-80">{cert.issuer}</p>
                                </RevealItem>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

use leptos::{ev::SubmitEvent, html, prelude::*};
use log::{debug, warn};

use super::reveal::{use_reveal, RevealItem};
use crate::contact::{ContactForm, FormStatus, SIMULATED_SEND};
use crate::content::{CONTACT_DETAILS, SOCIAL_LINKS};
use crate::reveal::{Entrance, RevealMargin, Stagger};

const DETAILS: Stagger = Stagger::new(400, 100);

const INPUT_CLASS: &str = "w-full px-4 py-3 rounded-md bg-background border border-border focus:outline-none focus:ring-2 focus:ring-primary";

#[component]
fn ContactFormPanel() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let status = RwSignal::new(FormStatus::default());
    let pending = StoredValue::new(None::<TimeoutHandle>);

    on_cleanup(move || {
        if let Some(handle) = pending.try_update_value(Option::take).flatten() {
            handle.clear();
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked().is_sending() {
            return;
        }
        let message = match form.with_untracked(ContactForm::validate) {
            Ok(message) => message,
            Err(e) => {
                status.set(FormStatus::Rejected(e));
                return;
            }
        };
        debug!("sending message from {}", message.email);
        status.set(FormStatus::Sending);
        let sent = move || {
            pending.set_value(None);
            form.update(ContactForm::clear);
            status.set(FormStatus::Sent);
        };
        match set_timeout_with_handle(sent, SIMULATED_SEND) {
            Ok(handle) => pending.set_value(Some(handle)),
            Err(e) => {
                warn!("could not schedule contact send: {e:?}");
                status.set(FormStatus::Idle);
            }
        }
    };

    view! {
        <form class="glass-morphism rounded-xl p-6 space-y-4" on:submit=on_submit novalidate=true>
            <div>
                <label for="contact-name" class="block text-sm font-medium mb-1">
                    "Name"
                </label>
                <input
                    id="contact-name"
                    type="text"
                    class=INPUT_CLASS
                    placeholder="Your name"
                    prop:value=move || form.with(|f| f.name.clone())
                    on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                />
            </div>
            <div>
                <label for="contact-email" class="block text-sm font-medium mb-1">
                    "Email"
                </label>
                <input
                    id="contact-email"
                    type="email"
                    class=INPUT_CLASS
                    placeholder="you@example.com"
                    prop:value=move || form.with(|f| f.email.clone())
                    on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                />
            </div>
            <div>
                <label for="contact-message" class="block text-sm font-medium mb-1">
                    "Message"
                </label>
                <textarea
                    id="contact-message"
                    rows="5"
                    class=INPUT_CLASS
                    placeholder="What would you like to talk about?"
                    prop:value=move || form.with(|f| f.message.clone())
                    on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
                ></textarea>
            </div>
            <button
                type="submit"
                class="w-full px-6 py-3 rounded-md bg-primary text-primary-foreground font-medium hover:opacity-90 disabled:opacity-50 transition"
                disabled=move || status.with(FormStatus::is_sending)
            >
                {move || if status.with(FormStatus::is_sending) { "Sending..." } else { "Send Message" }}
            </button>
            {move || match status.get() {
                FormStatus::Idle | FormStatus::Sending => None,
                FormStatus::Sent => {
                    Some(
                        view! {
                            <p class="text-sm text-green-500" role="status">
                                "Thanks for reaching out! I'll get back to you soon."
                            </p>
                        }
                            .into_any(),
                    )
                }
                FormStatus::Rejected(e) => {
                    Some(
                        view! {
                            <p class="text-sm text-red-500" role="alert">
                                {e.to_string()}
                            </p>
                        }
                            .into_any(),
                    )
                }
            }}
        </form>
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let revealed = use_reveal(node, RevealMargin::SECTION);

    view! {
        <section id="contact" class="section-padding bg-muted/30">
            <div node_ref=node class="container-custom max-w-5xl">
                <RevealItem revealed class="text-center mb-12">
                    <h2 class="text-4xl font-bold gradient-text mb-4">"Get In Touch"</h2>
                    <p class="text-muted-foreground">
                        "Open to new opportunities, collaborations, or just a good conversation."
                    </p>
                </RevealItem>
                <div class="grid md:grid-cols-2 gap-8">
                    <div class="space-y-4">
                        {CONTACT_DETAILS
                            .iter()
                            .enumerate()
                            .map(|(i, detail)| {
                                view! {
                                    <RevealItem revealed delay=DETAILS.delay(i) entrance=Entrance::Left>
                                        <a
                                            href=detail.href
                                            class="flex items-center gap-4 glass-morphism rounded-xl p-4 hover:text-primary transition-colors"
                                        >
                                            <span class="text-2xl">{detail.icon}</span>
                                            <span>
                                                <span class="block text-xs text-muted-foreground">
                                                    {detail.label}
                                                </span>
                                                <span class="font-medium">{detail.value}</span>
                                            </span>
                                        </a>
                                    </RevealItem>
                                }
                            })
                            .collect_view()}
                        <RevealItem
                            revealed
                            delay=DETAILS.delay(CONTACT_DETAILS.len())
                            entrance=Entrance::Left
                            class="flex gap-4 pt-4"
                        >
                            {SOCIAL_LINKS
                                .iter()
                                .map(|link| {
                                    view! {
                                        <a
                                            href=link.href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            aria-label=link.label
                                            class="w-12 h-12 rounded-full glass-morphism flex items-center justify-center text-2xl hover:text-primary"
                                        >
                                            <i class=link.icon></i>
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </RevealItem>
                    </div>
                    <RevealItem revealed delay=DETAILS.base entrance=Entrance::Right>
                        <ContactFormPanel />
                    </RevealItem>
                </div>
            </div>
        </section>
    }
}

use std::time::Duration;

use leptos::prelude::*;
use log::warn;

use crate::intro::{IntroRunner, IntroSequencer, IntroTiming, Phase, GREETINGS};
use crate::reveal::{animation_delay_style, Stagger};
use crate::timer::{TimerCallback, TimerHandle, TimerHost};

/// `setTimeout` backed timers for the intro runner.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimers;

pub struct BrowserTimeout(Option<TimeoutHandle>);

impl TimerHandle for BrowserTimeout {
    fn cancel(self) {
        if let Some(handle) = self.0 {
            handle.clear();
        }
    }
}

impl TimerHost for BrowserTimers {
    type Handle = BrowserTimeout;

    fn schedule(&self, delay: Duration, callback: TimerCallback) -> Self::Handle {
        match set_timeout_with_handle(callback, delay) {
            Ok(handle) => BrowserTimeout(Some(handle)),
            Err(e) => {
                warn!("could not schedule intro timer: {e:?}");
                BrowserTimeout(None)
            }
        }
    }
}

const DOTS: Stagger = Stagger::new(0, 200);

/// Full-screen splash cycling through [`GREETINGS`]. Calls `on_complete` once
/// the fade-out has finished.
#[component]
pub fn IntroSplash(on_complete: Callback<()>) -> impl IntoView {
    let (phase, set_phase) = signal(Phase::Showing(0));
    let runner = StoredValue::new_local(IntroRunner::new(
        BrowserTimers,
        IntroSequencer::new(GREETINGS.len(), IntroTiming::DEFAULT),
        move |p| set_phase.set(p),
        move || on_complete.run(()),
    ));

    Effect::new(move |_| {
        runner.with_value(|r| r.start());
    });
    on_cleanup(move || {
        runner.try_with_value(|r| r.teardown());
    });

    let greeting_index = Memo::new(move |_| match phase.get() {
        Phase::Showing(i) => i,
        Phase::FadingOut | Phase::Done => GREETINGS.len().saturating_sub(1),
    });
    let fading = move || !matches!(phase.get(), Phase::Showing(_));

    view! {
        <div class=move || {
            format!(
                "fixed inset-0 z-50 flex flex-col items-center justify-center bg-gradient-to-br from-background via-background to-primary/10 transition-opacity duration-500 {}",
                if fading() { "opacity-0 pointer-events-none" } else { "opacity-100" },
            )
        }>
            // re-rendered per greeting so the entrance keyframes replay
            {move || {
                let greeting = GREETINGS[greeting_index.get()];
                view! {
                    <div class="greeting-enter text-center">
                        <h1 class="text-6xl md:text-8xl font-bold gradient-text mb-4">
                            {greeting.text}
                        </h1>
                        <p class="text-lg text-muted-foreground">{greeting.language}</p>
                    </div>
                }
            }}
            <div class="flex gap-2 mt-12" aria-hidden="true">
                {(0..3)
                    .map(|i| {
                        view! {
                            <span
                                class="loading-dot w-3 h-3 rounded-full bg-primary"
                                style=animation_delay_style(DOTS.delay(i))
                            ></span>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

use std::time::Duration;

use leptos::{ev::TransitionEvent, html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

use crate::reveal::{
    entrance_delay_style, in_viewport, Entrance, Rect, RevealLatch, RevealMargin,
};

/// Viewport-relative bounding box of `el`.
pub fn client_rect(el: &web_sys::Element) -> Rect {
    let r: web_sys::DomRect = el.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.width(), r.height())
}

/// Latches to `true` the first time `target` scrolls into the viewport shrunk
/// by `margin`, and stays there.
pub fn use_reveal(target: NodeRef<html::Div>, margin: RevealMargin) -> Signal<bool> {
    let (revealed, set_revealed) = signal(false);
    let latch = StoredValue::new(RevealLatch::new());

    let observe = move |intersecting: bool| {
        let flipped = latch
            .try_update_value(|l| l.observe(intersecting))
            .unwrap_or_default();
        if flipped {
            set_revealed.set(true);
        }
    };

    // Elements already on screen at mount never produce an intersection
    // change, so check them directly.
    Effect::new(move |_| {
        let Some(el) = target.get() else {
            return;
        };
        if latch.with_value(|l| l.has_entered()) {
            return;
        }
        let window = window();
        let width = window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or_default();
        let height = window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or_default();
        if in_viewport(client_rect(&el), width, height, margin) {
            // wait two frames so the hidden pose is painted and the transition runs
            request_animation_frame(move || request_animation_frame(move || observe(true)));
        }
    });

    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            observe(entries.iter().any(|entry| entry.is_intersecting()));
        },
        UseIntersectionObserverOptions::default().root_margin(margin.root_margin()),
    );

    Effect::new(move |_| {
        if revealed.get() {
            stop();
        }
    });

    revealed.into()
}

/// Wraps `children` in an element that transitions from `entrance`'s hidden
/// pose to its resting pose once `revealed` is set. The stagger delay only
/// applies to that entrance.
#[component]
pub fn RevealItem(
    #[prop(into)] revealed: Signal<bool>,
    #[prop(optional)] delay: Duration,
    #[prop(optional)] entrance: Entrance,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let (settled, set_settled) = signal(false);
    let on_transition_end = move |ev: TransitionEvent| {
        // ignore transitions bubbling up from children
        if revealed.get_untracked() && ev.target() == ev.current_target() {
            set_settled.set(true);
        }
    };

    view! {
        <div
            class=move || {
                format!(
                    "transition-all duration-700 ease-out {} {}",
                    entrance.class(revealed.get()),
                    class,
                )
            }
            style=move || entrance_delay_style(delay, settled.get())
            on:transitionend=on_transition_end
        >
            {children()}
        </div>
    }
}

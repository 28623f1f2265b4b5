use leptos::{ev::MouseEvent, html, prelude::*};
use leptos_use::{
    use_raf_fn_with_options, utils::Pausable, UseRafFnCallbackArgs, UseRafFnOptions,
};

use super::reveal::client_rect;
use crate::parallax::{ParallaxProfile, Tilt, TiltState};

/// Tilts toward the pointer while hovered and springs back to flat on leave.
#[component]
pub fn TiltCard(
    #[prop(optional)] profile: Option<ParallaxProfile>,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let state = StoredValue::new(TiltState::new(profile.unwrap_or(ParallaxProfile::WIDE)));
    let (tilt, set_tilt) = signal(Tilt::NEUTRAL);
    let (animating, set_animating) = signal(false);

    let Pausable { pause, resume, .. } = use_raf_fn_with_options(
        move |args: UseRafFnCallbackArgs| {
            let dt = args.delta / 1000.0;
            let Some((moving, current)) = state.try_update_value(|s| (s.step(dt), s.current()))
            else {
                return;
            };
            set_tilt.set(current);
            if !moving {
                set_animating.set(false);
            }
        },
        UseRafFnOptions::default().immediate(false),
    );

    // only burn frames while the springs are moving
    Effect::new(move |_| {
        if animating.get() {
            resume();
        } else {
            pause();
        }
    });

    let on_move = move |ev: MouseEvent| {
        let Some(el) = node.get_untracked() else {
            return;
        };
        let bounds = client_rect(&el);
        state.update_value(|s| s.pointer_move(ev.client_x() as f64, ev.client_y() as f64, bounds));
        set_animating.set(true);
    };
    let on_leave = move |_: MouseEvent| {
        state.update_value(|s| s.pointer_leave());
        set_animating.set(true);
    };

    view! {
        <div
            node_ref=node
            class=class
            style:transform-style="preserve-3d"
            style:transform=move || tilt.get().css_transform()
            on:mousemove=on_move
            on:mouseleave=on_leave
        >
            {children()}
        </div>
    }
}

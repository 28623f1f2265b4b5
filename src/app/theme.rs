use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

#[cfg(feature = "hydrate")]
use crate::theme::THEME_STORAGE_KEY;
use crate::theme::Theme;

#[derive(Debug, Clone, Copy)]
pub struct ThemeContext {
    pub theme: Signal<Theme>,
    set_theme: WriteSignal<Theme>,
}

impl ThemeContext {
    pub fn toggle(&self) {
        self.set_theme.update(|t| *t = t.toggled());
    }
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

/// Provides [`ThemeContext`] and applies the theme class to everything below
/// it. The choice persists in local storage across visits.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let (theme, set_theme, _) = use_local_storage::<Theme, JsonSerdeWasmCodec>(THEME_STORAGE_KEY);
    #[cfg(not(feature = "hydrate"))]
    let (theme, set_theme) = {
        let (theme, set_theme) = signal(Theme::default());
        (Signal::from(theme), set_theme)
    };

    provide_context(ThemeContext { theme, set_theme });

    view! {
        <div class=move || {
            format!(
                "{} min-h-screen bg-background text-foreground transition-colors duration-300",
                theme.get().class_name(),
            )
        }>{children()}</div>
    }
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme();

    view! {
        <button
            class="p-2 rounded-full hover:bg-accent transition-colors"
            aria-label=move || ctx.theme.get().toggle_label()
            title=move || ctx.theme.get().toggle_label()
            on:click=move |_| ctx.toggle()
        >
            {move || match ctx.theme.get() {
                Theme::Dark => "☀️",
                Theme::Light => "🌙",
            }}
        </button>
    }
}

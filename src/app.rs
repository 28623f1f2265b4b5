mod contact;
mod education;
mod experience;
mod footer;
mod hero;
mod homepage;
mod intro;
mod navigation;
mod personal;
mod projects;
mod reveal;
mod skills;
mod tech_scroll;
mod theme;
mod tilt;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::NAME;
use homepage::HomePage;
use intro::IntroSplash;
use theme::ThemeProvider;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{NAME} - {title}") />
        <Meta name="description" content="Portfolio of a full stack software engineer" />

        <ThemeProvider>
            <Router>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=Landing />
                </Routes>
            </Router>
        </ThemeProvider>
    }
}

/// Greets the visitor, then swaps the splash for the page.
#[component]
fn Landing() -> impl IntoView {
    let (intro_done, set_intro_done) = signal(false);
    let on_complete = Callback::new(move |_| set_intro_done.set(true));

    view! {
        <Show when=move || intro_done.get() fallback=move || view! { <IntroSplash on_complete /> }>
            <HomePage />
        </Show>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <Title text="Not Found" />
        <div class="min-h-screen flex flex-col items-center justify-center gap-4">
            <h1 class="text-4xl font-bold">"404"</h1>
            <p class="text-muted-foreground">"Nothing lives at this address."</p>
            <A href="/" attr:class="text-primary underline">
                "Back home"
            </A>
        </div>
    }
}

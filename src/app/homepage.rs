use leptos::prelude::*;
use leptos_meta::Title;

use super::contact::Contact;
use super::education::Education;
use super::experience::Experience;
use super::footer::Footer;
use super::hero::Hero;
use super::navigation::Navigation;
use super::personal::Personal;
use super::projects::Projects;
use super::skills::Skills;
use super::tech_scroll::TechScroll;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Navigation />
        <main>
            <Hero />
            <TechScroll />
            <Skills />
            <Experience />
            <Projects />
            <Education />
            <Personal />
            <Contact />
        </main>
        <Footer />
    }
}

mod about;
mod backdrop;
mod contact;
mod hero;
mod icons;
mod nav;
mod projects;
mod reveal;
mod skills;
mod viewport;

use chrono::Datelike;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::observers::Observers;
use crate::pointer::PointerPosition;
use crate::profile;
use crate::sections::SectionId;

use about::About;
use backdrop::Backdrop;
use contact::Contact;
use hero::Hero;
use nav::NavBar;
use projects::Projects;
use reveal::Reveal;
use skills::Skills;
use viewport::BrowserViewport;

pub(crate) const GRADIENT_BUTTON: &str = "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-medium text-white bg-gradient-to-r from-purple-600 to-pink-600 hover:from-purple-700 hover:to-pink-700 transition-colors";
pub(crate) const OUTLINE_BUTTON: &str = "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-medium border border-purple-500 text-purple-400 hover:bg-purple-500/20 transition-colors";
pub(crate) const CARD: &str = "bg-gradient-to-br from-purple-900/20 to-pink-900/20 rounded-xl border border-purple-500/20 backdrop-blur-sm";

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-black">
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
        <Title formatter=|title| format!("{} - {title}", profile::NAME) />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

/// The whole portfolio. Owns the active section and pointer position and
/// keeps the window observers alive for as long as it is mounted.
#[component]
fn HomePage() -> impl IntoView {
    let (active, set_active) = signal(SectionId::default());
    let (pointer, set_pointer) = signal(PointerPosition::default());

    let observers = Observers::mount(
        BrowserViewport,
        move |section| {
            if active.get_untracked() != section {
                log::debug!("active section: {section}");
                set_active.set(section);
            }
        },
        move |pos| set_pointer.set(pos),
    );
    on_cleanup(move || observers.unmount());

    view! {
        <Title text="Portfolio" />
        <main class="min-h-screen bg-black text-white overflow-hidden">
            <Backdrop pointer />
            <NavBar active />
            <Hero />
            <About />
            <Skills />
            <Projects />
            <Contact />
            <Footer />
        </main>
    }
}

/// Centered section title with the gradient underline.
#[component]
pub(crate) fn SectionHeading(title: &'static str) -> impl IntoView {
    view! {
        <Reveal animation="animate-fade-in" class="mb-12 text-center">
            <h2 class="text-3xl md:text-4xl font-bold mb-2">{title}</h2>
            <div class="w-20 h-1 bg-gradient-to-r from-purple-400 to-pink-500 mx-auto"></div>
        </Reveal>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="py-8 border-t border-purple-900/30">
            <div class="container mx-auto px-4 text-center">
                <p class="text-gray-400">
                    {format!("© {} {}. All rights reserved.", copyright_year(), profile::NAME)}
                </p>
            </div>
        </footer>
    }
}

// Taken from the build stamp so the server and the hydrated client agree.
fn copyright_year() -> i32 {
    chrono::DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|t| t.year())
        .unwrap_or_else(|_| chrono::Utc::now().year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_year_from_build_stamp() {
        let stamped = chrono::DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
            .expect("build.rs should stamp an RFC 3339 time");
        assert_eq!(copyright_year(), stamped.year());
    }
}

mod about;
mod browser;
mod certifications;
mod contact;
mod education;
mod footer;
mod header;
mod hero;
mod projects;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::portfolio;
use crate::selection::{Selectable, TabState};

use about::About;
use browser::{provide_body_scroll, provide_theme, use_hydrated};
use certifications::Certifications;
use contact::Contact;
use education::Education;
use footer::Footer;
use header::Header;
use hero::Hero;
use projects::Projects;
use skills::Skills;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let theme = provide_theme();
    let scroll_locked = provide_body_scroll();
    let hydrated = use_hydrated();
    let name = portfolio().profile.name.clone();

    view! {
        <Html {..} lang="en" class=move || theme.get().class_name() />
        <Body
            {..}
            class=move || {
                format!(
                    "bg-white dark:bg-gray-900{}{}",
                    if hydrated.get() { " hydrated" } else { "" },
                    if scroll_locked.get() { " overflow-hidden" } else { "" },
                )
            }
        />
        <Title formatter=move |title| format!("{name} - {title}") />

        <Router>
            <Header />
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <About />
        <Skills />
        <Projects />
        <Certifications />
        <Education />
        <Contact />
    }
}

/// Heading and accent bar shared by every content section.
#[component]
fn SectionTitle(title: &'static str) -> impl IntoView {
    view! {
        <div class="text-center mb-16">
            <h2 class="text-3xl md:text-4xl font-bold text-gray-900 dark:text-white mb-4">
                {title}
            </h2>
            <div class="h-1 w-20 bg-indigo-600 dark:bg-indigo-400 mx-auto"></div>
        </div>
    }
}

/// One button per option, the active one highlighted.
#[component]
fn TabButtons<T: Selectable + Send + Sync>(state: RwSignal<TabState<T>>) -> impl IntoView {
    let buttons = T::ALL
        .iter()
        .map(|&option| {
            view! {
                <button
                    class=move || {
                        if state.get().is_active(option) {
                            "px-5 py-2 rounded-full font-medium bg-indigo-600 text-white shadow-md transition-colors duration-300"
                        } else {
                            "px-5 py-2 rounded-full font-medium bg-gray-200 dark:bg-gray-700 text-gray-700 dark:text-gray-300 hover:bg-gray-300 dark:hover:bg-gray-600 transition-colors duration-300"
                        }
                    }
                    on:click=move |_| {
                        state.update(|s| {
                            s.select(option);
                        })
                    }
                >
                    {option.label()}
                </button>
            }
        })
        .collect_view();

    view! { <div class="flex flex-wrap justify-center gap-3 mb-12">{buttons}</div> }
}

use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window};

use crate::content::portfolio;
use crate::page::{is_scrolled, MenuState};

use super::browser::use_theme;

#[component]
pub fn Header() -> impl IntoView {
    let (scrolled, set_scrolled) = signal(false);
    let menu = RwSignal::new(MenuState::default());

    let _ = use_event_listener(use_window(), ev::scroll, move |_| {
        let y = window().scroll_y().unwrap_or_default();
        let now = is_scrolled(y);
        if scrolled.get_untracked() != now {
            set_scrolled.set(now);
        }
    });

    let header_class = move || {
        if scrolled.get() {
            "fixed w-full z-50 transition-all duration-300 bg-white/90 dark:bg-gray-900/90 backdrop-blur-md shadow-md py-2"
        } else {
            "fixed w-full z-50 transition-all duration-300 bg-transparent py-4"
        }
    };

    let links = move |mobile: bool| {
        portfolio()
            .nav
            .iter()
            .map(|item| {
                let class = if mobile {
                    "block px-3 py-2 rounded-md text-base font-medium text-gray-700 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-gray-800"
                } else {
                    "text-gray-700 dark:text-gray-300 hover:text-indigo-600 dark:hover:text-indigo-400 transition-colors duration-300"
                };
                view! {
                    <a href=item.href.clone() class=class on:click=move |_| menu.update(MenuState::navigate)>
                        {item.name.clone()}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <header class=header_class>
            <div class="container mx-auto px-4 md:px-6">
                <div class="flex items-center justify-between">
                    <a href="#home" class="text-2xl font-bold text-indigo-600 dark:text-indigo-400">
                        {portfolio().profile.name.clone()}
                    </a>
                    <nav class="hidden md:flex items-center space-x-8">
                        {links(false)} <ThemeToggle />
                    </nav>
                    <div class="md:hidden flex items-center space-x-4">
                        <ThemeToggle />
                        <button
                            class="p-2 rounded-md text-gray-700 dark:text-gray-300"
                            aria-label="Toggle menu"
                            on:click=move |_| menu.update(MenuState::toggle)
                        >
                            {move || if menu.get().is_open() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>
            </div>
            <Show when=move || menu.get().is_open()>
                <div class="md:hidden bg-white dark:bg-gray-900 shadow-lg">
                    <div class="px-2 pt-2 pb-3 space-y-1 sm:px-3">{links(true)}</div>
                </div>
            </Show>
        </header>
    }
}

#[component]
fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();

    view! {
        <button
            class="p-2 rounded-full bg-gray-200 dark:bg-gray-700 text-gray-800 dark:text-gray-200 hover:bg-gray-300 dark:hover:bg-gray-600 transition-colors duration-300"
            aria-label="Toggle theme"
            on:click=move |_| theme.toggle()
        >
            {move || if theme.theme().get().is_dark() { "☀" } else { "☾" }}
        </button>
    }
}

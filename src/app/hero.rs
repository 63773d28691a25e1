use leptos::prelude::*;
use leptos_use::use_interval_fn;

use crate::content::portfolio;
use crate::page::{RotatingText, ROLE_ROTATION};

#[component]
pub fn Hero() -> impl IntoView {
    let profile = &portfolio().profile;
    let socials = &portfolio().socials;
    let role = RwSignal::new(RotatingText::new(profile.roles.len()));

    let _ = use_interval_fn(
        move || {
            role.update(|r| {
                r.advance();
            })
        },
        ROLE_ROTATION.as_millis() as u64,
    );

    view! {
        <section
            id="home"
            class="relative min-h-screen flex items-center pt-20 bg-gradient-to-br from-indigo-50 to-white dark:from-gray-900 dark:to-gray-800"
        >
            <div class="container mx-auto px-4 md:px-6 flex flex-col-reverse md:flex-row items-center gap-12">
                <div class="md:w-1/2 text-center md:text-left">
                    <p class="text-indigo-600 dark:text-indigo-400 font-medium mb-2">"Hello, I'm"</p>
                    <h1 class="text-4xl md:text-6xl font-bold text-gray-900 dark:text-white mb-4">
                        {profile.name.clone()}
                    </h1>
                    <h2 class="text-2xl md:text-3xl text-gray-700 dark:text-gray-300 mb-6 h-10">
                        <span class="text-indigo-600 dark:text-indigo-400 transition-opacity duration-500">
                            {move || {
                                role.get().current(&portfolio().profile.roles).unwrap_or_default()
                            }}
                        </span>
                    </h2>
                    <p class="text-lg text-gray-600 dark:text-gray-400 mb-8 max-w-xl">
                        {profile.tagline.clone()}
                    </p>
                    <div class="flex flex-wrap gap-4 justify-center md:justify-start mb-8">
                        <a
                            href="#contact"
                            class="px-6 py-3 bg-indigo-600 hover:bg-indigo-700 text-white rounded-lg font-medium transition-colors duration-300"
                        >
                            "Contact Me"
                        </a>
                        <a
                            href="#projects"
                            class="px-6 py-3 border-2 border-indigo-600 text-indigo-600 dark:text-indigo-400 dark:border-indigo-400 hover:bg-indigo-50 dark:hover:bg-gray-800 rounded-lg font-medium transition-colors duration-300"
                        >
                            "View Projects"
                        </a>
                    </div>
                    <div class="flex gap-6 justify-center md:justify-start">
                        <a href=socials.github.clone() target="_blank" rel="noopener noreferrer" class="text-gray-700 dark:text-gray-300 hover:text-indigo-600">
                            "GitHub"
                        </a>
                        <a href=socials.linkedin.clone() target="_blank" rel="noopener noreferrer" class="text-gray-700 dark:text-gray-300 hover:text-indigo-600">
                            "LinkedIn"
                        </a>
                        <a href=socials.email.clone() class="text-gray-700 dark:text-gray-300 hover:text-indigo-600">
                            "Email"
                        </a>
                    </div>
                </div>
                <div class="md:w-1/2 flex justify-center">
                    <img
                        src=profile.image_url.clone()
                        alt=profile.name.clone()
                        class="w-64 h-64 md:w-80 md:h-80 rounded-full object-cover border-4 border-indigo-600 dark:border-indigo-400 shadow-xl"
                    />
                </div>
            </div>
            <a
                href="#about"
                class="absolute bottom-8 left-1/2 -translate-x-1/2 text-gray-500 dark:text-gray-400 animate-bounce"
                aria-label="Scroll down"
            >
                "↓"
            </a>
        </section>
    }
}

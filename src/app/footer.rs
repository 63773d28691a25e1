use leptos::prelude::*;

use crate::content::portfolio;
use crate::page::copyright_year;

const FOOTER_LINKS: [(&str, &str); 3] = [
    ("About", "#about"),
    ("Projects", "#projects"),
    ("Contact", "#contact"),
];

#[component]
pub fn Footer() -> impl IntoView {
    let socials = &portfolio().socials;
    let link_class = "text-gray-700 dark:text-gray-300 hover:text-indigo-600 dark:hover:text-indigo-400 transition-colors";

    view! {
        <footer class="py-10 bg-white dark:bg-gray-900 border-t border-gray-200 dark:border-gray-800">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex flex-col md:flex-row justify-between items-center">
                    <div class="mb-4 md:mb-0">
                        <a href="#home" class="text-xl font-bold text-indigo-600 dark:text-indigo-400">
                            {portfolio().profile.name.clone()}
                        </a>
                        <p class="mt-2 text-sm text-gray-600 dark:text-gray-400">
                            "© " {copyright_year()} " All rights reserved."
                        </p>
                    </div>
                    <div class="flex flex-col sm:flex-row items-center gap-6">
                        <nav class="flex gap-6">
                            {FOOTER_LINKS
                                .into_iter()
                                .map(|(name, href)| view! { <a href=href class=link_class>{name}</a> })
                                .collect_view()}
                        </nav>
                        <div class="flex items-center space-x-4">
                            <a href=socials.github.clone() target="_blank" rel="noopener noreferrer" class=link_class>
                                "GitHub"
                            </a>
                            <a href=socials.linkedin.clone() target="_blank" rel="noopener noreferrer" class=link_class>
                                "LinkedIn"
                            </a>
                            <a href=socials.email.clone() class=link_class>
                                "Email"
                            </a>
                        </div>
                    </div>
                </div>
            </div>
        </footer>
    }
}

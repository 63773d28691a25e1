use std::time::Duration;

use leptos::{html, prelude::*};

use crate::content::portfolio;
use crate::reveal::{stagger_style, Entrance};

use super::browser::use_reveal;
use super::SectionTitle;

const ITEM_STAGGER: Duration = Duration::from_millis(200);

/// Timeline of certifications, alternating sides on wide screens.
#[component]
pub fn Certifications() -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section);

    let items = portfolio()
        .certifications
        .iter()
        .enumerate()
        .map(|(i, cert)| {
            let side = if i % 2 == 0 {
                "ml-12 md:ml-0 md:mr-[50%] md:pr-12 md:text-right"
            } else {
                "ml-12 md:ml-[50%] md:pl-12"
            };
            view! {
                <div
                    class=move || {
                        format!(
                            "relative transition-opacity duration-1000 {}",
                            Entrance::FadeIn.classes(revealed.get()),
                        )
                    }
                    style=stagger_style(i, ITEM_STAGGER)
                >
                    <div class="absolute left-0 md:left-1/2 -translate-y-1/2 md:-translate-x-1/2 flex items-center justify-center w-8 h-8 bg-indigo-500 dark:bg-indigo-600 rounded-full text-white text-sm">
                        "★"
                    </div>
                    <div class=side>
                        <div class="bg-white dark:bg-gray-700 p-6 rounded-lg shadow-md hover:shadow-lg transition-shadow">
                            <h3 class="text-xl font-bold text-gray-900 dark:text-white mb-1">
                                {cert.title.clone()}
                            </h3>
                            <div class="mb-4 text-sm text-gray-600 dark:text-gray-400">
                                <span>{cert.issuer.clone()}</span>
                                <span class="mx-2">"•"</span>
                                <span>{cert.date.clone()}</span>
                            </div>
                            <p class="text-gray-700 dark:text-gray-300 mb-4">
                                {cert.description.clone()}
                            </p>
                            <a
                                href=cert.credential_url.clone()
                                target="_blank"
                                rel="noopener noreferrer"
                                class="inline-block text-indigo-600 dark:text-indigo-400 font-medium hover:underline"
                            >
                                "View Credential"
                            </a>
                        </div>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section node_ref=section id="certifications" class="py-20 bg-gray-50 dark:bg-gray-800">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <SectionTitle title="Certifications" />
                <div class="max-w-4xl mx-auto relative">
                    <div class="absolute left-0 md:left-1/2 md:-translate-x-1/2 h-full w-1 bg-indigo-200 dark:bg-indigo-800"></div>
                    <div class="space-y-12">{items}</div>
                </div>
            </div>
        </section>
    }
}

use std::time::Duration;

use leptos::{html, prelude::*};

use crate::content::portfolio;
use crate::reveal::{stagger_style, Entrance};

use super::browser::use_reveal;
use super::SectionTitle;

const CARD_STAGGER: Duration = Duration::from_millis(100);

#[component]
pub fn About() -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section);

    let cards = portfolio()
        .highlights
        .iter()
        .enumerate()
        .map(|(i, h)| {
            view! {
                <div
                    class=move || {
                        format!(
                            "p-6 bg-gray-50 dark:bg-gray-800 rounded-xl shadow-md transition-all duration-700 {}",
                            Entrance::SlideUp.classes(revealed.get()),
                        )
                    }
                    style=stagger_style(i, CARD_STAGGER)
                >
                    <div class="text-3xl mb-4">{h.icon.clone()}</div>
                    <h3 class="text-xl font-semibold text-gray-900 dark:text-white mb-2">
                        {h.title.clone()}
                    </h3>
                    <p class="text-gray-600 dark:text-gray-400">{h.body.clone()}</p>
                </div>
            }
        })
        .collect_view();

    view! {
        <section node_ref=section id="about" class="py-20 bg-white dark:bg-gray-900">
            <div class="container mx-auto px-4 md:px-6">
                <SectionTitle title="About Me" />
                <p class=move || {
                    format!(
                        "max-w-3xl mx-auto text-lg text-center text-gray-700 dark:text-gray-300 mb-12 transition-all duration-700 {}",
                        Entrance::SlideUp.classes(revealed.get()),
                    )
                }>{portfolio().profile.about.clone()}</p>
                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-8">{cards}</div>
            </div>
        </section>
    }
}

use std::time::Duration;

use leptos::{either::Either, html, prelude::*};

use crate::content::portfolio;
use crate::reveal::{stagger_style, Entrance};
use crate::selection::{EducationTab, TabState};

use super::browser::use_reveal;
use super::{SectionTitle, TabButtons};

const ENTRY_STAGGER: Duration = Duration::from_millis(200);

#[component]
pub fn Education() -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section);
    let tab = RwSignal::new(TabState::new(EducationTab::Education));

    let card_class = move || {
        format!(
            "bg-gray-50 dark:bg-gray-800 rounded-lg shadow-md overflow-hidden transform transition-all duration-500 {}",
            Entrance::SlideUp.classes(revealed.get()),
        )
    };

    let education = move || {
        portfolio()
            .education
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                view! {
                    <div class=card_class style=stagger_style(i, ENTRY_STAGGER)>
                        <div class="p-6">
                            <div class="flex flex-col md:flex-row md:justify-between md:items-start mb-4">
                                <div>
                                    <h3 class="text-xl font-bold text-gray-900 dark:text-white">
                                        {entry.institution.clone()}
                                    </h3>
                                    <p class="text-indigo-600 dark:text-indigo-400 font-medium">
                                        {entry.degree.clone()}
                                    </p>
                                </div>
                                <div class="md:text-right mt-2 md:mt-0">
                                    <Badge text=entry.period.clone() />
                                    <p class="text-gray-600 dark:text-gray-400 text-sm">
                                        {entry.location.clone()}
                                    </p>
                                </div>
                            </div>
                            <ul class="list-disc list-inside text-gray-700 dark:text-gray-300 space-y-2">
                                {entry
                                    .details
                                    .iter()
                                    .map(|d| view! { <li>{d.clone()}</li> })
                                    .collect_view()}
                            </ul>
                        </div>
                    </div>
                }
            })
            .collect_view()
    };

    let achievements = move || {
        portfolio()
            .achievements
            .iter()
            .enumerate()
            .map(|(i, item)| {
                view! {
                    <div class=card_class style=stagger_style(i, ENTRY_STAGGER)>
                        <div class="p-6">
                            <div class="flex flex-col md:flex-row md:justify-between md:items-start mb-4">
                                <div>
                                    <h3 class="text-xl font-bold text-gray-900 dark:text-white">
                                        {item.title.clone()}
                                    </h3>
                                    <p class="text-indigo-600 dark:text-indigo-400 font-medium">
                                        {item.organization.clone()}
                                    </p>
                                </div>
                                <div class="md:text-right mt-2 md:mt-0">
                                    <Badge text=item.date.clone() />
                                </div>
                            </div>
                            <p class="text-gray-700 dark:text-gray-300">{item.description.clone()}</p>
                        </div>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <section node_ref=section id="education" class="py-20 bg-white dark:bg-gray-900">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <SectionTitle title="Education & Achievements" />
                <div class="max-w-4xl mx-auto">
                    <TabButtons state=tab />
                    <div class="space-y-8">
                        {move || match tab.get().active() {
                            EducationTab::Education => Either::Left(education()),
                            EducationTab::Achievements => Either::Right(achievements()),
                        }}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Badge(text: String) -> impl IntoView {
    view! {
        <span class="inline-block px-3 py-1 bg-indigo-100 dark:bg-indigo-900 text-indigo-600 dark:text-indigo-400 rounded-full text-sm mb-2">
            {text}
        </span>
    }
}

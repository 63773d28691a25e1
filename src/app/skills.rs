use std::time::Duration;

use leptos::{html, prelude::*};

use crate::content::portfolio;
use crate::reveal::{stagger_style, Entrance};
use crate::selection::{visible_skills, SkillFilter, TabState};

use super::browser::use_reveal;
use super::{SectionTitle, TabButtons};

const SKILL_STAGGER: Duration = Duration::from_millis(100);

#[component]
pub fn Skills() -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section);
    let filter = RwSignal::new(TabState::new(SkillFilter::All));

    let skills = move || {
        visible_skills(filter.get().active(), &portfolio().skills)
            .into_iter()
            .enumerate()
            .map(|(i, skill)| {
                view! {
                    <div
                        class=move || {
                            format!(
                                "p-6 bg-white dark:bg-gray-900 rounded-xl shadow-md hover:shadow-lg transition-all duration-500 {}",
                                Entrance::SlideUp.classes(revealed.get()),
                            )
                        }
                        style=stagger_style(i, SKILL_STAGGER)
                    >
                        <div class="flex items-center mb-3">
                            <span class="text-indigo-600 dark:text-indigo-400 mr-3 font-mono">
                                {skill.category.icon()}
                            </span>
                            <h3 class="text-lg font-semibold text-gray-900 dark:text-white">
                                {skill.name.clone()}
                            </h3>
                        </div>
                        <p class="text-gray-600 dark:text-gray-400">{skill.description.clone()}</p>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <section node_ref=section id="skills" class="py-20 bg-gray-50 dark:bg-gray-800">
            <div class="container mx-auto px-4 md:px-6">
                <SectionTitle title="Skills" />
                <TabButtons state=filter />
                <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-6">{skills}</div>
            </div>
        </section>
    }
}

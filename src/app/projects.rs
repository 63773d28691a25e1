use leptos::{ev::MouseEvent, prelude::*};

use crate::content::{portfolio, Project};
use crate::modal::{ClickTarget, ModalController};

use super::browser::use_body_scroll;
use super::SectionTitle;

#[component]
pub fn Projects() -> impl IntoView {
    let mut body = use_body_scroll();
    let modal = RwSignal::new(ModalController::<&'static Project>::new());

    // unmounting with the dialog up must not leave the page locked
    on_cleanup(move || {
        modal.try_update(|m| m.close(&mut body));
    });

    let cards = portfolio()
        .projects
        .iter()
        .map(|project| {
            view! {
                <div class="bg-gray-50 dark:bg-gray-800 rounded-lg overflow-hidden shadow-lg transform transition-all duration-300 hover:scale-105 hover:shadow-xl">
                    <div class="h-56 overflow-hidden">
                        <img
                            src=project.image_url.clone()
                            alt=project.title.clone()
                            class="w-full h-full object-cover transition-transform duration-500 hover:scale-110"
                        />
                    </div>
                    <div class="p-6">
                        <h3 class="text-xl font-bold text-gray-900 dark:text-white mb-2">
                            {project.title.clone()}
                        </h3>
                        <p class="text-gray-700 dark:text-gray-300 mb-4">
                            {project.description.clone()}
                        </p>
                        <Technologies project />
                        <div class="flex justify-between items-center">
                            <button
                                class="text-indigo-600 dark:text-indigo-400 font-medium hover:underline"
                                on:click=move |_| modal.update(|m| m.open(project, &mut body))
                            >
                                "View Details"
                            </button>
                            <div class="flex space-x-3">
                                <ExternalLink href=project.repo_url.clone() label="Code" />
                                <ExternalLink href=project.demo_url.clone() label="Demo" />
                            </div>
                        </div>
                    </div>
                </div>
            }
        })
        .collect_view();

    let on_backdrop = move |ev: MouseEvent| {
        let target = if ev.target() == ev.current_target() {
            ClickTarget::Backdrop
        } else {
            ClickTarget::Content
        };
        modal.update(|m| m.on_click(target, &mut body));
    };

    view! {
        <section id="projects" class="py-20 bg-white dark:bg-gray-900">
            <div class="container mx-auto px-4 md:px-6">
                <SectionTitle title="Projects" />
                <div class="grid grid-cols-1 md:grid-cols-2 gap-8">{cards}</div>
            </div>
            {move || {
                modal
                    .with(|m| m.item().copied())
                    .map(|project| {
                        view! {
                            <div
                                class="fixed inset-0 bg-black/50 flex items-center justify-center z-50 p-4"
                                on:click=on_backdrop
                            >
                                <div class="bg-white dark:bg-gray-800 rounded-lg max-w-2xl w-full max-h-[90vh] overflow-y-auto">
                                    <div class="p-6">
                                        <div class="flex justify-between items-center mb-4">
                                            <h3 class="text-2xl font-bold text-gray-900 dark:text-white">
                                                {project.title.clone()}
                                            </h3>
                                            <button
                                                class="text-2xl text-gray-500 hover:text-gray-700 dark:text-gray-400 dark:hover:text-gray-200"
                                                aria-label="Close"
                                                on:click=move |_| modal.update(|m| m.close(&mut body))
                                            >
                                                "×"
                                            </button>
                                        </div>
                                        <img
                                            src=project.image_url.clone()
                                            alt=project.title.clone()
                                            class="w-full h-56 object-cover rounded-lg mb-6"
                                        />
                                        <p class="text-gray-700 dark:text-gray-300 mb-4">
                                            {project.description.clone()}
                                        </p>
                                        <h4 class="text-lg font-semibold text-gray-900 dark:text-white mb-2">
                                            "Features"
                                        </h4>
                                        <ul class="list-disc list-inside text-gray-700 dark:text-gray-300 mb-4">
                                            {project
                                                .features
                                                .iter()
                                                .map(|f| view! { <li>{f.clone()}</li> })
                                                .collect_view()}
                                        </ul>
                                        <h4 class="text-lg font-semibold text-gray-900 dark:text-white mb-2">
                                            "Technologies"
                                        </h4>
                                        <Technologies project />
                                        <div class="flex space-x-4">
                                            <a
                                                href=project.demo_url.clone()
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                class="px-4 py-2 bg-indigo-600 hover:bg-indigo-700 text-white rounded-lg transition-colors"
                                            >
                                                "Live Demo"
                                            </a>
                                            <a
                                                href=project.repo_url.clone()
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                class="px-4 py-2 bg-gray-200 hover:bg-gray-300 dark:bg-gray-700 dark:hover:bg-gray-600 text-gray-800 dark:text-gray-200 rounded-lg transition-colors"
                                            >
                                                "View Code"
                                            </a>
                                        </div>
                                    </div>
                                </div>
                            </div>
                        }
                    })
            }}
        </section>
    }
}

#[component]
fn Technologies(project: &'static Project) -> impl IntoView {
    let tags = project
        .technologies
        .iter()
        .map(|tech| {
            view! {
                <span class="px-3 py-1 bg-indigo-100 dark:bg-indigo-900 text-indigo-600 dark:text-indigo-400 rounded-full text-sm">
                    {tech.clone()}
                </span>
            }
        })
        .collect_view();

    view! { <div class="flex flex-wrap gap-2 mb-4">{tags}</div> }
}

#[component]
fn ExternalLink(href: String, label: &'static str) -> impl IntoView {
    view! {
        <a
            href=href
            target="_blank"
            rel="noopener noreferrer"
            class="text-sm text-gray-700 dark:text-gray-300 hover:text-indigo-600 dark:hover:text-indigo-400 transition-colors"
        >
            {label}
        </a>
    }
}

use std::time::Duration;

use leptos::{
    either::Either,
    ev::{self, SubmitEvent},
    html,
    leptos_dom::helpers::{set_timeout_with_handle, TimeoutHandle},
    prelude::*,
};

use crate::contact::{ContactForm, Field, FormPhase, FormTimer};
use crate::content::portfolio;
use crate::reveal::Entrance;
use crate::schedule::Scheduler;

use super::browser::use_reveal;
use super::SectionTitle;

type Form = ContactForm<Option<TimeoutHandle>>;

/// Browser timers that hand their event back to the form when they fire.
#[derive(Clone, Copy)]
struct FormTimers(RwSignal<Form>);

impl Scheduler<FormTimer> for FormTimers {
    type Handle = Option<TimeoutHandle>;

    fn schedule(&mut self, delay: Duration, event: FormTimer) -> Self::Handle {
        let form = self.0;
        set_timeout_with_handle(
            move || {
                form.try_update(|f| f.on_timer(event, &mut FormTimers(form)));
            },
            delay,
        )
        .inspect_err(|e| log::error!("couldn't schedule {event:?}: {e:?}"))
        .ok()
    }

    fn cancel(&mut self, handle: Self::Handle) {
        if let Some(handle) = handle {
            handle.clear();
        }
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section);
    let form = RwSignal::new(Form::new());
    let phase = Memo::new(move |_| form.with(Form::phase));

    on_cleanup(move || {
        form.try_update(|f| f.teardown(&mut FormTimers(form)));
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        form.update(|f| {
            if let Err(e) = f.submit(&mut FormTimers(form)) {
                log::debug!("{e}");
            }
        });
    };

    let slide = move |entrance: Entrance| {
        format!(
            "transform transition-all duration-700 {}",
            entrance.classes(revealed.get()),
        )
    };

    view! {
        <section node_ref=section id="contact" class="py-20 bg-gray-50 dark:bg-gray-800">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <SectionTitle title="Get In Touch" />
                <p class="-mt-10 mb-16 text-lg text-center text-gray-700 dark:text-gray-300 max-w-2xl mx-auto">
                    "Have a project in mind or just want to say hello? Feel free to reach out! I'm always open to discussing new projects, creative ideas, or opportunities to be part of your vision."
                </p>
                <div class="max-w-6xl mx-auto grid grid-cols-1 lg:grid-cols-2 gap-12">
                    <div class=move || {
                        format!(
                            "bg-white dark:bg-gray-700 rounded-lg shadow-md p-8 {}",
                            slide(Entrance::FromRight),
                        )
                    }>
                        {move || match phase.get() {
                            FormPhase::Submitted => {
                                Either::Left(
                                    view! {
                                        <div class="h-full flex flex-col items-center justify-center text-center py-8">
                                            <div class="mb-6 text-5xl text-green-500 dark:text-green-400">
                                                "✓"
                                            </div>
                                            <h3 class="text-2xl font-bold text-gray-900 dark:text-white mb-3">
                                                "Thank You!"
                                            </h3>
                                            <p class="text-gray-700 dark:text-gray-300 mb-6">
                                                "Your message has been sent successfully. I'll get back to you as soon as possible!"
                                            </p>
                                            <button
                                                class="px-6 py-3 bg-indigo-600 hover:bg-indigo-700 text-white rounded-lg transition-colors"
                                                on:click=move |_| {
                                                    form.update(|f| f.dismiss_confirmation(&mut FormTimers(form)))
                                                }
                                            >
                                                "Send Another Message"
                                            </button>
                                        </div>
                                    },
                                )
                            }
                            FormPhase::Editing | FormPhase::Submitting => {
                                Either::Right(
                                    view! {
                                        <form class="space-y-6" on:submit=on_submit>
                                            {Field::ALL
                                                .into_iter()
                                                .map(|field| view! { <FormField form field /> })
                                                .collect_view()}
                                            <SubmitButton phase />
                                        </form>
                                    },
                                )
                            }
                        }}
                    </div>
                    <div class=move || {
                        slide(Entrance::FromLeft)
                    }>
                        <ContactDetails />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn FormField(form: RwSignal<Form>, field: Field) -> impl IntoView {
    let value = move || form.with(|f| f.fields().get(field).to_string());
    let error = move || form.with(|f| f.error(field));
    let class = move || {
        let border = if error().is_some() {
            "border-red-500 dark:border-red-400"
        } else {
            "border-gray-300 dark:border-gray-600"
        };
        format!(
            "w-full px-4 py-3 rounded-lg border {border} bg-white dark:bg-gray-800 text-gray-900 dark:text-white focus:outline-none focus:ring-2 focus:ring-indigo-500 dark:focus:ring-indigo-400"
        )
    };
    let on_input = move |ev: ev::Event| form.update(|f| f.set_field(field, event_target_value(&ev)));
    let placeholder = format!("Your {}", field.id());

    let input = match field {
        Field::Message => Either::Left(view! {
            <textarea
                id=field.id()
                name=field.id()
                rows="5"
                class=class
                placeholder=placeholder
                prop:value=value
                on:input=on_input
            ></textarea>
        }),
        Field::Name | Field::Email => Either::Right(view! {
            <input
                id=field.id()
                name=field.id()
                type=if field == Field::Email { "email" } else { "text" }
                class=class
                placeholder=placeholder
                prop:value=value
                on:input=on_input
            />
        }),
    };

    view! {
        <div>
            <label
                for=field.id()
                class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1"
            >
                {field.label()}
            </label>
            {input}
            {move || {
                error()
                    .map(|e| {
                        view! { <p class="mt-1 text-sm text-red-500 dark:text-red-400">{e.to_string()}</p> }
                    })
            }}
        </div>
    }
}

#[component]
fn SubmitButton(phase: Memo<FormPhase>) -> impl IntoView {
    let submitting = move || phase.get() == FormPhase::Submitting;

    view! {
        <button
            type="submit"
            disabled=submitting
            class=move || {
                if submitting() {
                    "w-full flex items-center justify-center px-6 py-3 bg-indigo-600 text-white rounded-lg transition-colors opacity-70 cursor-not-allowed"
                } else {
                    "w-full flex items-center justify-center px-6 py-3 bg-indigo-600 hover:bg-indigo-700 text-white rounded-lg transition-colors"
                }
            }
        >
            {move || if submitting() { "Sending..." } else { "Send Message" }}
        </button>
    }
}

#[component]
fn ContactDetails() -> impl IntoView {
    let entries = portfolio()
        .contact
        .iter()
        .map(|info| {
            let external = info.opens_new_tab();
            view! {
                <div class="flex items-start">
                    <div class="p-3 bg-indigo-100 dark:bg-indigo-900 rounded-full mr-4">
                        {info.icon()}
                    </div>
                    <div>
                        <h4 class="text-lg font-medium text-gray-900 dark:text-white">
                            {info.title.clone()}
                        </h4>
                        <a
                            href=info.link.clone()
                            target=external.then_some("_blank")
                            rel=external.then_some("noopener noreferrer")
                            class="text-gray-700 dark:text-gray-300 hover:text-indigo-600 dark:hover:text-indigo-400 transition-colors"
                        >
                            {info.value.clone()}
                        </a>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="bg-white dark:bg-gray-700 rounded-lg shadow-md p-8 mb-8">
            <h3 class="text-xl font-bold text-gray-900 dark:text-white mb-6">
                "Contact Information"
            </h3>
            <div class="space-y-6">{entries}</div>
        </div>
        <div class="bg-white dark:bg-gray-700 rounded-lg shadow-md overflow-hidden h-64">
            <iframe
                title="Location Map"
                src=portfolio().profile.map_embed_url.clone()
                width="100%"
                height="100%"
                style="border: 0"
                loading="lazy"
                referrerpolicy="no-referrer-when-downgrade"
            ></iframe>
        </div>
    }
}

use leptos::{either::Either, ev::SubmitEvent, prelude::*};

use super::download::DownloadResumeButton;
use super::section::SectionHeading;
use super::toaster::use_notifier;
use crate::contact::{ContactForm, Field, SUBMIT_DELAY};
use crate::content::{ContactChannel, CONTACT_CHANNELS, SECTION_CONTACT, SECTION_PROJECTS};

const INPUT_CLASS: &str = "w-full px-3 py-2 rounded-md border bg-slate-700/50 border-slate-600 text-white placeholder-gray-400 focus:outline-none focus:border-blue-500";

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id=SECTION_CONTACT class="py-20 px-4 bg-slate-900/50">
            <div class="max-w-6xl mx-auto">
                <SectionHeading
                    lead="Let's"
                    highlight="Connect"
                    subtitle="I'm always open to discussing new opportunities, interesting projects, or just having a chat about tech!"
                />
                <div class="grid lg:grid-cols-2 gap-12">
                    <div class="space-y-8">
                        <div>
                            <h3 class="text-2xl font-bold text-white mb-6">"Get in Touch"</h3>
                            <p class="text-gray-300 leading-relaxed mb-8">
                                "Whether you're looking for a developer, have a project in mind, or just want to connect, I'd love to hear from you. Let's create something amazing together!"
                            </p>
                        </div>
                        <div class="grid gap-4">
                            {CONTACT_CHANNELS
                                .iter()
                                .map(|channel| view! { <ChannelCard channel=*channel /> })
                                .collect_view()}
                        </div>
                        <div class="p-6 bg-gradient-to-r from-blue-900/30 to-purple-900/30 rounded-2xl border border-blue-500/30">
                            <h4 class="text-white font-semibold mb-4">"Quick Actions"</h4>
                            <div class="flex flex-wrap gap-3">
                                <DownloadResumeButton classes="px-3 py-1.5 text-sm rounded-md text-white bg-blue-600 hover:bg-blue-700" />
                                <a
                                    href=format!("#{SECTION_PROJECTS}")
                                    class="px-3 py-1.5 text-sm rounded-md border border-purple-500 text-purple-400 hover:bg-purple-500 hover:text-white"
                                >
                                    "View Projects"
                                </a>
                            </div>
                        </div>
                    </div>
                    <ContactFormCard />
                </div>
            </div>
        </section>
    }
}

#[component]
fn ChannelCard(channel: ContactChannel) -> impl IntoView {
    let body = view! {
        <div class="flex items-center space-x-4">
            <div class="w-12 h-12 bg-gradient-to-r from-blue-500 to-purple-500 rounded-full flex items-center justify-center text-xl">
                {channel.icon}
            </div>
            <div>
                <h4 class="text-white font-semibold">{channel.title}</h4>
                <p class="text-gray-300 text-sm">{channel.value}</p>
            </div>
        </div>
    };
    let class = "block p-4 bg-slate-800/50 border border-slate-700/50 rounded-lg hover:border-blue-500/30 transition-all duration-300";
    match channel.href {
        Some(href) => Either::Left(view! {
            <a href=href target="_blank" rel="noopener noreferrer" class=class>
                {body}
            </a>
        }),
        None => Either::Right(view! { <div class=class>{body}</div> }),
    }
}

#[component]
fn ContactFormCard() -> impl IntoView {
    let form = RwSignal::new(ContactForm::new());
    let notifier = use_notifier();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        // the browser's required checks normally stop us before this point
        let res = form.write().submit();
        if let Err(e) = res {
            log::debug!("contact form not submitted: {e}");
            return;
        }
        log::info!("contact form submitting");
        set_timeout(
            move || {
                let Some(notification) = form.try_update(|f| f.complete()).flatten() else {
                    return;
                };
                log::info!("contact form sent");
                notifier.notify(notification);
            },
            SUBMIT_DELAY,
        );
    };

    let value = move |field: Field| move || form.with(|f| f.value(field).to_string());
    let submitting = move || form.with(|f| f.is_submitting());

    view! {
        <div class="bg-slate-800/50 border border-slate-700/50 rounded-lg p-6">
            <h3 class="text-2xl text-white font-semibold mb-6">"Send me a message"</h3>
            <form class="space-y-6" on:submit=on_submit>
                <div>
                    <label for="contact_name" class="text-gray-300 text-sm font-medium mb-2 block">
                        "Your Name"
                    </label>
                    <input
                        id="contact_name"
                        type="text"
                        name="name"
                        required=true
                        placeholder="John Doe"
                        class=INPUT_CLASS
                        prop:value=value(Field::Name)
                        on:input=move |ev| form.update(|f| f.set(Field::Name, event_target_value(&ev)))
                    />
                </div>
                <div>
                    <label for="contact_email" class="text-gray-300 text-sm font-medium mb-2 block">
                        "Email Address"
                    </label>
                    <input
                        id="contact_email"
                        type="email"
                        name="email"
                        required=true
                        placeholder="john@example.com"
                        class=INPUT_CLASS
                        prop:value=value(Field::Email)
                        on:input=move |ev| form.update(|f| f.set(Field::Email, event_target_value(&ev)))
                    />
                </div>
                <div>
                    <label for="contact_message" class="text-gray-300 text-sm font-medium mb-2 block">
                        "Message"
                    </label>
                    <textarea
                        id="contact_message"
                        name="message"
                        rows="5"
                        required=true
                        placeholder="Tell me about your project or just say hello!"
                        class=format!("{INPUT_CLASS} resize-none")
                        prop:value=value(Field::Message)
                        on:input=move |ev| form.update(|f| f.set(Field::Message, event_target_value(&ev)))
                    ></textarea>
                </div>
                <button
                    type="submit"
                    disabled=submitting
                    class="w-full py-3 rounded-md text-white bg-gradient-to-r from-blue-600 to-purple-600 hover:from-blue-700 hover:to-purple-700 disabled:opacity-60 disabled:cursor-not-allowed"
                >
                    {move || {
                        if submitting() {
                            Either::Left(
                                view! {
                                    <span class="flex items-center justify-center">
                                        <span class="animate-spin rounded-full h-4 w-4 border-b-2 border-white mr-2"></span>
                                        "Sending..."
                                    </span>
                                },
                            )
                        } else {
                            Either::Right(
                                view! {
                                    <span class="flex items-center justify-center">"✉ Send Message"</span>
                                },
                            )
                        }
                    }}
                </button>
            </form>
        </div>
    }
}

use leptos::prelude::*;

use super::download::DownloadResumeButton;
use super::section::SectionHeading;
use crate::content::{DRIVES, MILESTONES, PROFILE, SECTION_ABOUT};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id=SECTION_ABOUT class="py-20 px-4 bg-slate-900/50">
            <div class="max-w-6xl mx-auto">
                <SectionHeading
                    lead="About"
                    highlight="Me"
                    subtitle="I'm a passionate self-taught developer who believes in the power of technology to solve real problems. My journey started with curiosity and has evolved into a deep love for creating meaningful applications."
                />
                <div class="grid md:grid-cols-2 gap-12 items-center">
                    <div class="space-y-8">
                        <h3 class="text-2xl font-bold text-white mb-8">"My Developer Journey"</h3>
                        {MILESTONES
                            .iter()
                            .map(|m| {
                                view! {
                                    <div class="flex items-start space-x-4 bg-slate-800/50 p-6 rounded-lg border border-slate-700/50 hover:border-blue-500/50 transition-all duration-300">
                                        <div class="flex-shrink-0 w-12 h-12 bg-gradient-to-r from-blue-500 to-purple-500 rounded-full flex items-center justify-center text-xl">
                                            {m.icon}
                                        </div>
                                        <div class="flex-1">
                                            <div class="flex items-center justify-between mb-2">
                                                <h4 class="text-lg font-semibold text-white">
                                                    {m.title}
                                                </h4>
                                                <span class="text-sm text-blue-400 font-medium">
                                                    {m.year}
                                                </span>
                                            </div>
                                            <p class="text-gray-300">{m.description}</p>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="bg-slate-800/50 p-8 rounded-2xl border border-slate-700/50">
                        <h3 class="text-2xl font-bold text-white mb-6">"What Drives Me"</h3>
                        <div class="space-y-4 text-gray-300">
                            {DRIVES.iter().map(|d| view! { <p>{*d}</p> }).collect_view()}
                        </div>
                        <div class="flex flex-col sm:flex-row gap-4 mt-8">
                            <DownloadResumeButton classes="px-4 py-2 rounded-md text-white bg-gradient-to-r from-blue-600 to-purple-600 hover:from-blue-700 hover:to-purple-700" />
                            <div class="flex gap-2">
                                <a
                                    href=PROFILE.linkedin
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="px-3 py-2 text-sm rounded-md border border-slate-600 text-slate-300 hover:bg-slate-700"
                                >
                                    "LinkedIn"
                                </a>
                                <a
                                    href=PROFILE.github
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="px-3 py-2 text-sm rounded-md border border-slate-600 text-slate-300 hover:bg-slate-700"
                                >
                                    "GitHub"
                                </a>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

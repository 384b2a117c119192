use leptos::prelude::*;

use super::section::SectionHeading;
use crate::content::{EXTRA_TOOLS, SECTION_SKILLS, SKILL_CATEGORIES};

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id=SECTION_SKILLS class="py-20 px-4 bg-slate-800/30">
            <div class="max-w-6xl mx-auto">
                <SectionHeading
                    lead="Skills &"
                    highlight="Tech Stack"
                    subtitle="Here are the technologies I work with to bring ideas to life"
                />
                <div class="grid md:grid-cols-3 gap-8">
                    {SKILL_CATEGORIES
                        .iter()
                        .map(|category| {
                            view! {
                                <div class="bg-slate-900/50 p-8 rounded-2xl border border-slate-700/50 hover:border-blue-500/30 transition-all duration-300">
                                    <h3 class="text-2xl font-bold text-white mb-6 text-center">
                                        {category.category}
                                    </h3>
                                    <div class="space-y-6">
                                        {category
                                            .skills
                                            .iter()
                                            .map(|skill| {
                                                view! {
                                                    <div class="space-y-2">
                                                        <div class="flex justify-between items-center">
                                                            <span class="text-gray-300 font-medium">
                                                                {skill.name}
                                                            </span>
                                                            <span class="text-blue-400 text-sm font-semibold">
                                                                {format!("{}%", skill.level)}
                                                            </span>
                                                        </div>
                                                        <div class="w-full bg-slate-700/50 rounded-full h-2">
                                                            <div
                                                                class=format!(
                                                                    "h-2 rounded-full bg-gradient-to-r transition-all duration-1000 {}",
                                                                    skill.gradient,
                                                                )
                                                                style:width=format!("{}%", skill.level.min(100))
                                                            />
                                                        </div>
                                                    </div>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="mt-16 text-center">
                    <h3 class="text-xl font-semibold text-gray-300 mb-8">"Also experienced with"</h3>
                    <div class="flex flex-wrap justify-center gap-4">
                        {EXTRA_TOOLS
                            .iter()
                            .map(|tool| {
                                view! {
                                    <span class="px-4 py-2 bg-slate-800/50 text-gray-300 rounded-full border border-slate-600/50 hover:border-blue-500/50 hover:scale-105 transition-all duration-300">
                                        {*tool}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

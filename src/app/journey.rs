use leptos::prelude::*;

use super::section::SectionHeading;
use crate::content::{JourneyItem, JOURNEY, SECTION_CONTACT, SECTION_JOURNEY};

#[component]
pub fn Journey() -> impl IntoView {
    view! {
        <section id=SECTION_JOURNEY class="py-20 px-4 bg-slate-800/30">
            <div class="max-w-4xl mx-auto">
                <SectionHeading
                    lead="My"
                    highlight="Journey"
                    subtitle="From curiosity to capability - here's how I've grown as a developer"
                />
                <div class="relative">
                    <div class="absolute left-8 top-0 bottom-0 w-0.5 bg-gradient-to-b from-blue-500 via-purple-500 to-pink-500" />
                    <div class="space-y-8">
                        {JOURNEY.iter().map(|item| view! { <TimelineEntry item=*item /> }).collect_view()}
                    </div>
                </div>
                <div class="text-center mt-16 p-8 bg-gradient-to-r from-blue-900/30 to-purple-900/30 rounded-2xl border border-blue-500/30">
                    <h3 class="text-2xl font-bold text-white mb-4">"Ready for the Next Chapter"</h3>
                    <p class="text-gray-300 mb-6 max-w-2xl mx-auto">
                        "I'm excited to bring my passion for development and problem-solving to a dynamic team. Let's build something amazing together!"
                    </p>
                    <a
                        href=format!("#{SECTION_CONTACT}")
                        class="inline-block bg-gradient-to-r from-blue-600 to-purple-600 hover:from-blue-700 hover:to-purple-700 text-white px-8 py-3 rounded-full font-semibold transition-all duration-300 hover:scale-105"
                    >
                        "Let's Connect"
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn TimelineEntry(item: JourneyItem) -> impl IntoView {
    let current = item.is_current();
    let (dot, icon, card, title) = if current {
        (
            "bg-gradient-to-r from-blue-500 to-purple-500 border-blue-400 shadow-lg shadow-blue-500/25",
            "text-white",
            "bg-gradient-to-r from-blue-900/20 to-purple-900/20 border-blue-500/50",
            "text-blue-400",
        )
    } else {
        (
            "bg-slate-800 border-slate-600",
            "text-gray-400",
            "bg-slate-800/50 border-slate-700/50 hover:border-blue-500/30",
            "text-white",
        )
    };
    view! {
        <div class="relative flex items-start space-x-6">
            <div class=format!(
                "flex-shrink-0 w-16 h-16 rounded-full flex items-center justify-center border-4 {dot}",
            )>
                <div class=format!("text-xl {icon}")>{item.icon}</div>
            </div>
            <div class="flex-1 pb-8">
                <div class=format!("p-6 rounded-lg border transition-all duration-300 {card}")>
                    <div class="flex flex-col sm:flex-row sm:items-center sm:justify-between mb-3">
                        <h3 class=format!("text-xl font-semibold {title}")>{item.title}</h3>
                        <div class="flex items-center text-sm text-gray-400 mt-1 sm:mt-0">
                            "📅 " {item.date}
                        </div>
                    </div>
                    <p class="text-gray-300 leading-relaxed">{item.description}</p>
                    {current
                        .then(|| {
                            view! {
                                <div class="mt-4">
                                    <span class="inline-flex items-center px-3 py-1 rounded-full text-xs font-medium bg-blue-500/20 text-blue-400 border border-blue-500/30">
                                        "🚀 Currently Active"
                                    </span>
                                </div>
                            }
                        })}
                </div>
            </div>
        </div>
    }
}

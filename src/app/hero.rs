use leptos::prelude::*;

use crate::content::{PROFILE, ROLES, SECTION_ABOUT, SECTION_CONTACT, SECTION_PROJECTS};
use crate::typewriter::{Typewriter, TYPE_DELAY};

// Each step schedules the next; once the hero is unmounted the signal is
// disposed and the chain stops.
fn type_next(typewriter: RwSignal<Typewriter>) {
    let Some(delay) = typewriter.try_update(|t| t.advance()) else {
        return;
    };
    set_timeout(move || type_next(typewriter), delay);
}

#[component]
pub fn Hero() -> impl IntoView {
    let typewriter = RwSignal::new(Typewriter::new(ROLES));

    // effects only run in the browser
    Effect::new(move |_| {
        set_timeout(move || type_next(typewriter), TYPE_DELAY);
    });

    view! {
        <section class="relative h-screen flex items-center justify-center overflow-hidden">
            <div class="absolute inset-0 z-0 bg-gradient-to-br from-blue-950/60 via-slate-950 to-purple-950/60" />

            <div class="relative z-10 text-center text-white px-4 max-w-4xl mx-auto">
                <h1 class="text-5xl md:text-7xl font-bold mb-6 bg-gradient-to-r from-blue-400 via-purple-400 to-pink-400 bg-clip-text text-transparent">
                    {format!("Hi, I'm {} 👋", PROFILE.name)}
                </h1>
                <div class="text-2xl md:text-3xl mb-8 h-12 flex items-center justify-center">
                    <span class="text-gray-300">"I'm a"</span>
                    <span class="ml-2 text-blue-400 font-semibold border-r-2 border-blue-400 animate-pulse">
                        {move || typewriter.with(|t| t.text())}
                    </span>
                </div>
                <p class="text-lg md:text-xl text-gray-300 mb-12 leading-relaxed">
                    {PROFILE.summary}
                </p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center items-center">
                    <a
                        href=format!("#{SECTION_PROJECTS}")
                        class="bg-gradient-to-r from-blue-600 to-purple-600 hover:from-blue-700 hover:to-purple-700 text-white px-8 py-3 rounded-full transition-all duration-300 transform hover:scale-105"
                    >
                        "View My Projects"
                    </a>
                    <a
                        href=format!("#{SECTION_CONTACT}")
                        class="border-2 border-blue-400 text-blue-400 hover:bg-blue-400 hover:text-white px-8 py-3 rounded-full transition-all duration-300"
                    >
                        "Contact Me"
                    </a>
                </div>
            </div>

            <a
                href=format!("#{SECTION_ABOUT}")
                class="absolute bottom-8 left-1/2 -translate-x-1/2 text-3xl text-white/70 hover:text-white animate-bounce"
                aria-label="Scroll to about"
            >
                "⌄"
            </a>
        </section>
    }
}

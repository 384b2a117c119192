use leptos::prelude::*;

/// Centered section title with a gradient-highlighted tail and a subtitle.
#[component]
pub fn SectionHeading(
    lead: &'static str,
    highlight: &'static str,
    subtitle: &'static str,
) -> impl IntoView {
    view! {
        <div class="text-center mb-16 section-content">
            <h2 class="text-4xl md:text-5xl font-bold text-white mb-6">
                {lead}
                " "
                <span class="bg-gradient-to-r from-blue-400 to-purple-400 bg-clip-text text-transparent">
                    {highlight}
                </span>
            </h2>
            <p class="text-xl text-gray-300 max-w-3xl mx-auto leading-relaxed">{subtitle}</p>
        </div>
    }
}

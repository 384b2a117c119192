use leptos::prelude::*;
use leptos_use::use_window_scroll;

use super::ThemeContext;
use crate::build_info::build_year;
use crate::content::{NAV_SECTIONS, PROFILE, SOCIAL_LINKS};

// px scrolled before the back-to-top button shows up
const SCROLL_TOP_THRESHOLD: f64 = 500.0;

#[component]
pub fn Footer() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let show_scroll_top = move || scroll_y.get() > SCROLL_TOP_THRESHOLD;
    let copyright = match build_year() {
        Some(year) => format!("© {year}"),
        None => "©".to_string(),
    };

    view! {
        <footer class="relative bg-slate-900/80 border-t border-slate-700/50">
            <button
                type="button"
                aria-label="Scroll to top"
                class=move || {
                    format!(
                        "fixed bottom-8 right-8 z-50 w-12 h-12 bg-gradient-to-r from-blue-600 to-purple-600 text-white rounded-full shadow-lg hover:shadow-xl transition-all duration-300 flex items-center justify-center {}",
                        if show_scroll_top() { "hover:scale-110" } else { "opacity-0 scale-0 pointer-events-none" },
                    )
                }
                on:click=move |_| window().scroll_to_with_x_and_y(0.0, 0.0)
            >
                "↑"
            </button>

            <div class="max-w-6xl mx-auto px-4 py-12">
                <div class="grid md:grid-cols-3 gap-8 mb-8">
                    <div class="space-y-4">
                        <h3 class="text-2xl font-bold bg-gradient-to-r from-blue-400 to-purple-400 bg-clip-text text-transparent">
                            {PROFILE.name}
                        </h3>
                        <p class="text-gray-300 leading-relaxed">
                            "Full Stack Developer passionate about creating meaningful applications that solve real-world problems with modern technologies."
                        </p>
                        <div class="flex items-center space-x-4 text-xl">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|link| {
                                    view! {
                                        <a
                                            href=link.url
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class=format!(
                                                "text-gray-400 transition-colors duration-300 {}",
                                                link.hover_class,
                                            )
                                            aria-label=link.label
                                        >
                                            <i class=link.icon_class />
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="space-y-4">
                        <h4 class="text-lg font-semibold text-white">"Quick Links"</h4>
                        <nav class="flex flex-col space-y-2">
                            {NAV_SECTIONS
                                .iter()
                                .map(|section| {
                                    view! {
                                        <a
                                            href=section.href()
                                            class="text-gray-400 hover:text-blue-400 transition-colors duration-300 text-sm"
                                        >
                                            {section.name}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </nav>
                    </div>

                    <div class="space-y-4">
                        <h4 class="text-lg font-semibold text-white">"Get In Touch"</h4>
                        <div class="space-y-2 text-sm text-gray-400">
                            <p>"📧 " {PROFILE.email}</p>
                            <p>"📱 " {PROFILE.phone}</p>
                            <p>"🌍 " {PROFILE.location}</p>
                            <p>"🚀 Available for opportunities"</p>
                        </div>
                        <div class="pt-4">
                            <ThemeToggle />
                        </div>
                    </div>
                </div>

                <div class="border-t border-slate-700/50 pt-8">
                    <div class="flex flex-col md:flex-row justify-between items-center space-y-4 md:space-y-0">
                        <p class="text-gray-400 text-sm flex items-center">
                            "Made with "
                            <span class="mx-1 text-red-500 animate-pulse">"♥"</span>
                            {format!(" by {} {copyright}", PROFILE.name)}
                        </p>
                        <div class="flex items-center space-x-4 text-xs text-gray-500">
                            <span>"Built with Rust + Leptos + Tailwind"</span>
                            <span>"•"</span>
                            <span>{format!("v{}", env!("CARGO_PKG_VERSION"))}</span>
                        </div>
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[component]
fn ThemeToggle() -> impl IntoView {
    let ThemeContext { theme, set_theme } = expect_context::<ThemeContext>();
    view! {
        <button
            type="button"
            class="px-3 py-1.5 text-sm rounded-md border border-slate-600 text-slate-300 hover:bg-slate-700"
            on:click=move |_| {
                let next = theme.get_untracked().toggled();
                log::debug!("switching theme to {next:?}");
                set_theme.set(next);
            }
        >
            {move || theme.get().toggle_label()}
        </button>
    }
}

use leptos::prelude::*;

use super::section::SectionHeading;
use crate::content::{Project, PROFILE, PROJECTS, SECTION_PROJECTS};

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id=SECTION_PROJECTS class="py-20 px-4 bg-slate-900/50">
            <div class="max-w-7xl mx-auto">
                <SectionHeading
                    lead="Featured"
                    highlight="Projects"
                    subtitle="Here are some of my recent projects that showcase my skills and experience"
                />
                <div class="space-y-12">
                    {PROJECTS
                        .iter()
                        .map(|project| view! { <ProjectCard project=*project /> })
                        .collect_view()}
                </div>
                <div class="text-center mt-16">
                    <p class="text-gray-300 mb-6">"Want to see more of my work?"</p>
                    <a
                        href=PROFILE.github
                        target="_blank"
                        rel="noopener noreferrer"
                        class="inline-flex items-center gap-2 px-6 py-3 rounded-md border border-blue-400 text-blue-400 hover:bg-blue-400 hover:text-white"
                    >
                        <i class="devicon-github-plain" />
                        "View All Projects on GitHub"
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let (ring, grid, details) = if project.featured {
        ("ring-2 ring-blue-500/30 border-blue-500/50", "lg:grid-cols-2", "lg:col-span-1")
    } else {
        ("border-slate-700/50", "md:grid-cols-3", "md:col-span-2")
    };
    view! {
        <div class=format!(
            "bg-slate-800/50 border rounded-lg hover:border-blue-500/30 hover:scale-[1.02] transition-all duration-300 overflow-hidden {ring}",
        )>
            <div class=format!("grid gap-6 {grid}")>
                <div class="relative overflow-hidden">
                    <img
                        src=project.image
                        alt=project.title
                        class="w-full h-64 lg:h-full object-cover transition-transform duration-300 hover:scale-105"
                    />
                    {project
                        .featured
                        .then(|| {
                            view! {
                                <span class="absolute top-4 left-4 px-2 py-1 rounded-md text-xs bg-blue-600 text-white">
                                    "⭐ Featured"
                                </span>
                            }
                        })}
                </div>
                <div class=format!("p-6 {details}")>
                    <h3 class="text-2xl text-white font-semibold mb-2">{project.title}</h3>
                    <p class="text-gray-300 text-base leading-relaxed mb-4">{project.description}</p>
                    <div class="space-y-6">
                        <div class="flex flex-wrap gap-2">
                            {project
                                .tags
                                .iter()
                                .map(|tag| {
                                    view! {
                                        <span class="px-2 py-0.5 rounded-md text-xs border border-blue-400/50 text-blue-400 hover:bg-blue-400/10">
                                            {*tag}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                        {project
                            .featured
                            .then(|| {
                                view! {
                                    <div class="space-y-2">
                                        <h4 class="text-white font-semibold">"Key Features:"</h4>
                                        <div class="grid grid-cols-1 sm:grid-cols-2 gap-1 text-sm text-gray-300">
                                            {project
                                                .features
                                                .iter()
                                                .map(|f| view! { <div>{*f}</div> })
                                                .collect_view()}
                                        </div>
                                    </div>
                                }
                            })}
                        <div class="flex gap-4 pt-4">
                            <a
                                href=project.live_url
                                target="_blank"
                                rel="noopener noreferrer"
                                class="px-4 py-2 rounded-md text-white bg-gradient-to-r from-blue-600 to-purple-600 hover:from-blue-700 hover:to-purple-700"
                            >
                                "↗ Live Demo"
                            </a>
                            <a
                                href=project.github_url
                                target="_blank"
                                rel="noopener noreferrer"
                                class="px-4 py-2 rounded-md border border-slate-600 text-slate-300 hover:bg-slate-700"
                            >
                                <i class="devicon-github-plain mr-2" />
                                "Source Code"
                            </a>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

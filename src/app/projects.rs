use leptos::prelude::*;

use crate::content::{Project, PROJECTS};

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id="projects" class="py-24 px-6">
            <div class="max-w-7xl mx-auto">
                <div class="flex flex-col md:flex-row justify-between items-end mb-16 gap-4">
                    <div>
                        <h2 class="text-4xl font-bold mb-4">
                            "Featured " <span class="text-blue-500">"Projects"</span>
                        </h2>
                        <p class="text-gray-400">
                            "A collection of things I've built with grit and coffee."
                        </p>
                    </div>
                    <a href="#" class="text-blue-500 font-bold flex items-center gap-2 hover:underline">
                        "View All Projects ↗"
                    </a>
                </div>

                <div class="grid md:grid-cols-2 gap-8">
                    {PROJECTS
                        .iter()
                        .copied()
                        .map(|project| view! { <ProjectCard project /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <div class="group glass-card rounded-3xl overflow-hidden transition-transform duration-300 hover:-translate-y-2.5">
            <div class="relative overflow-hidden aspect-video">
                <img
                    src=project.image
                    alt=project.title
                    class="w-full h-full object-cover transition-transform duration-500 group-hover:scale-110"
                />
                <div class="absolute inset-0 bg-gradient-to-t from-black/80 to-transparent opacity-0 group-hover:opacity-100 transition-opacity flex items-end p-8">
                    <div class="flex gap-4">
                        <a
                            href=project.live_url
                            aria-label="Live demo"
                            class="p-3 bg-white text-black rounded-full hover:scale-110 transition-transform"
                        >
                            "↗"
                        </a>
                        <a
                            href=project.github_url
                            aria-label="Source code"
                            class="p-3 bg-white/20 backdrop-blur text-white rounded-full hover:scale-110 transition-transform"
                        >
                            <i class="devicon-github-plain"></i>
                        </a>
                    </div>
                </div>
            </div>
            <div class="p-8">
                <div class="flex gap-2 mb-4">
                    {project
                        .tags
                        .iter()
                        .map(|tag| {
                            view! {
                                <span class="text-[10px] uppercase tracking-wider font-bold bg-blue-500/10 text-blue-400 px-2 py-1 rounded">
                                    {*tag}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <h3 class="text-2xl font-bold mb-2 group-hover:text-blue-500 transition-colors">
                    {project.title}
                </h3>
                <p class="text-gray-400 line-clamp-2">{project.description}</p>
            </div>
        </div>
    }
}

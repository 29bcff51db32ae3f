use leptos::prelude::*;

use crate::content::{bar_fill, bar_width, SKILLS};

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="py-24 px-6 bg-gray-950/50">
            <div class="max-w-7xl mx-auto">
                <div class="text-center mb-16">
                    <h2 class="text-4xl font-bold mb-4">
                        "Technical " <span class="text-blue-500">"Mastery"</span>
                    </h2>
                    <p class="text-gray-400 max-w-2xl mx-auto">
                        "My diverse toolkit allows me to bridge the gap between complex engineering and beautiful design."
                    </p>
                </div>

                <div class="grid lg:grid-cols-2 gap-12 items-center">
                    <SkillChart />
                    <div class="grid grid-cols-2 sm:grid-cols-3 gap-4">
                        {SKILLS
                            .iter()
                            .map(|skill| {
                                view! {
                                    <div class="p-6 glass-card rounded-2xl flex flex-col items-center justify-center hover:bg-white/5 transition-all text-center">
                                        <span class="text-white font-semibold">{skill.name}</span>
                                        <span class="text-blue-400 text-sm">
                                            {format!("{}%", skill.level)}
                                        </span>
                                        <span class="text-gray-600 text-[10px] uppercase tracking-wider mt-1">
                                            {skill.category.to_string()}
                                        </span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Horizontal bar chart on a fixed 0-100 domain.
#[component]
fn SkillChart() -> impl IntoView {
    view! {
        <div class="h-[400px] w-full glass-card p-6 rounded-3xl flex flex-col justify-between">
            {SKILLS
                .iter()
                .enumerate()
                .map(|(i, skill)| {
                    view! {
                        <div class="flex items-center gap-4 group">
                            <span class="w-24 shrink-0 text-right text-xs text-gray-400">
                                {skill.name}
                            </span>
                            <div class="flex-1 h-6 rounded-r-[10px] group-hover:bg-white/5">
                                <div
                                    class="h-full rounded-r-[10px] transition-all duration-700"
                                    style:width=bar_width(skill.level)
                                    style:background-color=bar_fill(i)
                                    title=format!("{}: {}", skill.name, skill.level)
                                ></div>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

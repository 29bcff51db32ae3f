use leptos::prelude::*;

use crate::content::TESTIMONIALS;

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section id="testimonials" class="py-24 px-6 bg-gray-950/50">
            <div class="max-w-7xl mx-auto">
                <div class="text-center mb-16">
                    <h2 class="text-4xl font-bold mb-4">
                        "Kind " <span class="text-blue-500">"Words"</span>
                    </h2>
                    <p class="text-gray-400">"Feedback from the people I've worked with."</p>
                </div>

                <div class="grid md:grid-cols-2 gap-8">
                    {TESTIMONIALS
                        .iter()
                        .map(|t| {
                            view! {
                                <div class="p-8 glass-card rounded-3xl relative">
                                    <div class="flex items-center gap-4 mb-6">
                                        <img
                                            src=t.avatar
                                            alt=t.name
                                            class="w-14 h-14 rounded-full border-2 border-blue-500"
                                        />
                                        <div>
                                            <h4 class="font-bold">{t.name}</h4>
                                            <p class="text-gray-500 text-sm">{t.role}</p>
                                        </div>
                                    </div>
                                    <p class="text-gray-300 italic">{format!("\"{}\"", t.content)}</p>
                                    <div class="absolute top-8 right-8 text-6xl leading-none font-serif text-blue-500/20">
                                        "❝"
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

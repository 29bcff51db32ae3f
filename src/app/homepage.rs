use leptos::prelude::*;

use crate::content::{OWNER_NAME, STATS};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="relative min-h-screen flex items-center pt-20 px-6 overflow-hidden">
            <div class="absolute top-0 right-0 -z-10 w-96 h-96 bg-blue-600/10 blur-[120px] rounded-full"></div>
            <div class="absolute bottom-0 left-0 -z-10 w-96 h-96 bg-purple-600/10 blur-[120px] rounded-full"></div>

            <div class="max-w-7xl mx-auto grid md:grid-cols-2 gap-12 items-center">
                <div class="animate-slide-in">
                    <h2 class="text-blue-500 font-semibold tracking-widest uppercase mb-4">
                        "Available for new projects"
                    </h2>
                    <h1 class="text-5xl md:text-7xl font-bold leading-tight mb-6">
                        "Designing digital " <span class="text-gradient">"experiences"</span>
                        " that matter."
                    </h1>
                    <p class="text-gray-400 text-lg md:text-xl mb-10 max-w-xl">
                        "I'm Alex, a Full Stack Developer specializing in building scalable web applications with React, Node.js, and modern architectural patterns."
                    </p>
                    <div class="flex flex-wrap gap-4">
                        <a
                            href="#projects"
                            class="px-8 py-4 bg-blue-600 hover:bg-blue-700 text-white rounded-xl font-bold flex items-center gap-2 transition-all shadow-lg shadow-blue-600/20"
                        >
                            "View Work →"
                        </a>
                        <a
                            href="#contact"
                            class="px-8 py-4 glass-card hover:bg-white/10 text-white rounded-xl font-bold transition-all"
                        >
                            "Contact Me"
                        </a>
                    </div>
                </div>

                <div class="relative animate-zoom-in">
                    <div class="relative z-10 rounded-3xl overflow-hidden border border-white/10 aspect-square shadow-2xl">
                        <img
                            src="https://picsum.photos/seed/alexrivera/800/800"
                            alt=OWNER_NAME
                            class="w-full h-full object-cover"
                        />
                    </div>
                    <div class="absolute -top-6 -right-6 p-4 glass-card rounded-2xl animate-bounce shadow-xl text-blue-400 font-mono">
                        ">_"
                    </div>
                    <div class="absolute -bottom-6 -left-6 p-4 glass-card rounded-2xl animate-pulse shadow-xl text-purple-400">
                        <i class="devicon-postgresql-plain text-2xl"></i>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="py-24 px-6">
            <div class="max-w-7xl mx-auto">
                <div class="grid md:grid-cols-2 gap-16 items-center">
                    <div class="space-y-8">
                        <h2 class="text-4xl font-bold">
                            "Driven by " <span class="text-blue-500">"Passion"</span> " and Code."
                        </h2>
                        <p class="text-gray-400 leading-relaxed text-lg">
                            "I started my journey into web development 6 years ago. Since then, I've worked with startups and established companies to create digital products that are not only functional but delightful to use."
                        </p>
                        <p class="text-gray-400 leading-relaxed text-lg">
                            "My approach focuses on clean architecture, performance optimization, and inclusive design. I believe that every line of code should contribute to a better user experience."
                        </p>
                        <div class="grid grid-cols-3 gap-4">
                            {STATS
                                .iter()
                                .map(|stat| {
                                    view! {
                                        <div class="p-4 glass-card rounded-xl text-center">
                                            <div class="text-3xl font-bold text-white mb-1">
                                                {stat.value}
                                            </div>
                                            <div class="text-xs text-gray-500 uppercase font-semibold">
                                                {stat.label}
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <a
                            href="/AlexRiveraResume.pdf"
                            download="AlexRiveraResume.pdf"
                            class="flex items-center gap-2 text-blue-500 font-bold hover:text-blue-400 transition-colors"
                        >
                            "⤓ Download Resume"
                        </a>
                    </div>

                    <div class="grid grid-cols-2 gap-6">
                        <FocusCard
                            title="Frontend"
                            blurb="Building responsive, animated, and performant UIs with React and Next.js."
                            icon="devicon-react-original text-blue-500"
                            hover="hover:border-blue-500/50"
                        />
                        <FocusCard
                            title="Backend"
                            blurb="Crafting secure APIs and robust server-side logic using Node and Python."
                            icon="devicon-nodejs-plain text-purple-500"
                            hover="mt-12 hover:border-purple-500/50"
                        />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn FocusCard(
    title: &'static str,
    blurb: &'static str,
    icon: &'static str,
    hover: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("p-8 glass-card rounded-3xl transition-all group {hover}")>
            <i class=format!("{icon} text-3xl mb-4 block")></i>
            <h3 class="text-xl font-bold mb-2">{title}</h3>
            <p class="text-gray-500 text-sm">{blurb}</p>
        </div>
    }
}

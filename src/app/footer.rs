use leptos::prelude::*;

use super::header::Brand;
use crate::content::{OWNER_NAME, SOCIALS};
use crate::nav::FOOTER_LINKS;

// stamped by build.rs so server render and hydration agree
const BUILD_YEAR: &str = env!("BUILD_YEAR");

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-12 border-t border-white/5 px-6">
            <div class="max-w-7xl mx-auto flex flex-col md:flex-row justify-between items-center gap-8">
                <div class="text-center md:text-left">
                    <Brand />
                    <p class="text-gray-500 text-sm mt-2">"Built with Rust, Leptos, Tailwind & Love."</p>
                </div>

                <div class="flex gap-8 text-sm font-medium text-gray-400">
                    {FOOTER_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a href=link.href class="hover:text-white transition-colors">
                                    {link.name}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="flex gap-4">
                    {SOCIALS
                        .iter()
                        .map(|&(label, icon, href)| {
                            view! {
                                <a
                                    href=href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label=label
                                    class="p-3 glass-card rounded-xl text-gray-400 hover:text-white transition-colors"
                                >
                                    <i class=icon></i>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="mt-12 text-center text-gray-600 text-xs">
                {format!("© {BUILD_YEAR} {OWNER_NAME}. All rights reserved.")}
            </div>
        </footer>
    }
}

use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::nav::{is_scrolled, navbar_class, MenuState, NAV_LINKS};

#[component]
pub fn Navbar() -> impl IntoView {
    let (menu, set_menu) = signal(MenuState::default());
    let (_, scroll_y) = use_window_scroll();
    let scrolled = Memo::new(move |_| is_scrolled(scroll_y.get()));

    view! {
        <nav class=move || navbar_class(scrolled.get())>
            <div class="max-w-7xl mx-auto px-6 flex justify-between items-center">
                <Brand />

                <div class="hidden md:flex space-x-8 items-center">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href
                                    class="text-sm font-medium text-gray-400 hover:text-white transition-colors"
                                >
                                    {link.name}
                                </a>
                            }
                        })
                        .collect_view()}
                    <a
                        href="#contact"
                        class="px-5 py-2 bg-blue-600 hover:bg-blue-700 text-white rounded-full text-sm font-semibold transition-all"
                    >
                        "Hire Me"
                    </a>
                </div>

                <button
                    class="md:hidden text-white text-2xl"
                    aria-label="Toggle menu"
                    on:click=move |_| set_menu.update(|m| m.toggle())
                >
                    {move || if menu.get().is_open() { "✕" } else { "☰" }}
                </button>
            </div>

            <Show when=move || menu.get().is_open()>
                <div class="absolute top-full left-0 right-0 bg-gray-900 border-b border-gray-800 p-6 md:hidden flex flex-col space-y-4 animate-fade-in">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href
                                    on:click=move |_| set_menu.update(|m| m.close())
                                    class="text-lg font-medium text-gray-300"
                                >
                                    {link.name}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </nav>
    }
}

#[component]
pub fn Brand() -> impl IntoView {
    view! {
        <a href="#" class="text-2xl font-bold tracking-tighter text-white">
            "ALEX"
            <span class="text-blue-500">"."</span>
            "RIVERA"
        </a>
    }
}

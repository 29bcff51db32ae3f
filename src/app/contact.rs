use leptos::prelude::*;
use leptos_use::use_timeout_fn;

use crate::contact::{
    ContactForm, Field, SubmissionStatus, SubmissionTicket, SubmitTransport, SUBMIT_DELAY_MS,
};
use crate::content::CHANNELS;

const INPUT_CLASS: &str = "w-full bg-white/5 border border-white/10 rounded-xl px-5 py-4 focus:ring-2 focus:ring-blue-500 outline-none transition-all text-white";

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="py-24 px-6 relative overflow-hidden">
            <div class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 -z-10 w-full h-full bg-blue-600/5 blur-[150px] rounded-full"></div>

            <div class="max-w-7xl mx-auto grid md:grid-cols-2 gap-16">
                <div>
                    <h2 class="text-4xl font-bold mb-6">
                        "Let's build " <br />
                        <span class="text-blue-500">"something together"</span>
                        "."
                    </h2>
                    <p class="text-gray-400 mb-12 text-lg">
                        "Whether you have a question or just want to say hi, my inbox is always open."
                    </p>
                    <div class="space-y-6">
                        {CHANNELS
                            .iter()
                            .map(|c| {
                                view! {
                                    <a href=c.href class="flex items-center gap-4 group">
                                        <div class="w-12 h-12 glass-card flex items-center justify-center rounded-2xl text-blue-500 font-bold">
                                            {c.icon}
                                        </div>
                                        <div>
                                            <p class="text-sm text-gray-500 uppercase tracking-wider font-bold">
                                                {c.label}
                                            </p>
                                            <p class="text-white font-medium group-hover:text-blue-400 transition-colors">
                                                {c.value}
                                            </p>
                                        </div>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <MessageForm />
            </div>
        </section>
    }
}

/// Stand-in for a real submission endpoint: logs the request body and lets
/// a one-shot timer report success after the requested delay.
struct TimerTransport<S> {
    delay: RwSignal<f64>,
    start: S,
}

impl<S: Fn(SubmissionTicket)> SubmitTransport for TimerTransport<S> {
    fn dispatch(&self, ticket: SubmissionTicket, body: String, delay_ms: f64) {
        log::info!("sending contact request ({} bytes)", body.len());
        // read by the timer on start
        self.delay.update_untracked(|d| *d = delay_ms);
        (self.start)(ticket);
    }
}

#[component]
fn MessageForm() -> impl IntoView {
    let form = RwSignal::new(ContactForm::new());
    let status = Memo::new(move |_| form.with(|f| f.status().clone()));

    // cancelled when this component is disposed; try_update covers a
    // completion racing the disposal
    let delay = RwSignal::new(SUBMIT_DELAY_MS);
    let timer = use_timeout_fn(
        move |ticket: SubmissionTicket| match form.try_update(|f| f.complete(ticket, Ok(()))) {
            Some(Ok(())) => log::info!("contact request delivered"),
            Some(Err(e)) => log::debug!("dropping completion: {e}"),
            None => log::debug!("contact form gone before completion"),
        },
        delay,
    );
    let transport = TimerTransport {
        delay,
        start: timer.start,
    };

    let on_reset = move |_: leptos::ev::MouseEvent| {
        if let Some(Err(e)) = form.try_update(|f| f.reset()) {
            log::debug!("{e}");
        }
    };

    view! {
        <div class="glass-card p-10 rounded-[2.5rem] border-white/10 shadow-2xl relative">
            <form
                class="space-y-6"
                on:submit=move |ev| {
                    ev.prevent_default();
                    if let Some(Err(e)) = form.try_update(|f| f.submit_with(&transport)) {
                        log::debug!("{e}");
                    }
                }
            >
                <div>
                    <label for="contact_name" class="block text-sm font-medium text-gray-400 mb-2">
                        "Name"
                    </label>
                    <input
                        id="contact_name"
                        required
                        type="text"
                        placeholder="Your Name"
                        class=INPUT_CLASS
                        prop:value=move || form.with(|f| f.fields().name.clone())
                        on:input=move |ev| {
                            form.update(|f| f.update_field(Field::Name, event_target_value(&ev)))
                        }
                    />
                </div>
                <div>
                    <label for="contact_email" class="block text-sm font-medium text-gray-400 mb-2">
                        "Email Address"
                    </label>
                    <input
                        id="contact_email"
                        required
                        type="email"
                        placeholder="name@example.com"
                        class=INPUT_CLASS
                        prop:value=move || form.with(|f| f.fields().email.clone())
                        on:input=move |ev| {
                            form.update(|f| f.update_field(Field::Email, event_target_value(&ev)))
                        }
                    />
                </div>
                <div>
                    <label for="contact_message" class="block text-sm font-medium text-gray-400 mb-2">
                        "Message"
                    </label>
                    <textarea
                        id="contact_message"
                        required
                        rows=4
                        placeholder="Tell me about your project..."
                        class=format!("{INPUT_CLASS} resize-none")
                        prop:value=move || form.with(|f| f.fields().message.clone())
                        on:input=move |ev| {
                            form.update(|f| f.update_field(Field::Message, event_target_value(&ev)))
                        }
                    ></textarea>
                </div>
                <button
                    type="submit"
                    disabled=move || status.get().is_loading()
                    class=move || {
                        if status.get().is_loading() {
                            "w-full py-5 bg-blue-600 text-white rounded-2xl font-bold transition-all flex items-center justify-center gap-2 opacity-50 cursor-not-allowed"
                        } else {
                            "w-full py-5 bg-blue-600 hover:bg-blue-700 text-white rounded-2xl font-bold transition-all flex items-center justify-center gap-2"
                        }
                    }
                >
                    {move || if status.get().is_loading() { "Sending..." } else { "Send Message" }}
                    " "
                    {move || if status.get().is_success() { "✓ Sent" } else { "→" }}
                </button>
                {move || match status.get() {
                    SubmissionStatus::Failed(msg) => {
                        Some(
                            view! {
                                <p class="text-sm text-red-400 text-center">
                                    {format!("Couldn't send your message: {msg}")}
                                </p>
                            },
                        )
                    }
                    _ => None,
                }}
            </form>

            <Show when=move || status.get().is_success()>
                <div class="absolute inset-0 bg-blue-600 rounded-[2.5rem] flex flex-col items-center justify-center p-10 text-center animate-fade-in">
                    <div class="w-20 h-20 bg-white/20 rounded-full flex items-center justify-center mb-6 text-4xl">
                        "✉"
                    </div>
                    <h3 class="text-2xl font-bold mb-2">"Message Received!"</h3>
                    <p class="text-blue-100 mb-8">
                        "Thanks for reaching out. I'll get back to you within 24 hours."
                    </p>
                    <button
                        class="px-8 py-3 bg-white text-blue-600 rounded-xl font-bold"
                        on:click=on_reset
                    >
                        "Send Another"
                    </button>
                </div>
            </Show>
        </div>
    }
}

mod contact;
mod footer;
mod header;
mod homepage;
mod projects;
mod skills;
mod testimonials;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use contact::ContactSection;
use footer::Footer;
use header::Navbar;
use homepage::{About, Hero};
use projects::Projects;
use skills::Skills;
use testimonials::Testimonials;

use crate::content::OWNER_NAME;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="scroll-smooth">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{OWNER_NAME} - {title}") />
        <Meta
            name="description"
            content="Portfolio of Alex Rivera, Full Stack Developer building scalable web applications."
        />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

/// The whole site is one scrolling page of anchored sections.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Full Stack Developer" />
        <div class="min-h-screen bg-[#030712] text-gray-100 selection:bg-blue-500/30">
            <Navbar />
            <Hero />
            <About />
            <Skills />
            <Projects />
            <Testimonials />
            <ContactSection />
            <Footer />
        </div>
    }
}

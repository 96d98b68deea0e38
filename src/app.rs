mod about;
mod certifications;
mod contact;
mod footer;
mod hero;
mod learning;
mod modal;
mod navbar;
mod page;
mod projects;
mod skills;
mod widgets;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::PORTFOLIO;
use page::PortfolioPage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <MetaTags />
            </head>
            <body class="bg-slate-900 text-white antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let profile = &PORTFOLIO.profile;
    let name = profile.name.as_str();

    view! {
        <Title formatter=move |title| format!("{name} - {title}") />
        <Meta name="description" content=profile.tagline.as_str() />

        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=PortfolioPage />
            </Routes>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    if let Some(res) = use_context::<leptos_axum::ResponseOptions>() {
        res.set_status(http::StatusCode::NOT_FOUND);
    }

    view! {
        <Title text="Not Found" />
        <main class="min-h-screen flex flex-col items-center justify-center gap-6 text-center px-4">
            <h1 class="text-6xl font-bold gradient-text">"404"</h1>
            <p class="text-slate-400">"This page doesn't exist."</p>
            <a
                href="/"
                class="px-6 py-3 rounded-full bg-indigo-600 hover:bg-indigo-500 transition-colors font-medium"
            >
                "Back home"
            </a>
        </main>
    }
}

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    ParamSegment, StaticSegment,
};

use crate::components::nav::Nav;
use crate::i18n::Translator;
use crate::pages::server::ServerPage;
use crate::pages::servers::ServersPage;
use crate::params::IDENTIFIER_PARAM;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <link rel="icon" href="/favicon.svg" type="image/svg+xml" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(Translator::default());

    view! {
        <Stylesheet id="leptos" href="/pkg/plan-console.css" />
        <Title text="Plan" />
        <Router>
            <Routes fallback=|| view! { <p>"Page not found."</p> }.into_any()>
                <Route path=StaticSegment("") view=ServersView />
                <Route
                    path=(StaticSegment("server"), ParamSegment(IDENTIFIER_PARAM))
                    view=ServerView
                />
            </Routes>
        </Router>
    }
}

#[component]
fn ServersView() -> impl IntoView {
    let translator = use_context::<Translator>().unwrap_or_default();

    view! {
        <div class="app-layout">
            <Nav translator=translator />
            <main class="main-content">
                <ServersPage />
            </main>
        </div>
    }
}

#[component]
fn ServerView() -> impl IntoView {
    let translator = use_context::<Translator>().unwrap_or_default();

    view! {
        <div class="app-layout">
            <Nav translator=translator />
            <main class="main-content">
                <ServerPage />
            </main>
        </div>
    }
}

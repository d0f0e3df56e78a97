//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast_stack::ToastStack;
use crate::pages::register::RegisterPage;
use crate::state::{auth::AuthState, notices::NoticeState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="pt-BR">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and notification contexts and sets up client-side
/// routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let notices = RwSignal::new(NoticeState::default());

    provide_context(auth);
    provide_context(notices);

    // Effects only run in the browser, so the server always renders the
    // loading state and hydration picks up the stored token afterwards.
    Effect::new(move || {
        auth.set(AuthState::loaded(crate::util::session::load_token()));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/cadastro.css"/>
        <Title text="Cadastro"/>

        <Router>
            <main class="app">
                // `/login` and `/dashboard` belong to the wider front-end; until
                // they are mounted here, navigating to them lands on this fallback.
                <Routes fallback=|| "Página não encontrada.".into_view()>
                    <Route path=StaticSegment("") view=RegisterPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                </Routes>
            </main>
        </Router>
        <ToastStack/>
    }
}

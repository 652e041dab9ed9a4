//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
    hooks::use_location,
};

use crate::config::legacy_redirect;
use crate::pages::{
    console::{AdminLivePage, GatekeeperPage},
    landing::LandingPage,
    login::LoginPage,
};
use crate::state::auth::{AuthFacade, AuthState};
use crate::util::auth::{LANDING_PATH, replace_options};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
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
/// Builds the session facade once, provides it and the auth signal to every
/// page, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let facade = AuthFacade::from_env();
    let auth = RwSignal::new(AuthState::pending());

    provide_context(auth);
    provide_context(facade.clone());

    // Effects only run in the browser, so SSR always renders the pending state.
    Effect::new(move || {
        let restored = facade.restore();
        auth.set(restored);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/gatewatch.css"/>
        <Title text="Gatewatch"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("live")) view=AdminLivePage/>
                <Route path=StaticSegment("gatekeeper") view=GatekeeperPage/>
                <Route path=(StaticSegment("gatekeeper"), StaticSegment("scan")) view=LegacyRedirect/>
            </Routes>
        </Router>
    }
}

/// Forward a retired path to its registered replacement.
#[component]
fn LegacyRedirect() -> impl IntoView {
    let pathname = use_location().pathname.get_untracked();
    let target = legacy_redirect(&pathname).unwrap_or(LANDING_PATH);
    view! { <Redirect path=target options=replace_options()/> }
}

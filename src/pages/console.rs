//! Role consoles reached from the landing redirect.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::{AuthState, use_auth, use_auth_facade};
use crate::util::auth::install_unauth_redirect;

/// Admin live-monitoring console.
#[component]
pub fn AdminLivePage() -> impl IntoView {
    view! {
        <ConsoleFrame title="Live Monitoring">
            <p class="console-page__empty">"No gate activity yet."</p>
        </ConsoleFrame>
    }
}

/// Gatekeeper console.
#[component]
pub fn GatekeeperPage() -> impl IntoView {
    view! {
        <ConsoleFrame title="Gatekeeper">
            <p class="console-page__empty">"Waiting for arrivals."</p>
        </ConsoleFrame>
    }
}

/// Shared header with the signed-in user and a sign-out action.
/// Bounces anonymous visitors to `/login`.
#[component]
fn ConsoleFrame(title: &'static str, children: Children) -> impl IntoView {
    let auth = use_auth();
    let facade = use_auth_facade();
    install_unauth_redirect(auth, use_navigate());

    // Clearing the signal lets the guard above perform the redirect.
    let on_sign_out = move |_| {
        facade.logout();
        auth.set(AuthState::default());
    };

    let display_name = move || {
        auth.with(|state| {
            state
                .user
                .as_ref()
                .map(|u| if u.name.is_empty() { u.email.clone() } else { u.name.clone() })
                .unwrap_or_default()
        })
    };

    view! {
        <div class="console-page">
            <header class="console-page__header">
                <h1>{title}</h1>
                <span class="console-page__user">{display_name}</span>
                <button class="btn" on:click=on_sign_out>
                    "Sign out"
                </button>
            </header>
            <main class="console-page__body">{children()}</main>
        </div>
    }
}

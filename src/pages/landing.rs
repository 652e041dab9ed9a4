//! Landing route: waits for the session to resolve, then hands the visitor
//! to their role's console.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::use_auth;
use crate::util::auth::install_role_redirect;

#[component]
pub fn LandingPage() -> impl IntoView {
    install_role_redirect(use_auth(), use_navigate());

    view! {
        <div class="landing-page" role="status" aria-busy="true">
            <div class="landing-page__spinner" aria-hidden="true"></div>
            <p class="landing-page__label">"Loading..."</p>
        </div>
    }
}

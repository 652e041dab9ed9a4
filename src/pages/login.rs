//! Login page with sign-in and account registration forms.
//!
//! A successful response is persisted here (the facade itself never writes
//! storage), the auth signal is updated, and the visitor is sent back to the
//! landing route so the role redirect picks the console.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::{NavigateOptions, hooks::use_navigate};

use crate::net::types::Role;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::{Session, SessionPayload, User};
#[cfg(feature = "hydrate")]
use crate::state::auth::AuthState;
use crate::state::auth::{use_auth, use_auth_facade};
#[cfg(feature = "hydrate")]
use crate::util::auth::{LANDING_PATH, replace_options};
#[cfg(any(test, feature = "hydrate"))]
use crate::util::storage::{SessionStore, save_session};

const MISSING_CREDENTIALS: &str = "Enter both email and password.";
const MISSING_REGISTRATION: &str = "Enter name, email, and password.";

fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_CREDENTIALS);
    }
    Ok((email.to_owned(), password.to_owned()))
}

fn validate_register_input(name: &str, email: &str, password: &str) -> Result<(String, String, String), &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err(MISSING_REGISTRATION);
    }
    Ok((name.to_owned(), email.to_owned(), password.to_owned()))
}

/// Persist a session payload and return its user.
#[cfg(any(test, feature = "hydrate"))]
fn complete_sign_in(store: &dyn SessionStore, payload: &SessionPayload) -> Result<User, String> {
    let session = Session::from_payload(payload).map_err(|e| format!("Unexpected session response: {e}"))?;
    save_session(store, &session);
    Ok(session.user)
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let facade = use_auth_facade();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let reg_name = RwSignal::new(String::new());
    let reg_email = RwSignal::new(String::new());
    let reg_password = RwSignal::new(String::new());
    let reg_role = RwSignal::new(Role::Gatekeeper.to_string());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let on_sign_in = {
        let facade = facade.clone();
        #[cfg(feature = "hydrate")]
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if busy.get() {
                return;
            }
            let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
                Ok(values) => values,
                Err(msg) => {
                    info.set(msg.to_owned());
                    return;
                }
            };
            busy.set(true);
            info.set("Signing in...".to_owned());

            #[cfg(feature = "hydrate")]
            {
                let facade = facade.clone();
                let navigate = navigate.clone();
                leptos::task::spawn_local(async move {
                    let outcome = facade
                        .login(&email_value, &password_value)
                        .await
                        .map_err(|e| format!("Sign-in failed: {e}"))
                        .and_then(|payload| complete_sign_in(facade.store(), &payload));
                    finish(outcome, auth, info, busy, &navigate);
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&facade, email_value, password_value, auth);
            }
        }
    };

    let on_register = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (name_value, email_value, password_value) =
            match validate_register_input(&reg_name.get(), &reg_email.get(), &reg_password.get()) {
                Ok(values) => values,
                Err(msg) => {
                    info.set(msg.to_owned());
                    return;
                }
            };
        let role = Role::parse(&reg_role.get());
        busy.set(true);
        info.set("Creating account...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let facade = facade.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let outcome = facade
                    .register(&name_value, &email_value, &password_value, &role)
                    .await
                    .map_err(|e| format!("Registration failed: {e}"))
                    .and_then(|payload| complete_sign_in(facade.store(), &payload));
                finish(outcome, auth, info, busy, &navigate);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&facade, name_value, email_value, password_value, role);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Gatewatch"</h1>
                <p class="login-card__subtitle">"Sign in"</p>
                <form class="login-form" on:submit=on_sign_in>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">"Create an account"</p>
                <form class="login-form" on:submit=on_register>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Full name"
                        prop:value=move || reg_name.get()
                        on:input=move |ev| reg_name.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || reg_email.get()
                        on:input=move |ev| reg_email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || reg_password.get()
                        on:input=move |ev| reg_password.set(event_target_value(&ev))
                    />
                    <select
                        class="login-input"
                        prop:value=move || reg_role.get()
                        on:change=move |ev| reg_role.set(event_target_value(&ev))
                    >
                        <option value="gatekeeper">"Gatekeeper"</option>
                        <option value="admin">"Admin"</option>
                    </select>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Register"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}

/// Apply a sign-in/registration outcome to the page and session state.
#[cfg(feature = "hydrate")]
fn finish<F>(outcome: Result<User, String>, auth: RwSignal<AuthState>, info: RwSignal<String>, busy: RwSignal<bool>, navigate: &F)
where
    F: Fn(&str, NavigateOptions),
{
    match outcome {
        Ok(user) => {
            auth.set(AuthState::signed_in(user));
            info.set(String::new());
            busy.set(false);
            navigate(LANDING_PATH, replace_options());
        }
        Err(msg) => {
            info.set(msg);
            busy.set(false);
        }
    }
}

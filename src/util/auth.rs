//! Role-based landing redirect and shared auth route guards.
//!
//! SYSTEM CONTEXT
//! ==============
//! The landing route decides, once per mount, which console a visitor
//! belongs on. Protected pages reuse the unauthenticated guard so every route
//! applies identical login redirects.
//!
//! DESIGN
//! ======
//! The decision table (`redirect_target`) is pure. `RoleRedirector` wraps it
//! in an edge detector: the first settled state yields a destination, every
//! later observation yields nothing. Effects feed it every state change, so
//! re-runs after navigation stay silent.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::types::Role;
use crate::state::auth::AuthState;

pub const LANDING_PATH: &str = "/";
pub const ADMIN_LIVE_PATH: &str = "/admin/live";
pub const GATEKEEPER_PATH: &str = "/gatekeeper";
pub const LOGIN_PATH: &str = "/login";

/// Where a settled visitor is sent from the landing route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Destination {
    AdminLive,
    Gatekeeper,
    Login,
}

impl Destination {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::AdminLive => ADMIN_LIVE_PATH,
            Self::Gatekeeper => GATEKEEPER_PATH,
            Self::Login => LOGIN_PATH,
        }
    }

    /// Console for a role; unrecognized roles get the login page.
    #[must_use]
    pub fn for_role(role: &Role) -> Self {
        match role {
            Role::Admin => Self::AdminLive,
            Role::Gatekeeper => Self::Gatekeeper,
            Role::Other(_) => Self::Login,
        }
    }
}

/// Destination for a settled auth state, or `None` while loading.
#[must_use]
pub fn redirect_target(state: &AuthState) -> Option<Destination> {
    if state.loading {
        return None;
    }
    Some(state.role().map_or(Destination::Login, Destination::for_role))
}

/// One-shot redirect decision for a single mount.
#[derive(Clone, Debug, Default)]
pub struct RoleRedirector {
    navigated: bool,
}

impl RoleRedirector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the latest auth state. Returns a destination at most once.
    pub fn observe(&mut self, state: &AuthState) -> Option<Destination> {
        if self.navigated {
            return None;
        }
        let target = redirect_target(state)?;
        self.navigated = true;
        Some(target)
    }

    #[must_use]
    pub fn has_navigated(&self) -> bool {
        self.navigated
    }
}

/// History-replacing navigation, so the redirecting page is not kept in
/// back-navigation.
#[must_use]
pub fn replace_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Redirect once to the visitor's role destination when auth settles.
pub fn install_role_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let mut redirector = RoleRedirector::new();
    Effect::new(move || {
        let state = auth.get();
        if let Some(target) = redirector.observe(&state) {
            log::debug!("landing redirect to {}", target.path());
            navigate(target.path(), replace_options());
        }
    });
}

/// Whether a protected page should bounce the visitor to the login page.
#[must_use]
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

/// Redirect to `/login` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate(LOGIN_PATH, replace_options());
        }
    });
}

//! Auth-session state and the facade that owns it.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds one `AuthFacade` at startup and provides it, together with a
//! `RwSignal<AuthState>`, via context. Pages read the signal for routing and
//! call the facade for the mutating session operations.
//!
//! DESIGN
//! ======
//! The facade is a cloneable handle over a transport and a store. Login and
//! registration return the backend payload untouched and never write
//! storage; persisting a new session is the caller's job
//! (`util::storage::save_session`). Logout only clears storage.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::fmt;
use std::sync::Arc;

use leptos::prelude::*;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::net::api::{self, AuthError, AuthTransport, LOGIN_PATH, REGISTER_PATH};
use crate::net::types::{LoginRequest, RegisterRequest, Role, SessionPayload, User};
use crate::util::storage::{self, AUTH_TOKEN_KEY, SessionStore, USER_KEY};

/// Authentication state tracking the current user and loading status.
///
/// `Default` is the resolved, signed-out state; use `pending()` before the
/// persisted session has been read.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    #[must_use]
    pub fn pending() -> Self {
        Self { user: None, loading: true }
    }

    #[must_use]
    pub fn signed_in(user: User) -> Self {
        Self { user: Some(user), loading: false }
    }

    #[must_use]
    pub fn role(&self) -> Option<&Role> {
        self.user.as_ref().map(|u| &u.role)
    }
}

/// Single access point for reading and mutating the client session.
#[derive(Clone)]
pub struct AuthFacade {
    config: ClientConfig,
    transport: Arc<dyn AuthTransport>,
    store: Arc<dyn SessionStore>,
}

impl fmt::Debug for AuthFacade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthFacade")
            .field("api_base", &self.config.api_base)
            .finish_non_exhaustive()
    }
}

impl AuthFacade {
    pub fn new(config: ClientConfig, transport: Arc<dyn AuthTransport>, store: Arc<dyn SessionStore>) -> Self {
        Self { config, transport, store }
    }

    /// Facade wired to the environment config and the target's default
    /// transport and store.
    pub fn from_env() -> Self {
        Self::new(ClientConfig::from_env(), api::default_transport(), storage::default_store())
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn store(&self) -> &dyn SessionStore {
        self.store.as_ref()
    }

    /// `POST {api_base}/auth/login`.
    ///
    /// # Errors
    ///
    /// Returns the transport's `AuthError` unchanged when the backend rejects
    /// the credentials or cannot be reached.
    pub async fn login(&self, email: &str, password: &str) -> Result<SessionPayload, AuthError> {
        log::debug!("login requested for {email}");
        self.post(LOGIN_PATH, &LoginRequest { email, password }).await
    }

    /// `POST {api_base}/auth/register`.
    ///
    /// # Errors
    ///
    /// Same contract as [`AuthFacade::login`].
    pub async fn register(&self, name: &str, email: &str, password: &str, role: &Role) -> Result<SessionPayload, AuthError> {
        log::debug!("registration requested for {email} as {role}");
        self.post(REGISTER_PATH, &RegisterRequest { name, email, password, role }).await
    }

    /// Forget the persisted session. Safe to call repeatedly.
    pub fn logout(&self) {
        self.store.remove(AUTH_TOKEN_KEY);
        self.store.remove(USER_KEY);
        log::debug!("session cleared");
    }

    /// Resolve the persisted session into a settled `AuthState`.
    ///
    /// A user is restored only when both the token and a well-formed user
    /// record are present.
    pub fn restore(&self) -> AuthState {
        if self.token().is_none() {
            return AuthState::default();
        }
        let Some(raw) = self.store.get(USER_KEY) else {
            return AuthState::default();
        };
        match serde_json::from_str::<User>(&raw) {
            Ok(user) => AuthState::signed_in(user),
            Err(e) => {
                log::warn!("ignoring malformed persisted user: {e}");
                AuthState::default()
            }
        }
    }

    pub fn token(&self) -> Option<String> {
        self.store.get(AUTH_TOKEN_KEY).filter(|t| !t.is_empty())
    }

    async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<SessionPayload, AuthError> {
        let url = self.config.endpoint(path);
        let body = serde_json::to_value(body).map_err(|e| AuthError::Decode(e.to_string()))?;
        let result = self.transport.post_json(&url, body).await;
        if let Err(e) = &result {
            log::warn!("{path} failed: {e}");
        }
        result
    }
}

/// The reactive auth state provided by `App`.
pub fn use_auth() -> RwSignal<AuthState> {
    expect_context::<RwSignal<AuthState>>()
}

/// The session facade provided by `App`.
pub fn use_auth_facade() -> AuthFacade {
    expect_context::<AuthFacade>()
}

//! REST helpers for the auth endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Native builds (SSR, tests, tooling): `reqwest` via `net::http`.
//!
//! ERROR HANDLING
//! ==============
//! Every transport maps failures onto `AuthError` and hands them back
//! untouched; nothing here retries or falls back.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use async_trait::async_trait;

use super::types::SessionPayload;

pub const LOGIN_PATH: &str = "/auth/login";
pub const REGISTER_PATH: &str = "/auth/register";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("auth request rejected ({status}): {body}")]
    Rejected { status: u16, body: String },
    #[error("auth backend unreachable: {0}")]
    Unreachable(String),
    #[error("malformed auth response: {0}")]
    Decode(String),
}

impl AuthError {
    /// HTTP status for backend rejections.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            Self::Unreachable(_) | Self::Decode(_) => None,
        }
    }
}

/// JSON-over-HTTP POST used by the session facade.
///
/// `url` is fully resolved (base path already applied). Futures are not
/// `Send` because browser fetch futures never are.
#[async_trait(?Send)]
pub trait AuthTransport: Send + Sync {
    async fn post_json(&self, url: &str, body: serde_json::Value) -> Result<SessionPayload, AuthError>;
}

/// Browser `fetch` transport.
#[cfg(feature = "hydrate")]
#[derive(Debug, Default, Clone, Copy)]
pub struct FetchTransport;

#[cfg(feature = "hydrate")]
#[async_trait(?Send)]
impl AuthTransport for FetchTransport {
    async fn post_json(&self, url: &str, body: serde_json::Value) -> Result<SessionPayload, AuthError> {
        let resp = gloo_net::http::Request::post(url)
            .json(&body)
            .map_err(|e| AuthError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::Unreachable(e.to_string()))?;
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(AuthError::Rejected { status, body });
        }
        resp.json::<SessionPayload>()
            .await
            .map_err(|e| AuthError::Decode(e.to_string()))
    }
}

/// Transport for the current build target.
#[must_use]
pub fn default_transport() -> Arc<dyn AuthTransport> {
    #[cfg(feature = "hydrate")]
    {
        Arc::new(FetchTransport)
    }
    #[cfg(all(not(feature = "hydrate"), not(target_arch = "wasm32")))]
    {
        Arc::new(super::http::HttpTransport::new())
    }
    #[cfg(all(not(feature = "hydrate"), target_arch = "wasm32"))]
    {
        Arc::new(UnavailableTransport)
    }
}

/// Placeholder for wasm builds compiled without `hydrate`.
#[cfg(all(not(feature = "hydrate"), target_arch = "wasm32"))]
struct UnavailableTransport;

#[cfg(all(not(feature = "hydrate"), target_arch = "wasm32"))]
#[async_trait(?Send)]
impl AuthTransport for UnavailableTransport {
    async fn post_json(&self, url: &str, _body: serde_json::Value) -> Result<SessionPayload, AuthError> {
        Err(AuthError::Unreachable(format!("no transport available for {url}")))
    }
}

//! Native HTTP transport backed by `reqwest`.

use async_trait::async_trait;

use super::api::{AuthError, AuthTransport};
use super::types::SessionPayload;

#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl AuthTransport for HttpTransport {
    async fn post_json(&self, url: &str, body: serde_json::Value) -> Result<SessionPayload, AuthError> {
        let resp = self
            .client
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(|e| AuthError::Unreachable(e.to_string()))?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(AuthError::Rejected { status: status.as_u16(), body });
        }
        resp.json::<SessionPayload>()
            .await
            .map_err(|e| AuthError::Decode(e.to_string()))
    }
}

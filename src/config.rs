//! Client configuration and static asset/route policy.
//!
//! SYSTEM CONTEXT
//! ==============
//! The API base path is resolved once at startup and shared by every HTTP
//! call. The image host allow-list and legacy route table are fixed policy
//! mirrored from the deployment configuration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE: &str = "/api";
pub const API_BASE_ENV: &str = "GATEWATCH_API_BASE";

/// Remote hosts that page images may be loaded from.
pub const ALLOWED_IMAGE_HOSTS: [&str; 3] = ["images.unsplash.com", "res.cloudinary.com", "lh3.googleusercontent.com"];

/// Retired paths and the parent path they permanently redirect to.
pub const LEGACY_REDIRECTS: &[(&str, &str)] = &[("/gatekeeper/scan", "/gatekeeper")];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix for every REST endpoint, without a trailing slash.
    pub api_base: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_base: DEFAULT_API_BASE.to_owned() }
    }
}

impl ClientConfig {
    /// Build client config from the environment.
    ///
    /// `GATEWATCH_API_BASE` is read at runtime first (native builds), then
    /// at compile time (browser builds have no process environment), and
    /// finally falls back to `/api`.
    pub fn from_env() -> Self {
        let raw = std::env::var(API_BASE_ENV)
            .ok()
            .or_else(|| option_env!("GATEWATCH_API_BASE").map(str::to_owned));
        Self::with_api_base(raw.as_deref().unwrap_or(DEFAULT_API_BASE))
    }

    pub fn with_api_base(base: &str) -> Self {
        Self { api_base: normalize_base(base) }
    }

    /// Join an absolute endpoint path onto the configured base.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.api_base)
    }
}

fn normalize_base(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}

/// Resolve a retired path to its replacement, if one is registered.
pub fn legacy_redirect(path: &str) -> Option<&'static str> {
    let path = match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    };
    LEGACY_REDIRECTS
        .iter()
        .find(|(from, _)| *from == path)
        .map(|(_, to)| *to)
}

/// Whether `url` points at an allow-listed https image host.
pub fn is_allowed_image_url(url: &str) -> bool {
    let Some(rest) = url.strip_prefix("https://") else {
        return false;
    };
    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    let host = authority.rsplit('@').next().unwrap_or_default();
    let host = host.split(':').next().unwrap_or_default();
    ALLOWED_IMAGE_HOSTS
        .iter()
        .any(|allowed| allowed.eq_ignore_ascii_case(host))
}

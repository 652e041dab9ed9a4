//! Networking modules for the auth REST boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` defines the transport seam and error type, `http` is the native
//! `reqwest` transport, and `types` defines the wire schema.

pub mod api;
#[cfg(not(target_arch = "wasm32"))]
pub mod http;
pub mod types;

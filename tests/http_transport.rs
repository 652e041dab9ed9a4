//! End-to-end checks of the session facade over real HTTP against a mock
//! auth backend.

#![cfg(not(target_arch = "wasm32"))]

use std::sync::Arc;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::post;
use gatewatch::config::ClientConfig;
use gatewatch::net::api::AuthError;
use gatewatch::net::http::HttpTransport;
use gatewatch::net::types::{Role, Session};
use gatewatch::state::auth::AuthFacade;
use gatewatch::util::storage::MemoryStore;
use serde_json::{Value, json};

async fn login(Json(body): Json<Value>) -> Result<Json<Value>, (StatusCode, String)> {
    if body["email"] == "a@b.com" && body["password"] == "x" {
        Ok(Json(json!({ "token": "t1", "user": { "id": 1, "role": "admin" } })))
    } else {
        Err((StatusCode::UNAUTHORIZED, "invalid credentials".to_owned()))
    }
}

async fn register(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    let user = json!({ "id": 2, "name": body["name"], "email": body["email"], "role": body["role"] });
    (StatusCode::CREATED, Json(json!({ "token": "t2", "user": user })))
}

async fn not_json() -> &'static str {
    "ok"
}

/// Serve the mock backend on an ephemeral port and return its API base URL.
async fn spawn_backend() -> String {
    let app = Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/register", post(register))
        .route("/broken/auth/login", post(not_json));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn facade(base: &str, store: &MemoryStore) -> AuthFacade {
    AuthFacade::new(
        ClientConfig::with_api_base(base),
        Arc::new(HttpTransport::new()),
        Arc::new(store.clone()),
    )
}

#[tokio::test]
async fn login_returns_exact_backend_payload() {
    let origin = spawn_backend().await;
    let store = MemoryStore::new();

    let payload = facade(&format!("{origin}/api"), &store)
        .login("a@b.com", "x")
        .await
        .unwrap();

    assert_eq!(payload, json!({ "token": "t1", "user": { "id": 1, "role": "admin" } }));
    assert!(store.is_empty(), "facade must not persist the session itself");
}

#[tokio::test]
async fn login_rejection_carries_status_and_body() {
    let origin = spawn_backend().await;
    let store = MemoryStore::new();

    let err = facade(&format!("{origin}/api"), &store)
        .login("a@b.com", "wrong")
        .await
        .unwrap_err();

    assert_eq!(err, AuthError::Rejected { status: 401, body: "invalid credentials".to_owned() });
}

#[tokio::test]
async fn register_round_trips_through_backend() {
    let origin = spawn_backend().await;
    let store = MemoryStore::new();

    let payload = facade(&format!("{origin}/api/"), &store)
        .register("Gina", "g@example.com", "pw", &Role::Gatekeeper)
        .await
        .unwrap();

    let session = Session::from_payload(&payload).unwrap();
    assert_eq!(session.token, "t2");
    assert_eq!(session.user.name, "Gina");
    assert_eq!(session.user.role, Role::Gatekeeper);
}

#[tokio::test]
async fn non_json_success_body_is_a_decode_error() {
    let origin = spawn_backend().await;
    let store = MemoryStore::new();

    let err = facade(&format!("{origin}/broken"), &store)
        .login("a@b.com", "x")
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn closed_port_is_unreachable() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let store = MemoryStore::new();

    let err = facade(&format!("http://{addr}/api"), &store)
        .login("a@b.com", "x")
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::Unreachable(_)), "got {err:?}");
}

use serde_json::json;

use super::*;
use crate::util::storage::{AUTH_TOKEN_KEY, MemoryStore, USER_KEY};

#[test]
fn validate_login_input_trims_email_and_requires_both_fields() {
    assert_eq!(
        validate_login_input("  a@b.com ", "x"),
        Ok(("a@b.com".to_owned(), "x".to_owned()))
    );
    assert_eq!(validate_login_input("   ", "x"), Err(MISSING_CREDENTIALS));
    assert_eq!(validate_login_input("a@b.com", ""), Err(MISSING_CREDENTIALS));
}

#[test]
fn validate_login_input_keeps_password_whitespace() {
    assert_eq!(
        validate_login_input("a@b.com", " pass "),
        Ok(("a@b.com".to_owned(), " pass ".to_owned()))
    );
}

#[test]
fn validate_register_input_requires_all_fields() {
    assert_eq!(
        validate_register_input(" Gina ", "g@example.com", "pw"),
        Ok(("Gina".to_owned(), "g@example.com".to_owned(), "pw".to_owned()))
    );
    assert_eq!(validate_register_input("", "g@example.com", "pw"), Err(MISSING_REGISTRATION));
    assert_eq!(validate_register_input("Gina", " ", "pw"), Err(MISSING_REGISTRATION));
    assert_eq!(validate_register_input("Gina", "g@example.com", ""), Err(MISSING_REGISTRATION));
}

#[test]
fn complete_sign_in_persists_session_and_returns_user() {
    let store = MemoryStore::new();
    let payload = json!({ "token": "t1", "user": { "id": 1, "role": "admin" } });

    let user = complete_sign_in(&store, &payload).unwrap();

    assert_eq!(user.id, "1");
    assert_eq!(user.role, Role::Admin);
    assert_eq!(store.get(AUTH_TOKEN_KEY).as_deref(), Some("t1"));
    assert!(store.get(USER_KEY).is_some());
}

#[test]
fn complete_sign_in_rejects_payload_without_token() {
    let store = MemoryStore::new();
    let payload = json!({ "user": { "id": 1, "role": "admin" } });

    let err = complete_sign_in(&store, &payload).unwrap_err();

    assert!(err.starts_with("Unexpected session response"));
    assert!(store.is_empty());
}

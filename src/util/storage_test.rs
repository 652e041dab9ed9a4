use super::*;
use crate::net::types::{Role, User};

fn session() -> Session {
    Session {
        token: "t1".to_owned(),
        user: User {
            id: "1".to_owned(),
            name: "Ada".to_owned(),
            email: "ada@example.com".to_owned(),
            role: Role::Admin,
        },
    }
}

#[test]
fn memory_store_set_get_remove() {
    let store = MemoryStore::new();
    store.set("k", "v");
    assert_eq!(store.get("k").as_deref(), Some("v"));
    store.remove("k");
    assert_eq!(store.get("k"), None);
}

#[test]
fn memory_store_remove_absent_key_is_noop() {
    let store = MemoryStore::new();
    store.remove("missing");
    assert!(store.is_empty());
}

#[test]
fn memory_store_clones_share_entries() {
    let store = MemoryStore::new();
    let other = store.clone();
    other.set(AUTH_TOKEN_KEY, "abc");
    assert_eq!(store.get(AUTH_TOKEN_KEY).as_deref(), Some("abc"));
}

#[test]
fn save_session_writes_token_and_user_json() {
    let store = MemoryStore::new();
    save_session(&store, &session());

    assert_eq!(store.get(AUTH_TOKEN_KEY).as_deref(), Some("t1"));
    let raw = store.get(USER_KEY).unwrap();
    let user: User = serde_json::from_str(&raw).unwrap();
    assert_eq!(user, session().user);
    assert_eq!(store.len(), 2);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_inert_outside_the_browser() {
    let store = BrowserStorage;
    store.set(USER_KEY, "x");
    assert_eq!(store.get(USER_KEY), None);
    store.remove(USER_KEY);
}

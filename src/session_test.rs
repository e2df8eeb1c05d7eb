use super::*;

fn alice() -> User {
    User { id: 1, username: "alice".into(), full_name: None }
}

fn bob() -> User {
    User { id: 2, username: "bob".into(), full_name: Some("Bob B.".into()) }
}

// =============================================================================
// Initial state
// =============================================================================

#[test]
fn starts_anonymous() {
    let store = SessionStore::new();
    assert!(!store.is_authenticated());
    assert!(store.current_user().is_none());
}

// =============================================================================
// set_user / clear
// =============================================================================

#[test]
fn set_user_authenticates() {
    let store = SessionStore::new();
    store.set_user(alice());
    assert!(store.is_authenticated());
    assert_eq!(store.current_user(), Some(alice()));
}

#[test]
fn set_user_last_write_wins() {
    let store = SessionStore::new();
    store.set_user(alice());
    store.set_user(bob());
    assert_eq!(store.current_user(), Some(bob()));
}

#[test]
fn clear_resets_to_anonymous() {
    let store = SessionStore::new();
    store.set_user(alice());
    store.clear();
    assert!(!store.is_authenticated());
    assert!(store.current_user().is_none());
}

#[test]
fn clear_is_idempotent() {
    let store = SessionStore::new();
    store.clear();
    store.clear();
    assert!(!store.is_authenticated());
}

#[test]
fn clones_share_state() {
    let store = SessionStore::new();
    let handle = store.clone();
    store.set_user(alice());
    assert!(handle.is_authenticated());
    handle.clear();
    assert!(!store.is_authenticated());
}

// =============================================================================
// User deserialization
// =============================================================================

#[test]
fn user_deserializes_without_full_name() {
    let user: User = serde_json::from_str(r#"{"id":1,"username":"alice"}"#).unwrap();
    assert_eq!(user, alice());
}

#[test]
fn user_ignores_unknown_fields() {
    let json = r#"{"id":2,"username":"bob","full_name":"Bob B.","modified_at":"2024-01-01"}"#;
    let user: User = serde_json::from_str(json).unwrap();
    assert_eq!(user, bob());
}

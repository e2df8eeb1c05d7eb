//! Session store — the single source of truth for "who is logged in".
//!
//! DESIGN
//! ======
//! An injectable, cheaply cloneable handle over shared state rather than a
//! module-level singleton. Only `set_user` and `clear` ever write the
//! value; everything else reads. Mutations are single assignments, so a
//! plain sync lock is enough — no await ever happens while it is held.

use std::sync::{Arc, PoisonError, RwLock};

use serde::{Deserialize, Serialize};

// =============================================================================
// USER
// =============================================================================

/// Identity payload returned by the remote API's whoami endpoint.
///
/// Extra fields the server may add are ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: i64,
    /// Login name.
    pub username: String,
    /// Optional display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

// =============================================================================
// SESSION STORE
// =============================================================================

/// Holds the current user and exposes derived authentication status.
///
/// The session starts empty (`Anonymous`), is set by a successful identity
/// fetch, and is cleared by logout — explicit or forced by a 401.
#[derive(Clone, Debug, Default)]
pub struct SessionStore {
    user: Arc<RwLock<Option<User>>>,
}

impl SessionStore {
    /// Create an empty (unauthenticated) store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff a user is present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// The current user, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.user
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Unconditionally replace the current user. No validation: the caller
    /// guarantees the value came from a successful identity fetch.
    pub fn set_user(&self, user: User) {
        *self.user.write().unwrap_or_else(PoisonError::into_inner) = Some(user);
    }

    /// Clear the current user. Idempotent.
    pub fn clear(&self) {
        *self.user.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

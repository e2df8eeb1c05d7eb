//! Error taxonomy for session operations.
//!
//! DESIGN
//! ======
//! One enum covers the whole subsystem. Errors from register/login/whoami
//! propagate unmodified to the caller for display; the two exceptions are
//! `SessionExpired` (a 401 already consumed by the response guard — the
//! forced logout and navigation have happened, nothing left to handle) and
//! `ServerSessionInvalidation` (logout's own call failing — always caught
//! and logged, never surfaced). No variant is process-fatal; every one is
//! recoverable by re-authenticating.

/// Errors produced by session operations and the underlying transport.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Transport failure: the request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),

    /// The login endpoint rejected the credentials (401/403).
    #[error("authentication failed: status {status}")]
    Authentication { status: u16 },

    /// A 401 from an authenticated endpoint: no valid server session.
    #[error("unauthorized: no valid server session")]
    Unauthorized,

    /// The register endpoint rejected the payload (4xx, e.g. duplicate username).
    #[error("registration rejected: status {status}: {body}")]
    Registration { status: u16, body: String },

    /// The remote logout call failed. Logout tolerates this: the server
    /// session may already be gone. Logged, never returned to callers.
    #[error("server session invalidation failed: {0}")]
    ServerSessionInvalidation(String),

    /// A 401 intercepted by the response guard. By the time a caller sees
    /// this, the session is cleared and the app is navigating to login;
    /// the original failure has been consumed.
    #[error("session expired: forced logout performed")]
    SessionExpired,

    /// A response body could not be deserialized.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// The underlying HTTP client could not be constructed.
    #[error("http client build failed: {0}")]
    ClientBuild(String),

    /// Any other unexpected status from the remote API.
    #[error("api error: status {status}: {body}")]
    Api { status: u16, body: String },
}

impl AuthError {
    /// True when the guard has already handled this error: the caller
    /// should treat the operation as superseded, not failed.
    #[must_use]
    pub fn is_consumed(&self) -> bool {
        matches!(self, Self::SessionExpired)
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;

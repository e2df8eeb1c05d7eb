//! Response guard — forced logout on authorization failure.
//!
//! DESIGN
//! ======
//! A decorator implementing [`Transport`], wrapped around the real HTTP
//! transport so every outbound call is observed at one choke point, before
//! the caller's own error handling runs. Successes and non-401 failures
//! pass through untouched. A 401 on a call whose context has not been
//! retried is terminal for that call: the guard invalidates the server
//! session, clears the local session, navigates to login, and consumes the
//! original failure.
//!
//! The forced logout's own POST goes back through the guard itself —
//! observation stays uniform — but it is marked retried up front, so a 401
//! on it passes through instead of recursing. That flag is the entire loop
//! guard.

use std::sync::Arc;

use tracing::warn;

use crate::client::invalidate_server_session;
use crate::error::AuthError;
use crate::nav::{Navigator, Page};
use crate::session::SessionStore;
use crate::transport::{Call, Response, Transport};

/// Intercepts every completed HTTP response and forces re-authentication
/// on an unretried 401.
pub struct ResponseGuard {
    inner: Arc<dyn Transport>,
    session: SessionStore,
    navigator: Arc<dyn Navigator>,
}

impl ResponseGuard {
    #[must_use]
    pub fn new(inner: Arc<dyn Transport>, session: SessionStore, navigator: Arc<dyn Navigator>) -> Self {
        Self { inner, session, navigator }
    }
}

#[async_trait::async_trait]
impl Transport for ResponseGuard {
    async fn send(&self, call: &Call) -> Result<Response, AuthError> {
        let result = self.inner.send(call).await;
        match result {
            Ok(response) if response.status == 401 && !call.ctx.retried => {
                warn!(path = %call.path, "401 on guarded call, forcing logout");
                // Uniform observation: the logout call goes through the
                // guard too, pre-marked retried so a nested 401 falls
                // through to the arm below.
                invalidate_server_session(self).await;
                self.session.clear();
                self.navigator.navigate(Page::Login);
                Err(AuthError::SessionExpired)
            }
            // Retried 401s, other statuses, and transport errors propagate
            // untouched to the caller.
            other => other,
        }
    }
}

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;

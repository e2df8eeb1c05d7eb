//! Session operations against the remote API.
//!
//! DESIGN
//! ======
//! Four independent async units of work: register, login, whoami, logout.
//! Register chains login, login chains whoami — sequential awaits, each
//! network call completing before the next begins. No cross-call state is
//! held here; everything the operations learn lands in the injected
//! [`SessionStore`].
//!
//! The one hard invariant lives in `log_out`: local state is cleared no
//! matter what the server says. Logout must never leave the client
//! believing it is authenticated.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::AuthError;
use crate::nav::Navigator;
use crate::session::{SessionStore, User};
use crate::transport::{Call, Transport};

pub(crate) const REGISTER_PATH: &str = "register";
pub(crate) const LOGIN_PATH: &str = "login";
pub(crate) const WHOAMI_PATH: &str = "users/whoami";
pub(crate) const LOGOUT_PATH: &str = "user/logout";

// =============================================================================
// CREDENTIALS
// =============================================================================

/// Per-call credentials payload. Exists only for the duration of one
/// operation; never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    /// Optional display name, used by registration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

impl Credentials {
    #[must_use]
    pub fn new(username: &str, password: &str) -> Self {
        Self { username: username.to_owned(), password: password.to_owned(), full_name: None }
    }

    /// Attach a display name for registration.
    #[must_use]
    pub fn with_full_name(mut self, full_name: &str) -> Self {
        self.full_name = Some(full_name.to_owned());
        self
    }

    /// Form-encoded pairs for the OAuth2 password login flow.
    fn form_pairs(&self) -> Vec<(String, String)> {
        vec![
            ("username".to_owned(), self.username.clone()),
            ("password".to_owned(), self.password.clone()),
        ]
    }
}

// =============================================================================
// AUTH CLIENT
// =============================================================================

/// Performs the session operations through the (guarded) transport.
pub struct AuthClient {
    transport: Arc<dyn Transport>,
    session: SessionStore,
    navigator: Arc<dyn Navigator>,
}

impl AuthClient {
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>, session: SessionStore, navigator: Arc<dyn Navigator>) -> Self {
        Self { transport, session, navigator }
    }

    /// Handle to the session store this client mutates.
    #[must_use]
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Register a new account, then log in with the same credentials.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Registration`] if the remote call rejects the
    /// payload (e.g. duplicate username); login is never attempted in that
    /// case. Otherwise any error from the chained login propagates.
    pub async fn register(&self, credentials: &Credentials) -> Result<(), AuthError> {
        debug!(username = %credentials.username, "registering");
        let body = serde_json::to_value(credentials).map_err(|e| AuthError::Decode(e.to_string()))?;
        let response = self.transport.send(&Call::post(REGISTER_PATH).json(body)).await?;
        if !response.is_success() {
            return Err(AuthError::Registration { status: response.status, body: response.body });
        }
        self.log_in(credentials).await
    }

    /// Log in, establishing the server-side session, then fetch the
    /// identity via [`Self::view_me`].
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Authentication`] on rejected credentials (a 401
    /// is normally consumed by the response guard first, surfacing as
    /// [`AuthError::SessionExpired`]), or any error from the chained whoami.
    pub async fn log_in(&self, credentials: &Credentials) -> Result<(), AuthError> {
        debug!(username = %credentials.username, "logging in");
        let call = Call::post(LOGIN_PATH).form(credentials.form_pairs());
        let response = self.transport.send(&call).await?;
        match response.status {
            s if response.is_success() => {
                debug!(status = s, "login accepted");
                self.view_me().await.map(|_| ())
            }
            401 | 403 => Err(AuthError::Authentication { status: response.status }),
            _ => Err(AuthError::Api { status: response.status, body: response.body }),
        }
    }

    /// Fetch the current identity and store it in the session.
    ///
    /// This is how the session is rebuilt on each page load: nothing is
    /// restored from local storage, only the server-side cookie.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Unauthorized`] when no valid server session
    /// exists (the condition the response guard exists to catch) or
    /// [`AuthError::Decode`] on a malformed identity payload.
    pub async fn view_me(&self) -> Result<User, AuthError> {
        let response = self.transport.send(&Call::get(WHOAMI_PATH)).await?;
        match response.status {
            s if response.is_success() => {
                let user: User =
                    serde_json::from_str(&response.body).map_err(|e| AuthError::Decode(e.to_string()))?;
                debug!(username = %user.username, "identity fetched");
                self.session.set_user(user.clone());
                Ok(user)
            }
            401 => Err(AuthError::Unauthorized),
            _ => Err(AuthError::Api { status: response.status, body: response.body }),
        }
    }

    /// Log out: best-effort server-session invalidation, then an
    /// unconditional local clear and page reload.
    ///
    /// Never fails — the user-visible outcome of logout is always success,
    /// whatever the server said.
    pub async fn log_out(&self) {
        invalidate_server_session(self.transport.as_ref()).await;
        self.session.clear();
        self.navigator.reload();
    }
}

/// Best-effort POST to the logout endpoint. The call is marked retried up
/// front so the response guard passes a nested 401 through instead of
/// re-entering. Failures are logged and swallowed: the server session may
/// already be gone.
pub(crate) async fn invalidate_server_session(transport: &dyn Transport) {
    let result = transport.send(&Call::post(LOGOUT_PATH).mark_retried()).await;
    let outcome = match result {
        Ok(response) if response.is_success() => Ok(()),
        Ok(response) => Err(AuthError::ServerSessionInvalidation(format!(
            "status {}: {}",
            response.status, response.body
        ))),
        Err(e) => Err(AuthError::ServerSessionInvalidation(e.to_string())),
    };
    if let Err(e) = outcome {
        warn!(error = %e, "remote logout failed (session may already be gone)");
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;

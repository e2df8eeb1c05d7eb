//! # auth-session
//!
//! Client-side session manager for a web application: tracks the
//! authenticated user, mediates register/login/whoami/logout against a
//! remote API, and reacts to authorization failures by forcing
//! re-authentication.
//!
//! ARCHITECTURE
//! ============
//! Three pieces around one injected [`SessionStore`]:
//! - [`AuthClient`] runs the session operations, chaining register →
//!   login → whoami sequentially.
//! - [`ResponseGuard`] decorates the transport; on an unretried 401 it
//!   forces a logout and navigates to the login page.
//! - [`HttpTransport`] is the `reqwest`-backed transport with a cookie jar
//!   — the server session rides on a cookie the client never inspects.
//!
//! UI layers and the router stay outside the crate; the [`Navigator`]
//! trait is the only hook back into them.

pub mod client;
pub mod config;
pub mod error;
pub mod guard;
pub mod nav;
pub mod session;
pub mod transport;

use std::sync::Arc;

pub use client::{AuthClient, Credentials};
pub use config::ApiConfig;
pub use error::AuthError;
pub use guard::ResponseGuard;
pub use nav::{Navigator, Page};
pub use session::{SessionStore, User};
pub use transport::{Body, Call, CallContext, HttpTransport, Method, Response, Transport};

/// Assemble the production stack: `HttpTransport` wrapped by a
/// [`ResponseGuard`], driving an [`AuthClient`] over a fresh
/// [`SessionStore`].
///
/// # Errors
///
/// Returns [`AuthError::ClientBuild`] if the HTTP client cannot be
/// constructed.
pub fn build_client(config: &ApiConfig, navigator: Arc<dyn Navigator>) -> Result<AuthClient, AuthError> {
    let session = SessionStore::new();
    let http = Arc::new(HttpTransport::new(config)?);
    let guarded: Arc<dyn Transport> =
        Arc::new(ResponseGuard::new(http, session.clone(), Arc::clone(&navigator)));
    Ok(AuthClient::new(guarded, session, navigator))
}

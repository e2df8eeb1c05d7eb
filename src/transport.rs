//! Transport seam — call descriptors and the HTTP implementation.
//!
//! DESIGN
//! ======
//! Every outbound request is described by a [`Call`] and goes through the
//! [`Transport`] trait. That single choke point is what lets the response
//! guard observe every call uniformly and lets tests substitute a scripted
//! transport. The per-call [`CallContext`] travels with the `Call` and is
//! discarded when the call settles; its `retried` flag is what keeps a
//! forced logout from re-entering itself.
//!
//! [`HttpTransport`] is the production implementation: `reqwest` with a
//! cookie jar (the server session rides on a cookie the client never
//! inspects) and all paths resolved against the configured base origin.

use std::time::Duration;

use crate::config::ApiConfig;
use crate::error::AuthError;

// =============================================================================
// CALL DESCRIPTOR
// =============================================================================

/// HTTP method for a [`Call`]. Only the verbs the session API uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// Request body variants the remote API accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// No body (whoami, logout).
    Empty,
    /// JSON payload (register).
    Json(serde_json::Value),
    /// Form-encoded pairs (login — the OAuth2 password flow).
    Form(Vec<(String, String)>),
}

/// Per-call interception metadata. Attached to the call, discarded when it
/// settles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallContext {
    /// True once a forced logout has been attempted for this call, or when
    /// the call itself belongs to a (forced) logout. The guard propagates
    /// 401s on such calls untouched instead of re-entering.
    pub retried: bool,
}

/// One outbound request: method, path relative to the base origin, body,
/// and interception context.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub method: Method,
    pub path: String,
    pub body: Body,
    pub ctx: CallContext,
}

impl Call {
    /// A GET with no body.
    #[must_use]
    pub fn get(path: &str) -> Self {
        Self { method: Method::Get, path: path.to_owned(), body: Body::Empty, ctx: CallContext::default() }
    }

    /// A POST with no body.
    #[must_use]
    pub fn post(path: &str) -> Self {
        Self { method: Method::Post, path: path.to_owned(), body: Body::Empty, ctx: CallContext::default() }
    }

    /// Attach a JSON body.
    #[must_use]
    pub fn json(mut self, body: serde_json::Value) -> Self {
        self.body = Body::Json(body);
        self
    }

    /// Attach a form-encoded body.
    #[must_use]
    pub fn form(mut self, pairs: Vec<(String, String)>) -> Self {
        self.body = Body::Form(pairs);
        self
    }

    /// Mark the call as already retried, exempting it from guard re-entry.
    #[must_use]
    pub fn mark_retried(mut self) -> Self {
        self.ctx.retried = true;
        self
    }
}

/// A completed HTTP response: status and body text. Non-2xx statuses are
/// returned as `Ok` responses — mapping a status to an error is the
/// caller's concern, after the guard has had its look.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

impl Response {
    /// True for any 2xx status.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

// =============================================================================
// TRANSPORT TRAIT
// =============================================================================

/// Async seam between session operations and the network. Enables mocking
/// in tests and decoration by the response guard.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Execute one call to completion.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Network`] when no HTTP response was produced,
    /// or [`AuthError::SessionExpired`] when a decorating guard consumed
    /// the response. HTTP error statuses are `Ok` responses, not errors.
    async fn send(&self, call: &Call) -> Result<Response, AuthError>;
}

// =============================================================================
// HTTP TRANSPORT
// =============================================================================

/// Production transport: `reqwest` with a cookie jar against a configured
/// base origin.
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// Build the HTTP client from config.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::ClientBuild`] if the underlying client cannot
    /// be constructed.
    pub fn new(config: &ApiConfig) -> Result<Self, AuthError> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .map_err(|e| AuthError::ClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.base_url.clone() })
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn send(&self, call: &Call) -> Result<Response, AuthError> {
        let url = join_url(&self.base_url, &call.path);
        let request = match call.method {
            Method::Get => self.http.get(&url),
            Method::Post => self.http.post(&url),
        };
        let request = match &call.body {
            Body::Empty => request,
            Body::Json(value) => request.json(value),
            Body::Form(pairs) => request.form(pairs),
        };

        let response = request
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        Ok(Response { status, body })
    }
}

/// Resolve a relative API path against the base origin, normalizing the
/// joining slash.
fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}

// =============================================================================
// TEST SUPPORT
// =============================================================================

#[cfg(test)]
pub(crate) mod test_support {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use super::*;
    use crate::nav::{Navigator, Page};

    /// Scripted transport: pops one result per call, records every call.
    /// An exhausted script answers 200 with an empty JSON body.
    pub struct MockTransport {
        script: Mutex<VecDeque<Result<Response, AuthError>>>,
        pub calls: Mutex<Vec<Call>>,
    }

    impl MockTransport {
        pub fn new(script: Vec<Result<Response, AuthError>>) -> Self {
            Self { script: Mutex::new(script.into()), calls: Mutex::new(Vec::new()) }
        }

        pub fn ok(status: u16, body: &str) -> Result<Response, AuthError> {
            Ok(Response { status, body: body.to_owned() })
        }

        pub fn sent_paths(&self) -> Vec<String> {
            self.calls.lock().unwrap().iter().map(|c| c.path.clone()).collect()
        }

        pub fn call(&self, index: usize) -> Call {
            self.calls.lock().unwrap()[index].clone()
        }

        pub fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait::async_trait]
    impl Transport for MockTransport {
        async fn send(&self, call: &Call) -> Result<Response, AuthError> {
            self.calls.lock().unwrap().push(call.clone());
            self.script
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(Response { status: 200, body: "{}".to_owned() }))
        }
    }

    /// Navigator that records navigations and reload counts.
    #[derive(Default)]
    pub struct RecordingNavigator {
        pub navigations: Mutex<Vec<Page>>,
        pub reloads: Mutex<usize>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, page: Page) {
            self.navigations.lock().unwrap().push(page);
        }

        fn reload(&self) {
            *self.reloads.lock().unwrap() += 1;
        }
    }
}

#[cfg(test)]
#[path = "transport_test.rs"]
mod tests;

//! Navigation seam.
//!
//! The router itself lives outside this crate; session logic only needs two
//! side effects from it — send the app to a page (forced logout goes to
//! login) and reload the page (user-initiated logout resets UI state).
//! Injecting the trait keeps both observable in tests.

/// Application pages the session layer can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Login,
    Register,
    Chat,
}

impl Page {
    /// Route path for the page.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Chat => "/chat",
        }
    }
}

/// Host-provided navigation hooks. Implementations must be infallible;
/// session logic never reacts to navigation failure.
pub trait Navigator: Send + Sync {
    /// Route the application to the given page.
    fn navigate(&self, page: Page);

    /// Reload the current page, discarding transient UI state.
    fn reload(&self);
}

#[cfg(test)]
#[path = "nav_test.rs"]
mod tests;

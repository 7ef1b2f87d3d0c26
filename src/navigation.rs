//! Navigation abstraction for the host router. The SDK never assumes a
//! concrete router; callers implement [`Navigator`] and the SDK reports
//! route changes through it. A rejected route change is recovered uniformly
//! by forcing a full reload, regardless of which operation triggered it.

use std::fmt;
use tracing::error;

pub mod routes {
    pub const LANDING: &str = "/";
    pub const SIGN_IN: &str = "/signin";
    pub const DASHBOARD: &str = "/dashboard";
}

/// The host router rejected a route change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationFailure {
    message: String,
}

impl NavigationFailure {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for NavigationFailure {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Navigation failed: {}", self.message)
    }
}

impl std::error::Error for NavigationFailure {}

/// Host router hooks driven by the SDK.
pub trait Navigator: Send + Sync {
    /// Requests a route change.
    fn navigate(&self, route: &str) -> Result<(), NavigationFailure>;

    /// Forces a full reload of the application at its root.
    fn reload(&self);
}

/// Navigates to `route`, falling back to a full reload when the router
/// rejects the transition. The failure is logged; the reload is the only
/// recovery strategy for a broken router state.
pub fn navigate_or_reload(navigator: &dyn Navigator, route: &str) {
    if let Err(failure) = navigator.navigate(route) {
        error!("navigation to {route} failed: {failure}, forcing a reload");
        navigator.reload();
    }
}

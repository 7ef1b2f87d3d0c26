//! Session state shared by the HTTP layer, the route guard, and the auth
//! flows. Two storage scopes live behind a single lock: the tab scope holds
//! the auth token (`currentUserToken`) and ends with the browser session, the
//! persistent scope holds the cached display name (`username`) and survives
//! restarts. An absent token means unauthenticated regardless of a stale
//! display name.

use secrecy::SecretString;
use std::sync::{Mutex, PoisonError};

/// Tab-scoped storage, dropped when the client session ends.
#[derive(Debug, Default)]
struct TabScope {
    current_user_token: Option<SecretString>,
}

/// Persistent storage, survives client restarts.
#[derive(Debug, Default)]
struct PersistentScope {
    username: Option<String>,
}

#[derive(Debug, Default)]
struct Scopes {
    tab: TabScope,
    persistent: PersistentScope,
}

/// Process-wide session store. Cheap to share behind an `Arc`.
#[derive(Debug, Default)]
pub struct SessionStore {
    inner: Mutex<Scopes>,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_token(&self, token: SecretString) {
        self.lock().tab.current_user_token = Some(token);
    }

    /// Returns the current auth token, or `None` when unauthenticated.
    #[must_use]
    pub fn token(&self) -> Option<SecretString> {
        self.lock().tab.current_user_token.clone()
    }

    pub fn set_display_name(&self, name: impl Into<String>) {
        self.lock().persistent.username = Some(name.into());
    }

    #[must_use]
    pub fn display_name(&self) -> Option<String> {
        self.lock().persistent.username.clone()
    }

    /// Wipes both scopes in one step. After this returns, `token()` and
    /// `display_name()` both report absent.
    pub fn clear(&self) {
        *self.lock() = Scopes::default();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Scopes> {
        // The store holds no invariants that a poisoned lock could break.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

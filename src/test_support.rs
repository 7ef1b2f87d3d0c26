//! Shared doubles for unit tests.

use crate::navigation::{NavigationFailure, Navigator};
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

pub(crate) fn can_bind_localhost() -> bool {
    TcpListener::bind("127.0.0.1:0").is_ok()
}

/// Navigator double that records route changes and reloads, optionally
/// rejecting every navigation to exercise the reload fallback.
pub(crate) struct RecordingNavigator {
    fail_navigation: bool,
    navigations: Mutex<Vec<String>>,
    reloads: AtomicUsize,
}

impl RecordingNavigator {
    pub(crate) fn new() -> Self {
        Self {
            fail_navigation: false,
            navigations: Mutex::new(Vec::new()),
            reloads: AtomicUsize::new(0),
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            fail_navigation: true,
            ..Self::new()
        }
    }

    pub(crate) fn navigations(&self) -> Vec<String> {
        self.navigations.lock().unwrap().clone()
    }

    pub(crate) fn reloads(&self) -> usize {
        self.reloads.load(Ordering::SeqCst)
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: &str) -> Result<(), NavigationFailure> {
        if self.fail_navigation {
            return Err(NavigationFailure::new("router rejected the transition"));
        }
        self.navigations.lock().unwrap().push(route.to_string());
        Ok(())
    }

    fn reload(&self) {
        self.reloads.fetch_add(1, Ordering::SeqCst);
    }
}

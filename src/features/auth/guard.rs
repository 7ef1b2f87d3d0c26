//! Route guard for protected views. Evaluated on every navigation into a
//! protected route and re-evaluated on every child-route transition; the
//! decision is never cached, since the interceptor can invalidate the token
//! asynchronously. This is the single authorization choke-point for views.

use crate::{
    navigation::{navigate_or_reload, routes, Navigator},
    session::SessionStore,
};
use std::sync::Arc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allowed,
    Denied,
}

impl GuardDecision {
    #[must_use]
    pub fn is_allowed(self) -> bool {
        self == Self::Allowed
    }
}

pub struct AuthGuard {
    session: Arc<SessionStore>,
    navigator: Arc<dyn Navigator>,
}

impl AuthGuard {
    #[must_use]
    pub fn new(session: Arc<SessionStore>, navigator: Arc<dyn Navigator>) -> Self {
        Self { session, navigator }
    }

    /// Allowed iff a token is currently present. Denied redirects to the
    /// sign-in entry point before returning.
    pub fn can_activate(&self) -> GuardDecision {
        if self.session.token().is_some() {
            return GuardDecision::Allowed;
        }

        navigate_or_reload(self.navigator.as_ref(), routes::SIGN_IN);
        GuardDecision::Denied
    }

    /// Child-route transitions re-run the same check.
    pub fn can_activate_child(&self) -> GuardDecision {
        self.can_activate()
    }
}

//! Auth feature module covering the session lifecycle: sign-in, sign-up and
//! its email approval hand-off, logout, password reset, and the route guard.
//!
//! Flow overview: sign-in posts credentials and stores the returned token in
//! the tab scope. Sign-up registers an account and, after the approval email
//! notice, returns the visitor to the landing page; following the emailed
//! link exchanges the registration id and approve code for a token. A token
//! is only ever removed by logout or by the interceptor's 401 wipe.

pub mod client;
pub mod guard;
pub mod types;

pub use client::{AuthClient, SIGNUP_REDIRECT_DELAY};
pub use guard::{AuthGuard, GuardDecision};
pub use types::{NewAccount, PendingApproval};

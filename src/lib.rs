//! Dashboard and session client for the zopsm messaging platform.
//!
//! The crate owns the client side of the authentication lifecycle and keeps
//! it out of view code:
//!
//! - [`session::SessionStore`] holds the auth token (tab scope) and the
//!   cached display name (persistent scope) behind one lock.
//! - [`api::Api`] is the HTTP core; every request passes through the same
//!   interceptor, which attaches the JSON content type and the current token
//!   and reacts to a 401 by wiping the session and forcing a full reload.
//! - [`features::auth::AuthClient`] drives sign-in, sign-up and its email
//!   approval, logout, and password reset; [`features::auth::AuthGuard`] is
//!   the authorization choke-point for protected routes.
//! - The remaining [`features`] are thin clients for the dashboard CRUD
//!   surface (account, projects, services, current user).
//!
//! Navigation goes through the [`navigation::Navigator`] trait so the SDK
//! can drive any host router; a rejected route change is always recovered by
//! a full reload.

pub mod api;
pub mod config;
pub mod errors;
pub mod features;
pub mod navigation;
pub mod session;

#[cfg(test)]
pub(crate) mod test_support;

pub use api::Api;
pub use config::AppConfig;
pub use errors::{AppError, AuthError};
pub use features::auth::{AuthClient, AuthGuard, GuardDecision, NewAccount, PendingApproval};
pub use navigation::{NavigationFailure, Navigator};
pub use session::SessionStore;

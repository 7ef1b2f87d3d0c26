//! Domain-level feature clients (auth, account, projects, services, me).
//! Views import these modules so API handling and session side effects stay
//! in dedicated areas instead of view code.

pub mod account;
pub mod auth;
pub mod me;
pub mod projects;
pub mod services;

pub mod client;
pub mod types;

pub use client::ServicesClient;
pub use types::{NewService, Service};

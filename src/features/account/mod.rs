pub mod client;
pub mod types;

pub use client::AccountClient;
pub use types::{AccountProfile, AccountUpdate};

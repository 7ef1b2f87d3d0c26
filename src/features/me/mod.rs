pub mod client;
pub mod types;

pub use client::MeClient;
pub use types::UserInfo;

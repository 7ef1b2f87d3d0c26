pub mod client;
pub mod types;

pub use client::ProjectsClient;
pub use types::{ApiCredentials, CreatedProject, ProjectDetail, ProjectSummary};

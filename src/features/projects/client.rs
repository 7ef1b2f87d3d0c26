//! Client helpers for project CRUD and the project-level push credentials.

use crate::{
    api::Api,
    errors::AppError,
    features::projects::types::{
        ApiCredentials, CreateProjectRequest, CreatedProject, ProjectDetail, ProjectSummary,
    },
};
use std::sync::Arc;

pub struct ProjectsClient {
    api: Arc<Api>,
}

impl ProjectsClient {
    #[must_use]
    pub fn new(api: Arc<Api>) -> Self {
        Self { api }
    }

    /// Creates a project and returns its server-assigned identity.
    pub async fn create_project(
        &self,
        name: &str,
        description: &str,
    ) -> Result<CreatedProject, AppError> {
        let request = CreateProjectRequest {
            name: name.to_string(),
            description: description.to_string(),
        };
        self.api.post_json("/projects", &request).await
    }

    /// Lists the account's projects.
    pub async fn projects(&self) -> Result<Vec<ProjectSummary>, AppError> {
        self.api.get_json("/projects").await
    }

    /// Retrieves one project with its service codes and usage counters.
    pub async fn retrieve_project(&self, project_id: &str) -> Result<ProjectDetail, AppError> {
        self.api.get_json(&format!("/projects/{project_id}")).await
    }

    /// Fetches the push API credentials of a project.
    pub async fn api_credentials(&self, project_id: &str) -> Result<ApiCredentials, AppError> {
        self.api
            .get_json(&format!("/projects/{project_id}/api"))
            .await
    }
}

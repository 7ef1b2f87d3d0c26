//! Client helpers for the per-project service endpoints.

use crate::{
    api::Api,
    errors::AppError,
    features::services::types::{NewService, Service},
};
use std::sync::Arc;

pub struct ServicesClient {
    api: Arc<Api>,
}

impl ServicesClient {
    #[must_use]
    pub fn new(api: Arc<Api>) -> Self {
        Self { api }
    }

    /// Attaches a catalog service to a project.
    pub async fn create_service(
        &self,
        project_id: &str,
        service: &NewService,
    ) -> Result<Service, AppError> {
        self.api
            .post_json(&format!("/projects/{project_id}/services"), service)
            .await
    }

    /// Fetches a service by its catalog code.
    pub async fn service(
        &self,
        project_id: &str,
        service_catalog_code: &str,
    ) -> Result<Service, AppError> {
        self.api
            .get_json(&format!(
                "/projects/{project_id}/services/{service_catalog_code}"
            ))
            .await
    }

    /// Detaches a service from a project.
    pub async fn delete_service(
        &self,
        project_id: &str,
        service_catalog_code: &str,
    ) -> Result<(), AppError> {
        self.api
            .delete_empty(&format!(
                "/projects/{project_id}/services/{service_catalog_code}"
            ))
            .await
    }
}

use serde::{Deserialize, Serialize};

/// A messaging service (push, M2M, SMS, roc) attached to a project.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub service_catalog_code: String,
    pub item_limit: Option<u64>,
    pub item_used: Option<u64>,
}

/// Payload for attaching a service from the catalog to a project.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewService {
    pub service_catalog_code: String,
    pub name: String,
    pub description: String,
}

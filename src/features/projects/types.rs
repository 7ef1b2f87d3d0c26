use serde::{Deserialize, Serialize};

/// One entry of the `GET /projects` listing. Usage counters can be null for
/// freshly created projects.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub user_limit: Option<u64>,
    pub user_used: Option<u64>,
}

/// Envelope content of `GET /projects/{id}`.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetail {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub services: Vec<String>,
    pub user_limit: Option<u64>,
    pub user_used: Option<u64>,
}

#[derive(Clone, Debug, Serialize)]
pub(crate) struct CreateProjectRequest {
    pub name: String,
    pub description: String,
}

/// Envelope content of `POST /projects`.
#[derive(Clone, Debug, Deserialize)]
pub struct CreatedProject {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
}

/// Push credentials exposed under `GET /projects/{id}/api`.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiCredentials {
    pub id: String,
    pub fcm_api_keys: Option<String>,
    pub fcm_project_number: Option<String>,
    pub apns_cert: Option<String>,
}

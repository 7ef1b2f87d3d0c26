use serde::{Deserialize, Serialize};

/// Envelope content of `GET /account`.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountProfile {
    pub organization_name: String,
    pub address: Option<String>,
    pub phone: Option<i64>,
    pub email: String,
    pub registration_id: String,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountUpdate {
    pub organization_name: String,
    pub address: Option<String>,
    pub phone: Option<i64>,
    pub email: String,
}

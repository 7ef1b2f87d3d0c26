//! Client helpers for the account-settings endpoints.

use crate::{
    api::Api,
    errors::AppError,
    features::account::types::{AccountProfile, AccountUpdate},
};
use std::sync::Arc;

pub struct AccountClient {
    api: Arc<Api>,
}

impl AccountClient {
    #[must_use]
    pub fn new(api: Arc<Api>) -> Self {
        Self { api }
    }

    /// Fetches the authenticated account's profile.
    pub async fn account(&self) -> Result<AccountProfile, AppError> {
        self.api.get_json("/account").await
    }

    /// Updates the account profile.
    pub async fn update_account(&self, update: &AccountUpdate) -> Result<(), AppError> {
        self.api.put_json_empty("/account", update).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::navigation::Navigator;
    use crate::session::SessionStore;
    use crate::test_support::{can_bind_localhost, RecordingNavigator};
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_with(server_url: &str) -> AccountClient {
        let api = Api::new(
            AppConfig::new(server_url),
            Arc::new(SessionStore::new()),
            Arc::new(RecordingNavigator::new()) as Arc<dyn Navigator>,
        )
        .unwrap();
        AccountClient::new(Arc::new(api))
    }

    #[tokio::test]
    async fn account_parses_the_profile_fields() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;
        let client = client_with(&server.uri());

        Mock::given(method("GET"))
            .and(path("/account"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "meta": { "params": { "indent": 0 } },
                "content": {
                    "organizationName": "Acme",
                    "address": "1 Main St",
                    "phone": 5550100,
                    "email": "a@b.com",
                    "registrationId": "reg-1"
                }
            })))
            .mount(&server)
            .await;

        let profile = client.account().await.unwrap();
        assert_eq!(profile.organization_name, "Acme");
        assert_eq!(profile.address.as_deref(), Some("1 Main St"));
        assert_eq!(profile.phone, Some(5_550_100));
        assert_eq!(profile.registration_id, "reg-1");
    }

    #[tokio::test]
    async fn update_account_puts_wire_field_names() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;
        let client = client_with(&server.uri());

        Mock::given(method("PUT"))
            .and(path("/account"))
            .and(body_json(json!({
                "organizationName": "Acme",
                "address": "1 Main St",
                "phone": 5550100,
                "email": "a@b.com"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "content": {}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let update = AccountUpdate {
            organization_name: "Acme".to_string(),
            address: Some("1 Main St".to_string()),
            phone: Some(5_550_100),
            email: "a@b.com".to_string(),
        };
        client.update_account(&update).await.unwrap();
    }
}

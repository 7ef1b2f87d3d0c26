//! Client helpers for current-user info, including the cached display name
//! shown in the dashboard header.

use crate::{api::Api, errors::AppError, features::me::types::UserInfo};
use std::sync::Arc;

pub struct MeClient {
    api: Arc<Api>,
}

impl MeClient {
    #[must_use]
    pub fn new(api: Arc<Api>) -> Self {
        Self { api }
    }

    /// Fetches the authenticated user's profile.
    pub async fn user_information(&self) -> Result<UserInfo, AppError> {
        self.api.get_json("/me").await
    }

    /// Returns the display name for the header. Unauthenticated sessions get
    /// `None` without a request; otherwise the cached name is used and only
    /// a cache miss hits `/me`, storing the first name in the persistent
    /// scope.
    pub async fn display_name(&self) -> Result<Option<String>, AppError> {
        if self.api.session().token().is_none() {
            // A stale cached name must not be trusted without a token.
            return Ok(None);
        }

        if let Some(name) = self.api.session().display_name() {
            return Ok(Some(name));
        }

        let info = self.user_information().await?;
        self.api.session().set_display_name(info.first_name.clone());

        Ok(Some(info.first_name))
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
    use secrecy::SecretString;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_with(server_url: &str) -> (MeClient, Arc<SessionStore>) {
        let session = Arc::new(SessionStore::new());
        let api = Api::new(
            AppConfig::new(server_url),
            Arc::clone(&session),
            Arc::new(RecordingNavigator::new()) as Arc<dyn Navigator>,
        )
        .unwrap();
        (MeClient::new(Arc::new(api)), session)
    }

    #[tokio::test]
    async fn display_name_is_fetched_once_and_cached() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;
        let (client, session) = client_with(&server.uri());
        session.set_token(SecretString::from("tok-1".to_string()));

        Mock::given(method("GET"))
            .and(path("/me"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "meta": { "params": { "indent": 0 } },
                "content": {
                    "id": "u-1",
                    "email": "a@b.com",
                    "role": "owner",
                    "firstName": "Jane",
                    "lastName": "Doe"
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        assert_eq!(client.display_name().await.unwrap(), Some("Jane".to_string()));
        // Second call is served from the persistent scope.
        assert_eq!(client.display_name().await.unwrap(), Some("Jane".to_string()));
        assert_eq!(session.display_name(), Some("Jane".to_string()));
    }

    #[tokio::test]
    async fn display_name_is_absent_without_a_token() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;
        let (client, session) = client_with(&server.uri());
        // Stale persisted name without a token is not trusted.
        session.set_display_name("Jane");

        assert_eq!(client.display_name().await.unwrap(), None);
    }
}

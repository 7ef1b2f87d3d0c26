//! HTTP core for the backend API. Feature clients use these helpers to avoid
//! duplicating request setup. Every outgoing request passes through the same
//! interceptor with no per-call opt-out: the JSON content-type marker is set,
//! the current auth token is attached as the `Authorization` credential when
//! present, and a 401 response wipes both session scopes and forces a full
//! reload at the application root. The 401 wipe is the only path by which
//! the server invalidates the session; the client never checks token expiry.
//!
//! Responses arrive in the platform envelope
//! `{ meta: { params: { indent } }, content: <payload> }`; only `content` is
//! used. No client-side timeouts are applied and no request is retried.

use crate::{
    config::AppConfig, errors::AppError, navigation::Navigator, session::SessionStore,
};
use reqwest::{
    header::{AUTHORIZATION, CONTENT_TYPE},
    Method, Response, StatusCode,
};
use secrecy::ExposeSecret;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Maximum number of error body characters surfaced to callers.
const MAX_ERROR_CHARS: usize = 200;

/// Platform response envelope; only `content` is semantically used.
#[derive(Clone, Debug, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub meta: Option<Meta>,
    pub content: T,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Meta {
    pub params: MetaParams,
}

#[derive(Clone, Debug, Deserialize)]
pub struct MetaParams {
    pub indent: u32,
}

/// Shared HTTP layer owning the session store and the host navigator.
pub struct Api {
    http: reqwest::Client,
    config: AppConfig,
    session: Arc<SessionStore>,
    navigator: Arc<dyn Navigator>,
}

impl Api {
    /// # Errors
    /// Returns an error when the underlying HTTP client cannot be built.
    pub fn new(
        config: AppConfig,
        session: Arc<SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .user_agent(APP_USER_AGENT)
            .build()
            .map_err(|err| AppError::Config(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self {
            http,
            config,
            session,
            navigator,
        })
    }

    #[must_use]
    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    #[must_use]
    pub fn navigator(&self) -> &Arc<dyn Navigator> {
        &self.navigator
    }

    /// Fetches JSON and unwraps the envelope content.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let response = self.send(Method::GET, path, None::<&()>).await?;
        handle_json_response(response).await
    }

    /// Posts JSON and unwraps the envelope content of the response.
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        let response = self.send(Method::POST, path, Some(body)).await?;
        handle_json_response(response).await
    }

    /// Posts JSON and ignores the response body.
    pub async fn post_json_empty<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), AppError> {
        let response = self.send(Method::POST, path, Some(body)).await?;
        handle_empty_response(response).await
    }

    /// Puts JSON and unwraps the envelope content of the response.
    pub async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        let response = self.send(Method::PUT, path, Some(body)).await?;
        handle_json_response(response).await
    }

    /// Puts JSON and ignores the response body.
    pub async fn put_json_empty<B: Serialize>(&self, path: &str, body: &B) -> Result<(), AppError> {
        let response = self.send(Method::PUT, path, Some(body)).await?;
        handle_empty_response(response).await
    }

    /// Deletes a resource and ignores the response body.
    pub async fn delete_empty(&self, path: &str) -> Result<(), AppError> {
        let response = self.send(Method::DELETE, path, None::<&()>).await?;
        handle_empty_response(response).await
    }

    /// Sends a bodyless OPTIONS request, used by the logout flow.
    pub async fn options_empty(&self, path: &str) -> Result<(), AppError> {
        let response = self.send(Method::OPTIONS, path, None::<&()>).await?;
        handle_empty_response(response).await
    }

    /// Builds, intercepts, and transmits one request. Header attachment
    /// happens before transmission; the 401 wipe happens after the response
    /// resolves and is a single synchronous store mutation, so concurrent
    /// requests never observe a half-cleared session.
    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Response, AppError> {
        let url = build_url(&self.config.api_base_url, path);
        debug!("request: {} {}", method, url);

        let mut request = self
            .http
            .request(method, &url)
            .header(CONTENT_TYPE, "application/json");

        if let Some(token) = self.session.token() {
            request = request.header(AUTHORIZATION, token.expose_secret());
        }

        if let Some(body) = body {
            let payload = serde_json::to_string(body)
                .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
            request = request.body(payload);
        }

        let response = request.send().await.map_err(map_request_error)?;

        if response.status() == StatusCode::UNAUTHORIZED {
            // In-memory state may still reference the rejected identity, so
            // this is a hard reset rather than a soft redirect.
            self.session.clear();
            self.navigator.reload();
        }

        Ok(response)
    }
}

/// Builds a URL from the configured base URL and the provided path.
fn build_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

fn map_request_error(err: reqwest::Error) -> AppError {
    AppError::Network(format!("Unable to reach the server: {err}"))
}

/// Parses enveloped JSON responses and surfaces HTTP errors with sanitized bodies.
async fn handle_json_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    if response.status().is_success() {
        let envelope: Envelope<T> = response
            .json()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))?;
        Ok(envelope.content)
    } else {
        Err(http_error(response).await)
    }
}

/// Handles responses whose body is not used.
async fn handle_empty_response(response: Response) -> Result<(), AppError> {
    if response.status().is_success() {
        Ok(())
    } else {
        Err(http_error(response).await)
    }
}

async fn http_error(response: Response) -> AppError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    AppError::Http {
        status,
        message: sanitize_body(body),
    }
}

/// Trims and truncates HTTP error bodies before they reach callers.
fn sanitize_body(body: String) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}

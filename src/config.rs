//! Client configuration. The API base URL comes from the environment or an
//! explicit constructor; values are trimmed and stripped of trailing slashes
//! so path joining stays predictable. Configuration values are public; do
//! not store secrets here.

use crate::errors::AppError;

const API_BASE_URL_ENV: &str = "ZOPSIO_API_BASE_URL";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_base_url: String,
}

impl AppConfig {
    /// Builds a config from an explicit base URL, normalizing it.
    #[must_use]
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: normalize_base_url(&api_base_url.into()).unwrap_or_default(),
        }
    }

    /// Loads the config from `ZOPSIO_API_BASE_URL`.
    ///
    /// # Errors
    /// Returns an error when the variable is unset or blank.
    pub fn from_env() -> Result<Self, AppError> {
        let value = std::env::var(API_BASE_URL_ENV).unwrap_or_default();
        let api_base_url = normalize_base_url(&value).ok_or_else(|| {
            AppError::Config(format!("{API_BASE_URL_ENV} is not configured."))
        })?;

        Ok(Self { api_base_url })
    }
}

fn normalize_base_url(value: &str) -> Option<String> {
    let trimmed = value.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

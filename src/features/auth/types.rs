//! Request and response payloads for the auth flows. These carry credentials
//! and approval codes, so they must never be logged.

use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Clone, Debug, Serialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// Envelope content returned by sign-in and sign-up approval.
#[derive(Clone, Debug, Deserialize)]
pub struct TokenContent {
    pub token: String,
}

/// Payload for a new account registration.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    pub email: String,
    pub organization_name: String,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApproveSignUpRequest {
    pub approve_code: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize)]
pub(crate) struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ResetPasswordRequest {
    pub password: String,
    pub reset_token: String,
}

/// Registration hand-off extracted from an approval link. Ephemeral; lives
/// only for the duration of the approval view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingApproval {
    pub registration_id: String,
    pub approve_code: String,
    pub email: String,
}

impl PendingApproval {
    /// Extracts the approval parameters from an incoming link. Returns `None`
    /// when any parameter is missing, in which case the caller bounces the
    /// visitor back to the landing page.
    #[must_use]
    pub fn from_url(url: &Url) -> Option<Self> {
        let mut registration_id = None;
        let mut approve_code = None;
        let mut email = None;

        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                "registrationId" => registration_id = Some(value.into_owned()),
                "approveCode" => approve_code = Some(value.into_owned()),
                "email" => email = Some(value.into_owned()),
                _ => {}
            }
        }

        Some(Self {
            registration_id: registration_id?,
            approve_code: approve_code?,
            email: email?,
        })
    }
}

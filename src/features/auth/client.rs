//! Client wrappers for the auth endpoints. These centralize the session
//! side effects and the follow-up navigation, keeping the flows consistent:
//! sign-in and approval store the token and move to the dashboard, logout
//! clears the session no matter what the server said, and every navigation
//! falls back to a full reload when the router rejects it.

use crate::{
    api::Api,
    errors::AuthError,
    features::auth::types::{
        ApproveSignUpRequest, ForgotPasswordRequest, NewAccount, PendingApproval,
        ResetPasswordRequest, SignInRequest, TokenContent,
    },
    navigation::{navigate_or_reload, routes},
};
use secrecy::SecretString;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::error;

/// Grace period between "approval email sent" and leaving the sign-up page.
/// UX only, not a correctness requirement.
pub const SIGNUP_REDIRECT_DELAY: Duration = Duration::from_secs(5);

pub struct AuthClient {
    api: Arc<Api>,
    signup_redirect_delay: Duration,
}

impl AuthClient {
    #[must_use]
    pub fn new(api: Arc<Api>) -> Self {
        Self {
            api,
            signup_redirect_delay: SIGNUP_REDIRECT_DELAY,
        }
    }

    /// Overrides the sign-up grace period, mainly for embedders and tests.
    #[must_use]
    pub fn with_signup_redirect_delay(mut self, delay: Duration) -> Self {
        self.signup_redirect_delay = delay;
        self
    }

    /// Signs in and stores the returned token, then moves to the dashboard.
    ///
    /// # Errors
    /// `NotFound` when the account does not exist (the backend answers 404
    /// for invalid credentials), `Other` for any other failure. No token is
    /// stored on failure.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<SecretString, AuthError> {
        let request = SignInRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let content: TokenContent = self.api.post_json("/session", &request).await?;

        let token = SecretString::from(content.token);
        self.api.session().set_token(token.clone());
        navigate_or_reload(self.api.navigator().as_ref(), routes::DASHBOARD);

        Ok(token)
    }

    /// Registers a new account. Leaves the session untouched; after the
    /// grace period the visitor is returned to the landing page.
    ///
    /// # Errors
    /// `Conflict` when the account or email already exists, `Other` for any
    /// other failure.
    pub async fn sign_up(&self, account: &NewAccount) -> Result<(), AuthError> {
        self.api.post_json_empty("/register", account).await?;

        sleep(self.signup_redirect_delay).await;
        navigate_or_reload(self.api.navigator().as_ref(), routes::LANDING);

        Ok(())
    }

    /// Exchanges an approval link plus the chosen profile for a token, then
    /// moves to the dashboard.
    ///
    /// # Errors
    /// `NotFound` or `Conflict` when the registration id and approve code
    /// pairing is invalid or already used. No token is stored on failure.
    pub async fn approve_sign_up(
        &self,
        pending: &PendingApproval,
        first_name: &str,
        last_name: &str,
        password: &str,
    ) -> Result<SecretString, AuthError> {
        let request = ApproveSignUpRequest {
            approve_code: pending.approve_code.clone(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: pending.email.clone(),
            password: password.to_string(),
        };
        let path = format!("/register/{}", pending.registration_id);
        let content: TokenContent = self.api.put_json(&path, &request).await?;

        let token = SecretString::from(content.token);
        self.api.session().set_token(token.clone());
        navigate_or_reload(self.api.navigator().as_ref(), routes::DASHBOARD);

        Ok(token)
    }

    /// Best-effort logout. The session is cleared and the visitor returned
    /// to the landing page regardless of the server response; a failed
    /// logout call is only logged.
    pub async fn request_logout(&self) {
        if let Err(err) = self.api.options_empty("/session/logout").await {
            error!("logout request failed: {err}");
        }

        self.api.session().clear();
        navigate_or_reload(self.api.navigator().as_ref(), routes::LANDING);
    }

    /// Pure read of token presence. Redirects to sign-in before returning
    /// `false`.
    #[must_use]
    pub fn check_authenticated(&self) -> bool {
        if self.api.session().token().is_some() {
            return true;
        }

        navigate_or_reload(self.api.navigator().as_ref(), routes::SIGN_IN);
        false
    }

    /// Bounces an already-authenticated visitor from an entry page (sign-in,
    /// sign-up, approval) to the dashboard. Returns whether the bounce
    /// happened.
    #[must_use]
    pub fn redirect_if_authenticated(&self) -> bool {
        if self.api.session().token().is_none() {
            return false;
        }

        navigate_or_reload(self.api.navigator().as_ref(), routes::DASHBOARD);
        true
    }

    /// Requests a password-reset email.
    ///
    /// # Errors
    /// `NotFound` when the account does not exist, `Other` otherwise.
    pub async fn forgot_password(&self, email: &str) -> Result<(), AuthError> {
        let request = ForgotPasswordRequest {
            email: email.to_string(),
        };
        self.api.post_json_empty("/forgot-password", &request).await?;
        Ok(())
    }

    /// Submits a new password with the reset token from the emailed link.
    ///
    /// # Errors
    /// `NotFound` when the reset token is unknown, `Other` otherwise.
    pub async fn reset_password(&self, password: &str, reset_token: &str) -> Result<(), AuthError> {
        let request = ResetPasswordRequest {
            password: password.to_string(),
            reset_token: reset_token.to_string(),
        };
        self.api.put_json_empty("/reset-password", &request).await?;
        Ok(())
    }
}

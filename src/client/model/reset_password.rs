use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    client::{
        api::{
            transport::{HttpTransport, TokenStore},
            ApiClient,
        },
        constant::MIN_PASSWORD_LENGTH,
    },
    model::auth::ForgotPasswordDto,
};

/// Client-side rejection of the reset form, checked before any request is made.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum FormError {
    #[error("Email is required")]
    MissingEmail,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Password must be at least {} characters long", MIN_PASSWORD_LENGTH)]
    PasswordTooShort,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResetPasswordForm {
    pub email: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl ResetPasswordForm {
    /// Checks the form and builds the request payload.
    ///
    /// Order matters for the message shown: a missing email is reported first,
    /// then a mismatch, then the length rule. Length counts characters, not bytes.
    pub fn validate(&self) -> Result<ForgotPasswordDto, FormError> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err(FormError::MissingEmail);
        }

        if self.new_password != self.confirm_password {
            return Err(FormError::PasswordMismatch);
        }

        if self.new_password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(FormError::PasswordTooShort);
        }

        Ok(ForgotPasswordDto {
            email: email.to_string(),
            new_password: self.new_password.clone(),
        })
    }
}

/// What the reset page shows.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ResetView {
    /// Empty or in-progress form, no message.
    #[default]
    Form,
    /// Form with an inline error.
    Error(String),
    /// Request accepted for `email`.
    Success { email: String },
}

impl ResetView {
    pub fn error(&self) -> Option<&str> {
        match self {
            ResetView::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ResetView::Success { .. })
    }
}

/// Outcome of pressing submit on the reset page.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitAction {
    /// A request is already in flight; the press is dropped.
    Ignore,
    /// Validation failed; show this view without sending anything.
    Show(ResetView),
    /// Start a request for this form.
    Send(ResetPasswordForm),
}

/// Decides what a submit press does given whether a request is in flight.
///
/// At most one request runs at a time, so any press while `in_flight` is
/// ignored, even when the form would fail validation.
pub fn begin_submit(in_flight: bool, form: &ResetPasswordForm) -> SubmitAction {
    if in_flight {
        return SubmitAction::Ignore;
    }

    match form.validate() {
        Ok(_) => SubmitAction::Send(form.clone()),
        Err(err) => SubmitAction::Show(ResetView::Error(err.to_string())),
    }
}

/// Validates `form` and, when it passes, asks the backend to reset the password.
///
/// Validation failures return without touching the network.
///
/// # Returns
/// - `ResetView::Success` - Backend accepted the reset; carries the submitted email
/// - `ResetView::Error` - Validation or request failed; carries the message to display
pub async fn submit<T, S>(client: &ApiClient<T, S>, form: &ResetPasswordForm) -> ResetView
where
    T: HttpTransport,
    S: TokenStore,
{
    let payload = match form.validate() {
        Ok(payload) => payload,
        Err(err) => return ResetView::Error(err.to_string()),
    };

    match client.forgot_password(&payload).await {
        Ok(_) => {
            tracing::info!(email = %payload.email, "Password reset requested");
            ResetView::Success {
                email: payload.email,
            }
        }
        Err(err) => {
            tracing::error!("Failed to reset password: {}", err);
            ResetView::Error(err.to_string())
        }
    }
}

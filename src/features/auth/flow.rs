//! Token-gated request flow shared by the password reset and email
//! verification pages. A page reads its token once, issues at most one request
//! and projects the outcome onto a terminal [`FlowStatus`]. Side effects (toasts
//! and the delayed redirect to the login page) go through the [`Notifier`] and
//! [`Redirector`] seams so the flow runs the same in the browser and in tests.
//!
//! Flow Overview: `Pending -> Success(message)` raises one success toast and
//! schedules `/login`; `Pending -> Error(message)` raises one error toast and
//! never redirects. Requests are neither retried nor cancelled.

use super::password::{CredentialError, CredentialInput, ResetSubmission, validate_reset};
use super::token::VerificationToken;
use super::types::{MessageResponse, ResetPasswordRequest};
use crate::app_lib::{AppError, paths};
use secrecy::ExposeSecret;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Redirect target after a successful flow.
pub const LOGIN_PATH: &str = paths::LOGIN;
/// Delay before leaving the reset page after success.
pub const RESET_REDIRECT_DELAY_MS: u32 = 2_000;
/// Delay before leaving the verification page after success.
pub const VERIFY_REDIRECT_DELAY_MS: u32 = 3_000;

/// Which token flow is running.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlowKind {
    VerifyEmail,
    ResetPassword,
}

impl FlowKind {
    fn name(self) -> &'static str {
        match self {
            FlowKind::VerifyEmail => "verify_email",
            FlowKind::ResetPassword => "reset_password",
        }
    }

    /// Shown when the backend succeeds without a message.
    pub fn default_success(self) -> &'static str {
        match self {
            FlowKind::VerifyEmail => "Email verified successfully!",
            FlowKind::ResetPassword => "Password reset successfully!",
        }
    }

    /// Shown when the backend fails without a message.
    pub fn failure_fallback(self) -> &'static str {
        match self {
            FlowKind::VerifyEmail => {
                "Email verification failed. The link may be invalid or expired."
            }
            FlowKind::ResetPassword => {
                "Failed to reset password. The link may be invalid or expired."
            }
        }
    }

    pub fn redirect_delay_ms(self) -> u32 {
        match self {
            FlowKind::VerifyEmail => VERIFY_REDIRECT_DELAY_MS,
            FlowKind::ResetPassword => RESET_REDIRECT_DELAY_MS,
        }
    }
}

/// Presentation state of a page. `Pending` is the only non-terminal state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FlowStatus {
    Pending,
    Success(String),
    Error(String),
}

impl From<FlowError> for FlowStatus {
    fn from(err: FlowError) -> Self {
        FlowStatus::Error(err.to_string())
    }
}

/// Why a flow ended in the error state.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FlowError {
    #[error("Verification token not found. Please check your email link.")]
    MissingToken,
    #[error("{0}")]
    RequestFailed(String),
}

/// What the reset page renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResetView {
    /// No token in the link; offer to request a new one.
    MissingToken,
    Form,
    Pending,
    Success(String),
    Error(String),
}

impl ResetView {
    /// Projects the page state. A missing token wins over any status.
    pub fn project(token: Option<&VerificationToken>, status: Option<&FlowStatus>) -> Self {
        if token.is_none() {
            return ResetView::MissingToken;
        }
        match status {
            None => ResetView::Form,
            Some(FlowStatus::Pending) => ResetView::Pending,
            Some(FlowStatus::Success(message)) => ResetView::Success(message.clone()),
            Some(FlowStatus::Error(message)) => ResetView::Error(message.clone()),
        }
    }
}

/// Backend calls the flows depend on.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    async fn verify_email(&self, token: &VerificationToken) -> Result<MessageResponse, AppError>;

    async fn reset_password(
        &self,
        token: &VerificationToken,
        request: &ResetPasswordRequest,
    ) -> Result<MessageResponse, AppError>;
}

/// User-visible notification channel (toasts).
pub trait Notifier {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Schedules a one-shot navigation. Implementations must not cancel it when
/// the page unmounts.
pub trait Redirector {
    fn redirect_after(&self, path: &'static str, delay_ms: u32);
}

/// Runs the token flows against the given collaborators.
#[derive(Clone)]
pub struct TokenFlow<A, N, R> {
    api: A,
    notifier: N,
    redirector: R,
}

impl<A, N, R> TokenFlow<A, N, R>
where
    A: AuthApi,
    N: Notifier,
    R: Redirector,
{
    pub fn new(api: A, notifier: N, redirector: R) -> Self {
        Self {
            api,
            notifier,
            redirector,
        }
    }

    /// Verifies an email address. Without a token no request is made and the
    /// status is the missing-token error.
    pub async fn verify_email(&self, token: Option<&VerificationToken>) -> FlowStatus {
        let Some(token) = token else {
            info!(flow = FlowKind::VerifyEmail.name(), "no token in link");
            return FlowError::MissingToken.into();
        };

        debug!(flow = FlowKind::VerifyEmail.name(), "sending verification request");
        let result = self.api.verify_email(token).await;
        self.settle(FlowKind::VerifyEmail, result)
    }

    /// Validates the reset form. On failure the reason is raised as an error
    /// toast and no request may be sent.
    pub fn check_reset(
        &self,
        token: Option<&VerificationToken>,
        input: &CredentialInput,
    ) -> Result<ResetSubmission, CredentialError> {
        validate_reset(token, input).inspect_err(|err| {
            debug!(flow = FlowKind::ResetPassword.name(), reason = ?err, "reset form rejected");
            self.notifier.error(&err.to_string());
        })
    }

    /// Sends a validated reset.
    pub async fn reset_password(&self, submission: &ResetSubmission) -> FlowStatus {
        debug!(flow = FlowKind::ResetPassword.name(), "sending reset request");
        let request = ResetPasswordRequest {
            password: submission.password.expose_secret().to_string(),
        };
        let result = self.api.reset_password(&submission.token, &request).await;
        self.settle(FlowKind::ResetPassword, result)
    }

    fn settle(&self, kind: FlowKind, result: Result<MessageResponse, AppError>) -> FlowStatus {
        match result {
            Ok(response) => {
                let message = response
                    .text()
                    .unwrap_or(kind.default_success())
                    .to_string();
                info!(
                    flow = kind.name(),
                    delay_ms = kind.redirect_delay_ms(),
                    "token flow succeeded"
                );
                self.notifier.success(&message);
                self.redirector.redirect_after(LOGIN_PATH, kind.redirect_delay_ms());
                FlowStatus::Success(message)
            }
            Err(err) => {
                let status = match &err {
                    AppError::Http { status, .. } => Some(*status),
                    _ => None,
                };
                warn!(flow = kind.name(), status = ?status, "token flow failed");
                let err = FlowError::RequestFailed(
                    err.server_message()
                        .unwrap_or(kind.failure_fallback())
                        .to_string(),
                );
                self.notifier.error(&err.to_string());
                err.into()
            }
        }
    }
}

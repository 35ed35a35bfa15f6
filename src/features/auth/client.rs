//! HTTP client for the token-gated auth endpoints. Tokens travel as a single
//! percent-encoded path segment and must never be logged.

use crate::{
    app_lib::{AppError, api::encode_path_segment, get_json, post_json},
    features::auth::{
        flow::AuthApi,
        recovery::LinkKind,
        token::VerificationToken,
        types::{LinkRequest, MessageResponse, ResetPasswordRequest},
    },
};

/// `AuthApi` backed by the configured API base URL.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpAuthClient;

impl AuthApi for HttpAuthClient {
    /// Confirms an email address after the user follows the link.
    async fn verify_email(&self, token: &VerificationToken) -> Result<MessageResponse, AppError> {
        let path = format!("/auth/verify-email/{}", encode_path_segment(token.as_str()));
        get_json(&path).await
    }

    /// Sets a new password for the account the token was issued to.
    async fn reset_password(
        &self,
        token: &VerificationToken,
        request: &ResetPasswordRequest,
    ) -> Result<MessageResponse, AppError> {
        let path = format!("/auth/reset-password/{}", encode_path_segment(token.as_str()));
        post_json(&path, request).await
    }
}

/// Asks the API to email a fresh link. The response does not reveal whether
/// the address belongs to an account.
pub async fn request_link(
    kind: LinkKind,
    request: &LinkRequest,
) -> Result<MessageResponse, AppError> {
    post_json(kind.endpoint(), request).await
}

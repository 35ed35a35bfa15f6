//! Requests for a fresh token link: a new password reset email, or a new
//! verification email. This is the manual recovery path once a link has
//! expired. The API answers the same way whether or not the account exists, so
//! the UI shows one neutral confirmation.

use thiserror::Error;

/// Confirmation shown after any accepted request.
pub const LINK_SENT_MESSAGE: &str = "If that email exists, a new link is on the way.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkKind {
    PasswordReset,
    EmailVerification,
}

impl LinkKind {
    pub fn endpoint(self) -> &'static str {
        match self {
            LinkKind::PasswordReset => "/auth/forgot-password",
            LinkKind::EmailVerification => "/auth/resend-verification",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            LinkKind::PasswordReset => "Send reset link",
            LinkKind::EmailVerification => "Resend verification",
        }
    }
}

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Email is required.")]
    Missing,
    #[error("Email address looks invalid.")]
    Invalid,
}

/// Trims and lowercases an email, rejecting values that cannot be addresses.
pub fn normalize_email(raw: &str) -> Result<String, EmailError> {
    let email = raw.trim().to_lowercase();
    if email.is_empty() {
        return Err(EmailError::Missing);
    }

    match email.split_once('@') {
        Some((local, domain))
            if !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.contains(char::is_whitespace) =>
        {
            Ok(email)
        }
        _ => Err(EmailError::Invalid),
    }
}

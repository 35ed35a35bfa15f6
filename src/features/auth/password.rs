//! Client-side credential checks for the reset form. They give early feedback
//! only; the API enforces the real password policy. Password values are never
//! logged: form input has a redacting `Debug` impl and a validated password is
//! held as a `SecretString`.

use super::token::VerificationToken;
use secrecy::{ExposeSecret, SecretString};
use std::fmt;
use thiserror::Error;

/// Minimum password length enforced by the client for early UX feedback.
pub const MIN_PASSWORD_LENGTH: usize = 6;
/// Length from which the strength meter stops calling a password weak.
const MEDIUM_LENGTH: usize = 8;
/// Length required, together with an uppercase letter and a digit, for "strong".
const STRONG_LENGTH: usize = 10;

/// The two password fields of the reset form.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CredentialInput {
    pub password: String,
    pub confirmation: String,
}

impl fmt::Debug for CredentialInput {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("CredentialInput")
            .field("password_len", &self.password.chars().count())
            .field("confirmation_len", &self.confirmation.chars().count())
            .finish()
    }
}

/// A validated reset ready to be sent.
#[derive(Debug)]
pub struct ResetSubmission {
    pub token: VerificationToken,
    pub password: SecretString,
}

impl Clone for ResetSubmission {
    fn clone(&self) -> Self {
        Self {
            token: self.token.clone(),
            password: SecretString::from(self.password.expose_secret().to_owned()),
        }
    }
}

/// Reasons the reset form refuses to submit. Each is shown as a toast and the
/// form stays editable.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum CredentialError {
    #[error("Please fill in all fields.")]
    EmptyFields,
    #[error("Password must be at least {min} characters.")]
    TooShort { min: usize },
    #[error("Passwords do not match.")]
    Mismatch,
    #[error("Invalid or missing reset token.")]
    MissingToken,
}

/// Checks the reset form in order: non-empty, minimum length, match, token.
/// The first failing rule wins.
pub fn validate_reset(
    token: Option<&VerificationToken>,
    input: &CredentialInput,
) -> Result<ResetSubmission, CredentialError> {
    if input.password.is_empty() || input.confirmation.is_empty() {
        return Err(CredentialError::EmptyFields);
    }

    if input.password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(CredentialError::TooShort {
            min: MIN_PASSWORD_LENGTH,
        });
    }

    if input.password != input.confirmation {
        return Err(CredentialError::Mismatch);
    }

    let token = token.ok_or(CredentialError::MissingToken)?;

    Ok(ResetSubmission {
        token: token.clone(),
        password: SecretString::from(input.password.clone()),
    })
}

/// Display-only strength tier. It never affects whether the form submits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    /// Rates a password; `None` for an empty field so no meter is shown.
    pub fn evaluate(password: &str) -> Option<Self> {
        if password.is_empty() {
            return None;
        }

        let length = password.chars().count();
        let has_upper = password.chars().any(char::is_uppercase);
        let has_digit = password.chars().any(|c| c.is_ascii_digit());

        let strength = if length < MIN_PASSWORD_LENGTH {
            PasswordStrength::Weak
        } else if length >= STRONG_LENGTH && has_upper && has_digit {
            PasswordStrength::Strong
        } else if length >= MEDIUM_LENGTH || has_upper || has_digit {
            PasswordStrength::Medium
        } else {
            PasswordStrength::Weak
        };

        Some(strength)
    }

    pub fn label(self) -> &'static str {
        match self {
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Medium => "Medium",
            PasswordStrength::Strong => "Strong",
        }
    }

    /// Width of the meter bar, in percent.
    pub fn fill_percent(self) -> u8 {
        match self {
            PasswordStrength::Weak => 33,
            PasswordStrength::Medium => 66,
            PasswordStrength::Strong => 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{
        CredentialError, CredentialInput, MIN_PASSWORD_LENGTH, PasswordStrength, validate_reset,
    };
    use crate::features::auth::token::VerificationToken;
    use secrecy::ExposeSecret;

    fn input(password: &str, confirmation: &str) -> CredentialInput {
        CredentialInput {
            password: password.to_string(),
            confirmation: confirmation.to_string(),
        }
    }

    fn token() -> VerificationToken {
        VerificationToken::new("tok").expect("token")
    }

    #[test]
    fn empty_fields_are_rejected_first() {
        let token = token();
        assert_eq!(
            validate_reset(Some(&token), &input("", "")).err(),
            Some(CredentialError::EmptyFields)
        );
        assert_eq!(
            validate_reset(Some(&token), &input("secret1", "")).err(),
            Some(CredentialError::EmptyFields)
        );
        // Empty wins over the missing token.
        assert_eq!(
            validate_reset(None, &input("", "secret1")).err(),
            Some(CredentialError::EmptyFields)
        );
    }

    #[test]
    fn short_passwords_are_rejected_before_mismatch() {
        let token = token();
        for password in ["a", "abcde", "ñññññ"] {
            assert_eq!(
                validate_reset(Some(&token), &input(password, "different")).err(),
                Some(CredentialError::TooShort {
                    min: MIN_PASSWORD_LENGTH
                }),
                "password {password:?}"
            );
        }
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let token = token();
        // Six characters, twelve bytes.
        let password = "ññññññ";
        assert!(validate_reset(Some(&token), &input(password, password)).is_ok());
    }

    #[test]
    fn mismatch_is_rejected() {
        let token = token();
        assert_eq!(
            validate_reset(Some(&token), &input("secret1", "secret2")).err(),
            Some(CredentialError::Mismatch)
        );
    }

    #[test]
    fn missing_token_is_checked_last() {
        assert_eq!(
            validate_reset(None, &input("secret1", "secret1")).err(),
            Some(CredentialError::MissingToken)
        );
    }

    #[test]
    fn valid_input_yields_submission() {
        let token = token();
        let submission =
            validate_reset(Some(&token), &input("secret1", "secret1")).expect("valid input");
        assert_eq!(submission.token, token);
        assert_eq!(submission.password.expose_secret(), "secret1");
    }

    #[test]
    fn error_messages_are_user_facing() {
        assert_eq!(
            CredentialError::TooShort { min: 6 }.to_string(),
            "Password must be at least 6 characters."
        );
        assert_eq!(
            CredentialError::Mismatch.to_string(),
            "Passwords do not match."
        );
    }

    #[test]
    fn debug_never_prints_passwords() {
        let rendered = format!("{:?}", input("hunter22", "hunter22"));
        assert!(!rendered.contains("hunter22"));
        let submission = validate_reset(Some(&token()), &input("hunter22", "hunter22"))
            .expect("valid input");
        assert!(!format!("{submission:?}").contains("hunter22"));
    }

    #[test]
    fn strength_tiers() {
        assert_eq!(PasswordStrength::evaluate(""), None);
        assert_eq!(PasswordStrength::evaluate("abc"), Some(PasswordStrength::Weak));
        assert_eq!(PasswordStrength::evaluate("ABC12"), Some(PasswordStrength::Weak));
        assert_eq!(PasswordStrength::evaluate("abcdef"), Some(PasswordStrength::Weak));
        assert_eq!(PasswordStrength::evaluate("abcde1"), Some(PasswordStrength::Medium));
        assert_eq!(PasswordStrength::evaluate("Abcdef"), Some(PasswordStrength::Medium));
        assert_eq!(PasswordStrength::evaluate("abcdefgh"), Some(PasswordStrength::Medium));
        assert_eq!(
            PasswordStrength::evaluate("abcdefghij"),
            Some(PasswordStrength::Medium)
        );
        assert_eq!(
            PasswordStrength::evaluate("Abcdefghi1"),
            Some(PasswordStrength::Strong)
        );
    }

    #[test]
    fn strength_does_not_gate_submission() {
        // A weak-but-valid password still submits.
        let token = token();
        assert_eq!(PasswordStrength::evaluate("abcdef"), Some(PasswordStrength::Weak));
        assert!(validate_reset(Some(&token), &input("abcdef", "abcdef")).is_ok());
    }
}

//! Request and response types for the token-gated auth endpoints. The reset
//! request carries a plaintext password, so it has no `Debug` impl and must
//! never be logged.

use serde::{Deserialize, Serialize};

/// Body of `POST /auth/reset-password/{token}`.
#[derive(Clone, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    pub password: String,
}

/// Body of the link request endpoints (`forgot-password`, `resend-verification`).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LinkRequest {
    pub email: String,
}

/// Response of the token and link request endpoints; the backend may omit `message`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageResponse {
    pub message: Option<String>,
}

impl MessageResponse {
    /// Returns the server message when it carries visible text.
    pub fn text(&self) -> Option<&str> {
        self.message
            .as_deref()
            .map(str::trim)
            .filter(|message| !message.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::{MessageResponse, ResetPasswordRequest};

    #[test]
    fn reset_request_serializes_password_only() {
        let request = ResetPasswordRequest {
            password: "hunter22".to_string(),
        };
        let json = serde_json::to_string(&request).expect("Failed to serialize");
        assert_eq!(json, r#"{"password":"hunter22"}"#);
    }

    #[test]
    fn message_response_tolerates_missing_and_blank_message() {
        let empty: MessageResponse = serde_json::from_str("{}").expect("Failed to deserialize");
        assert_eq!(empty.text(), None);

        let blank: MessageResponse =
            serde_json::from_str(r#"{"message":"  "}"#).expect("Failed to deserialize");
        assert_eq!(blank.text(), None);

        let full: MessageResponse =
            serde_json::from_str(r#"{"message":"OK","extra":1}"#).expect("Failed to deserialize");
        assert_eq!(full.text(), Some("OK"));
    }
}

use std::fmt;

/// Transport-level failures shared by every API helper.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    Network(String),
    /// Non-2xx response. `message` is only set when the backend returned a
    /// JSON body with a human-readable `message` field.
    Http {
        status: u16,
        message: Option<String>,
    },
    Parse(String),
    Serialization(String),
}

impl AppError {
    /// Returns the backend-supplied message, if the server sent one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            AppError::Http {
                message: Some(message),
                ..
            } => Some(message.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Http {
                status,
                message: Some(message),
            } => write!(formatter, "Request failed ({status}): {message}"),
            AppError::Http {
                status,
                message: None,
            } => write!(formatter, "Request failed ({status})"),
            AppError::Parse(message) => write!(formatter, "Response error: {message}"),
            AppError::Serialization(message) => {
                write!(formatter, "Request error: {message}")
            }
        }
    }
}

impl std::error::Error for AppError {}

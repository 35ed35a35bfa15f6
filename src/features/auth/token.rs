use crate::app_lib::location::token_from_query;
use std::fmt;

/// Opaque token taken from a reset or verification link. Only presence
/// matters client-side; the value is forwarded to the API untouched.
#[derive(Clone, PartialEq, Eq)]
pub struct VerificationToken(String);

impl VerificationToken {
    /// Wraps a raw value, rejecting blank strings.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            None
        } else {
            Some(Self(value))
        }
    }

    /// Reads the token from a location query string.
    pub fn from_query(search: &str) -> Option<Self> {
        token_from_query(search).and_then(Self::new)
    }

    /// Reads the token from the current page location.
    #[cfg(target_arch = "wasm32")]
    pub fn from_location() -> Option<Self> {
        crate::app_lib::location::current_search().and_then(|search| Self::from_query(&search))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for VerificationToken {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("VerificationToken(<redacted>)")
    }
}

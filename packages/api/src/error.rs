//! Client-side error taxonomy.
//!
//! Every failure a page can see is one of these. `Display` is the message the
//! user is shown in a toast or inline error, so variants that carry a server
//! message print it unchanged.

use thiserror::Error;

pub const CONNECTIVITY_MESSAGE: &str =
    "Unable to reach the server. Please check your connection and try again.";
pub const MALFORMED_MESSAGE: &str = "Unexpected response from the server. Please try again.";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// No response was received.
    #[error("{}", CONNECTIVITY_MESSAGE)]
    Network(String),

    /// A response arrived with a failure status or `success: false`.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// A success status whose body lacked the expected fields.
    #[error("{}", MALFORMED_MESSAGE)]
    Malformed(String),

    /// HTTP 401.
    #[error("{0}")]
    Unauthorized(String),

    /// Rejected locally before any request was made.
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_))
    }

    /// Underlying detail for logs (not shown to users).
    pub fn detail(&self) -> &str {
        match self {
            ApiError::Network(d) | ApiError::Malformed(d) => d,
            ApiError::Rejected { message, .. } => message,
            ApiError::Unauthorized(m) | ApiError::Validation(m) => m,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Malformed(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

pub type Result<T, E = ApiError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        assert_eq!(
            ApiError::Network("connection refused".into()).to_string(),
            CONNECTIVITY_MESSAGE
        );
        assert_eq!(
            ApiError::Rejected { status: 409, message: "Email already registered".into() }.to_string(),
            "Email already registered"
        );
        assert_eq!(ApiError::Malformed("no token".into()).to_string(), MALFORMED_MESSAGE);
        assert_eq!(ApiError::Malformed("no token".into()).detail(), "no token");
        assert!(ApiError::Unauthorized("expired".into()).is_unauthorized());
    }
}

//! Authentication payloads: form input, wire requests and the response envelope.

use serde::{Deserialize, Serialize};

use super::user::{Role, User};
use crate::error::ApiError;

/// Login form payload, also sent verbatim to `POST /api/auth/login`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Registration form state as the user entered it.
///
/// `role` holds the form's option value (`"STUDENT"` / `"ALUMNI"`) and
/// `graduation_year` the raw text field; both are translated by
/// [`crate::validation::validate_registration`] before anything is sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterInput {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub graduation_year: String,
}

/// Body of `POST /api/auth/signup`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graduation_year: Option<u16>,
}

/// `{ token, refreshToken, user }` inside a successful auth response.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuthData {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

/// Response of `/api/auth/signup` and `/api/auth/login`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct AuthEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<AuthData>,
}

/// A successful authentication reduced to the fields the session needs.
#[derive(Debug, Clone, PartialEq)]
pub struct Authenticated {
    pub token: String,
    pub refresh_token: Option<String>,
    pub user: User,
}

impl AuthEnvelope {
    /// Check the envelope and pull out the session fields.
    ///
    /// `success: false` is a server rejection carrying the server's message;
    /// `success: true` without a token or user is a malformed response.
    pub fn into_authenticated(self, fallback: &str) -> Result<Authenticated, ApiError> {
        if !self.success {
            return Err(ApiError::Rejected {
                status: 200,
                message: self
                    .message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| fallback.to_string()),
            });
        }
        let data = self
            .data
            .ok_or_else(|| ApiError::Malformed("response has no data".into()))?;
        let token = data
            .token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ApiError::Malformed("response has no token".into()))?;
        let user = data
            .user
            .ok_or_else(|| ApiError::Malformed("response has no user".into()))?;
        Ok(Authenticated {
            token,
            refresh_token: data.refresh_token.filter(|t| !t.is_empty()),
            user,
        })
    }
}

/// Response of `GET /api/auth/profile`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ProfileResponse {
    pub user: User,
}

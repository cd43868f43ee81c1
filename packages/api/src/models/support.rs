use serde::{Deserialize, Serialize};

/// Contact form body for `POST /api/auth/support`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SupportRequest {
    pub first_name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Generic `{ success, message }` acknowledgement.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct MessageResponse {
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

fn default_success() -> bool {
    true
}

//! # User record
//!
//! [`User`] mirrors the backend's user JSON verbatim. The client never edits
//! one in place; a fresher copy from the server replaces it wholesale.
//!
//! - `id` also accepts `_id`, which some backend routes emit.
//! - `role` accepts any casing (`"student"`, `"STUDENT"`), serializes lowercase.
//! - `isVerified` / `isActive` are optional and only present on some routes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Platform role of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Student,
    Alumni,
    Admin,
}

impl Role {
    /// Lowercase wire form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Alumni => "alumni",
            Role::Admin => "admin",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Alumni => "Alumni",
            Role::Admin => "Admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "student" => Ok(Role::Student),
            "alumni" => Ok(Role::Alumni),
            "admin" => Ok(Role::Admin),
            other => Err(format!("Unknown role: {other}")),
        }
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// User information as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(alias = "_id")]
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_verified: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl User {
    /// Full name, falling back to the email address when both names are empty.
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let full = full.trim();
        if full.is_empty() {
            self.email.clone()
        } else {
            full.to_string()
        }
    }

    /// Up to two uppercase initials for avatar placeholders.
    pub fn initials(&self) -> String {
        let initials: String = [&self.first_name, &self.last_name]
            .iter()
            .filter_map(|n| n.trim().chars().next())
            .flat_map(char::to_uppercase)
            .collect();
        if initials.is_empty() {
            self.email
                .chars()
                .next()
                .map(|c| c.to_uppercase().collect())
                .unwrap_or_default()
        } else {
            initials
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_backend_user() {
        let user: User = serde_json::from_value(json!({
            "_id": "u1",
            "email": "a@b.com",
            "firstName": "Ada",
            "lastName": "Lovelace",
            "role": "ALUMNI",
            "isVerified": true
        }))
        .unwrap();

        assert_eq!(user.id, "u1");
        assert_eq!(user.role, Role::Alumni);
        assert_eq!(user.is_verified, Some(true));
        assert_eq!(user.is_active, None);
        assert_eq!(user.display_name(), "Ada Lovelace");
        assert_eq!(user.initials(), "AL");
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let result: Result<User, _> = serde_json::from_value(json!({
            "id": "u1",
            "email": "a@b.com",
            "role": "professor"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_value(Role::Student).unwrap(), json!("student"));
        assert_eq!(" Admin ".parse::<Role>().unwrap(), Role::Admin);
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let user = User {
            id: "u2".into(),
            email: "x@y.org".into(),
            first_name: "".into(),
            last_name: " ".into(),
            role: Role::Student,
            is_verified: None,
            is_active: None,
        };
        assert_eq!(user.display_name(), "x@y.org");
        assert_eq!(user.initials(), "X");
    }
}

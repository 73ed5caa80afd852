//! # Account models
//!
//! Request bodies for `POST /sessions` and `POST /users`, the token the
//! server hands back, and the [`Profile`] returned by `GET /profile`
//! (wrapped as `{ "user": ... }` on the wire).

use serde::{Deserialize, Serialize};

/// Credentials sent to `POST /sessions`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthenticateRequest {
    pub email: String,
    pub password: String,
}

/// Body returned by `POST /sessions`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthenticateResponse {
    pub token: String,
}

/// New account sent to `POST /users`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// The signed-in user as reported by `GET /profile`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub experience: f64,
    pub created_at: String,
}

impl Profile {
    /// Get display name, falling back to email if name is blank.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProfileResponse {
    pub user: Profile,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_decodes_snake_case_timestamp() {
        let body = r#"{"user":{"name":"Ana","email":"ana@example.com","experience":12.5,"created_at":"2024-05-01T10:00:00.000Z"}}"#;
        let parsed: ProfileResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.user.name, "Ana");
        assert_eq!(parsed.user.experience, 12.5);
        assert_eq!(parsed.user.created_at, "2024-05-01T10:00:00.000Z");
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let profile = Profile {
            name: " ".to_string(),
            email: "ana@example.com".to_string(),
            experience: 0.0,
            created_at: String::new(),
        };
        assert_eq!(profile.display_name(), "ana@example.com");
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// Credentials: login request body
// ---------------------------------------------------------------------------

#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

// ---------------------------------------------------------------------------
// AuthResult: login response body, passed through as the server sent it
// ---------------------------------------------------------------------------

/// Decoded login response.
///
/// Only the commonly used fields are typed; anything else the server sends
/// is kept in `extra` so the body survives a round trip unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AuthResult {
    /// Whether the server accepted the credentials.
    ///
    /// An explicit `success` flag wins. Without one, a token or role in the
    /// body counts as acceptance.
    pub fn is_success(&self) -> bool {
        match self.success {
            Some(flag) => flag,
            None => {
                self.token.as_deref().is_some_and(|t| !t.is_empty())
                    || self.role.as_deref().is_some_and(|r| !r.is_empty())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unknown_fields_survive_round_trip() {
        let body = json!({
            "success": true,
            "token": "fake-jwt-token",
            "user": {"id": 1, "username": "testuser"},
            "expires_in": 3600
        });
        let result: AuthResult = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(result.extra["expires_in"], 3600);
        assert_eq!(serde_json::to_value(&result).unwrap(), body);
    }

    #[test]
    fn explicit_failure_flag_wins_over_token() {
        let result: AuthResult =
            serde_json::from_value(json!({"success": false, "token": "x"})).unwrap();
        assert!(!result.is_success());
    }

    #[test]
    fn role_without_flag_counts_as_success() {
        let result: AuthResult = serde_json::from_value(json!({"role": "admin"})).unwrap();
        assert!(result.is_success());
        assert!(!AuthResult::default().is_success());
    }

    #[test]
    fn debug_redacts_password() {
        let rendered = format!("{:?}", Credentials::new("testuser", "hunter2"));
        assert!(rendered.contains("testuser"));
        assert!(!rendered.contains("hunter2"));
    }
}

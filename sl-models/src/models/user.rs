//! User record model.

use serde::{Deserialize, Serialize};
use sl_core::error::{SlError, SlResult};

/// Role stored on a user record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Client,
    Contractor,
}

impl Role {
    /// Parse a role label from the backend. Unknown labels map to
    /// `Contractor`; only `admin` carries privileges, so the fallback
    /// stays non-privileged.
    pub fn from_label(label: &str) -> Self {
        match label {
            "admin" => Role::Admin,
            "client" => Role::Client,
            _ => Role::Contractor,
        }
    }

    /// The backend label for this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Client => "client",
            Role::Contractor => "contractor",
        }
    }
}

/// A platform user.
///
/// At most one device push token is stored per user; users with no token
/// are simply excluded from push delivery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: Option<String>,
    pub name: Option<String>,
    pub role: Role,
    pub push_token: Option<String>,
}

impl User {
    /// Build a User from a backend JSON map.
    pub fn from_json(map: &serde_json::Value) -> SlResult<Self> {
        let id = map
            .get("id")
            .and_then(|v| v.as_str())
            .ok_or_else(|| SlError::Serialization("user record missing id".into()))?;

        let role = map
            .get("role")
            .and_then(|v| v.as_str())
            .map(Role::from_label)
            .unwrap_or(Role::Contractor);

        Ok(Self {
            id: id.to_string(),
            email: map.get("email").and_then(|v| v.as_str()).map(String::from),
            name: map.get("name").and_then(|v| v.as_str()).map(String::from),
            role,
            push_token: map
                .get("pushToken")
                .and_then(|v| v.as_str())
                .map(String::from),
        })
    }

    /// Whether this user holds the admin role.
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_from_json() {
        let json = serde_json::json!({
            "id": "u1",
            "email": "alice@example.com",
            "role": "admin",
            "pushToken": "ExponentPushToken[abc]"
        });
        let user = User::from_json(&json).unwrap();
        assert_eq!(user.id, "u1");
        assert!(user.is_admin());
        assert_eq!(user.push_token.as_deref(), Some("ExponentPushToken[abc]"));
    }

    #[test]
    fn test_user_missing_id() {
        let json = serde_json::json!({"email": "x@example.com"});
        assert!(User::from_json(&json).is_err());
    }

    #[test]
    fn test_unknown_role_is_not_admin() {
        let json = serde_json::json!({"id": "u2", "role": "superuser"});
        let user = User::from_json(&json).unwrap();
        assert!(!user.is_admin());
    }

    #[test]
    fn test_missing_token_is_none() {
        let json = serde_json::json!({"id": "u3", "role": "client"});
        let user = User::from_json(&json).unwrap();
        assert!(user.push_token.is_none());
        assert_eq!(user.role, Role::Client);
    }

    #[test]
    fn test_role_labels() {
        assert_eq!(Role::from_label("admin"), Role::Admin);
        assert_eq!(Role::from_label("client"), Role::Client);
        assert_eq!(Role::Admin.as_str(), "admin");
    }
}

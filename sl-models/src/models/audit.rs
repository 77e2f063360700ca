//! Audit log entry model.
//!
//! Entries record privileged actions performed through admin functions.
//! The log is append-only; this code only ever creates entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One append-only audit record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLogEntry {
    pub id: String,
    pub action: String,
    pub actor_id: String,
    pub actor_email: Option<String>,
    pub target_id: Option<String>,
    pub target_email: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl AuditLogEntry {
    /// Create a new entry for an action performed by the given actor.
    pub fn new(action: &str, actor_id: &str, actor_email: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            action: action.to_string(),
            actor_id: actor_id.to_string(),
            actor_email,
            target_id: None,
            target_email: None,
            timestamp: Utc::now(),
        }
    }

    /// Attach the target of the action.
    pub fn with_target(mut self, target_id: Option<String>, target_email: Option<String>) -> Self {
        self.target_id = target_id;
        self.target_email = target_email;
        self
    }

    /// Serialize to the backend's JSON representation.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sl_core::constants::actions;

    #[test]
    fn test_entry_fields() {
        let entry = AuditLogEntry::new(
            actions::PASSWORD_CHANGE,
            "admin-1",
            Some("admin@example.com".into()),
        )
        .with_target(Some("u7".into()), None);

        assert_eq!(entry.action, "password_change");
        assert_eq!(entry.target_id.as_deref(), Some("u7"));
        assert!(!entry.id.is_empty());
    }

    #[test]
    fn test_json_uses_camel_case() {
        let entry = AuditLogEntry::new(actions::WELCOME_EMAIL, "admin-1", None)
            .with_target(None, Some("new@example.com".into()));
        let json = entry.to_json();
        assert_eq!(json["actorId"], "admin-1");
        assert_eq!(json["targetEmail"], "new@example.com");
        assert!(json.get("actor_id").is_none());
    }
}

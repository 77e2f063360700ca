//! Project message record model.

use serde::{Deserialize, Serialize};
use sl_core::error::{SlError, SlResult};

/// A message posted on a project thread.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMessage {
    pub id: String,
    pub project_id: String,
    pub sender_id: String,
    pub sender_name: Option<String>,
    pub text: Option<String>,
}

impl ProjectMessage {
    /// Build a ProjectMessage from a backend JSON map.
    pub fn from_json(map: &serde_json::Value) -> SlResult<Self> {
        let field = |key: &str| -> SlResult<String> {
            map.get(key)
                .and_then(|v| v.as_str())
                .map(String::from)
                .ok_or_else(|| SlError::Serialization(format!("message record missing {key}")))
        };

        Ok(Self {
            id: field("id")?,
            project_id: field("projectId")?,
            sender_id: field("senderId")?,
            sender_name: map
                .get("senderName")
                .and_then(|v| v.as_str())
                .map(String::from),
            text: map.get("text").and_then(|v| v.as_str()).map(String::from),
        })
    }
}

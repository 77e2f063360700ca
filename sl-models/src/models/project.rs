//! Project record model.

use serde::{Deserialize, Serialize};
use sl_core::error::{SlError, SlResult};

/// A project owned by a client with zero or more assigned contractors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: Option<String>,
    pub status: Option<String>,
    pub client_id: Option<String>,
    pub contractor_ids: Vec<String>,
}

impl Project {
    /// Build a Project from a backend JSON map.
    pub fn from_json(map: &serde_json::Value) -> SlResult<Self> {
        let id = map
            .get("id")
            .and_then(|v| v.as_str())
            .ok_or_else(|| SlError::Serialization("project record missing id".into()))?;

        let contractor_ids = map
            .get("contractorIds")
            .and_then(|v| v.as_array())
            .map(|arr| {
                arr.iter()
                    .filter_map(|v| v.as_str())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            id: id.to_string(),
            title: map.get("title").and_then(|v| v.as_str()).map(String::from),
            status: map.get("status").and_then(|v| v.as_str()).map(String::from),
            client_id: map
                .get("clientId")
                .and_then(|v| v.as_str())
                .map(String::from),
            contractor_ids,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_from_json() {
        let json = serde_json::json!({
            "id": "p1",
            "title": "Kitchen remodel",
            "status": "active",
            "clientId": "u2",
            "contractorIds": ["u1", "u3"]
        });
        let project = Project::from_json(&json).unwrap();
        assert_eq!(project.client_id.as_deref(), Some("u2"));
        assert_eq!(project.contractor_ids, vec!["u1", "u3"]);
    }

    #[test]
    fn test_project_without_assignments() {
        let json = serde_json::json!({"id": "p2", "title": "Fence repair"});
        let project = Project::from_json(&json).unwrap();
        assert!(project.client_id.is_none());
        assert!(project.contractor_ids.is_empty());
    }

    #[test]
    fn test_non_string_contractor_entries_skipped() {
        let json = serde_json::json!({"id": "p3", "contractorIds": ["u1", 7, null]});
        let project = Project::from_json(&json).unwrap();
        assert_eq!(project.contractor_ids, vec!["u1"]);
    }
}

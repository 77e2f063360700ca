//! Estimate record model.

use serde::{Deserialize, Serialize};
use sl_core::error::{SlError, SlResult};

/// A cost estimate attached to a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Estimate {
    pub id: String,
    pub project_id: String,
}

impl Estimate {
    /// Build an Estimate from a backend JSON map.
    pub fn from_json(map: &serde_json::Value) -> SlResult<Self> {
        let id = map
            .get("id")
            .and_then(|v| v.as_str())
            .ok_or_else(|| SlError::Serialization("estimate record missing id".into()))?;
        let project_id = map
            .get("projectId")
            .and_then(|v| v.as_str())
            .ok_or_else(|| SlError::Serialization("estimate record missing projectId".into()))?;

        Ok(Self {
            id: id.to_string(),
            project_id: project_id.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_from_json() {
        let json = serde_json::json!({"id": "e1", "projectId": "p1"});
        let estimate = Estimate::from_json(&json).unwrap();
        assert_eq!(estimate.project_id, "p1");
    }

    #[test]
    fn test_estimate_missing_project() {
        let json = serde_json::json!({"id": "e2"});
        assert!(Estimate::from_json(&json).is_err());
    }
}

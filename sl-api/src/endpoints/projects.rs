//! Project endpoints.

use sl_core::error::{SlError, SlResult};
use sl_models::Project;

use crate::client::ApiClient;

impl ApiClient {
    /// Fetch a project record by id. Returns None when the record does not exist.
    pub async fn fetch_project(&self, id: &str) -> SlResult<Option<Project>> {
        let resp = match self
            .get_json::<serde_json::Value>(&format!("/projects/{id}"))
            .await
        {
            Ok(resp) => resp,
            Err(SlError::NotFound(_)) => return Ok(None),
            Err(e) => return Err(e),
        };

        match resp.data {
            Some(map) => Ok(Some(Project::from_json(&map)?)),
            None => Ok(None),
        }
    }
}

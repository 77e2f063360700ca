//! User endpoints.

use tracing::warn;

use sl_core::error::{SlError, SlResult};
use sl_models::{Role, User};

use crate::client::ApiClient;

impl ApiClient {
    /// Fetch a user record by id. Returns None when the record does not exist.
    pub async fn fetch_user(&self, id: &str) -> SlResult<Option<User>> {
        let resp = match self
            .get_json::<serde_json::Value>(&format!("/users/{id}"))
            .await
        {
            Ok(resp) => resp,
            Err(SlError::NotFound(_)) => return Ok(None),
            Err(e) => return Err(e),
        };

        match resp.data {
            Some(map) => Ok(Some(User::from_json(&map)?)),
            None => Ok(None),
        }
    }

    /// Fetch every user holding the given role.
    pub async fn fetch_users_by_role(&self, role: Role) -> SlResult<Vec<User>> {
        let resp = self
            .get_json::<Vec<serde_json::Value>>(&format!("/users?role={}", role.as_str()))
            .await?;

        let mut users = Vec::new();
        for map in resp.data.unwrap_or_default() {
            match User::from_json(&map) {
                Ok(user) => users.push(user),
                Err(e) => warn!("skipping malformed user record: {e}"),
            }
        }
        Ok(users)
    }
}

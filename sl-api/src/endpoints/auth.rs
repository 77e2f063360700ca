//! Authentication directory endpoints.
//!
//! These proxy to the platform's managed auth provider: password updates
//! and password-setup link generation for invited users.

use sl_core::error::{SlError, SlResult};

use crate::client::ApiClient;

impl ApiClient {
    /// Replace a user's password in the auth provider.
    pub async fn update_user_password(&self, uid: &str, new_password: &str) -> SlResult<()> {
        let body = serde_json::json!({ "password": new_password });
        let resp = self
            .post_json::<serde_json::Value>(&format!("/auth/users/{uid}/password"), &body)
            .await?;

        if let Some(message) = resp.error_message() {
            return Err(SlError::Internal(format!("password update rejected: {message}")));
        }
        Ok(())
    }

    /// Generate a password-setup link for the given account email.
    pub async fn password_reset_link(&self, email: &str) -> SlResult<String> {
        let body = serde_json::json!({ "email": email });
        let resp = self
            .post_json::<serde_json::Value>("/auth/reset-link", &body)
            .await?;

        if let Some(message) = resp.error_message() {
            return Err(SlError::Internal(format!("reset link rejected: {message}")));
        }

        resp.data
            .as_ref()
            .and_then(|d| d.get("link"))
            .and_then(|v| v.as_str())
            .map(String::from)
            .ok_or_else(|| SlError::Internal("reset link missing from response".into()))
    }
}

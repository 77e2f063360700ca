//! Auth directory abstraction.
//!
//! The platform's managed auth provider owns account credentials; this
//! trait covers the two mutations admin functions perform against it.

use std::sync::Arc;

use async_trait::async_trait;

use sl_api::ApiClient;
use sl_core::error::SlResult;

/// Mutations against the platform's auth provider.
#[async_trait]
pub trait AuthDirectory: Send + Sync {
    /// Replace a user's password.
    async fn update_password(&self, uid: &str, new_password: &str) -> SlResult<()>;

    /// Generate a password-setup link for the given account email.
    async fn password_reset_link(&self, email: &str) -> SlResult<String>;
}

/// Auth directory backed by the platform backend.
pub struct BackendAuth {
    api: Arc<ApiClient>,
}

impl BackendAuth {
    /// Create a new BackendAuth over an API client.
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl AuthDirectory for BackendAuth {
    async fn update_password(&self, uid: &str, new_password: &str) -> SlResult<()> {
        self.api.update_user_password(uid, new_password).await
    }

    async fn password_reset_link(&self, email: &str) -> SlResult<String> {
        self.api.password_reset_link(email).await
    }
}

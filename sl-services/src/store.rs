//! Record store abstraction.
//!
//! All domain records live in the platform backend; this trait is the
//! read-and-append seam the pipeline and functions go through. The
//! production implementation delegates to the backend API client; tests
//! substitute an in-memory fake.

use std::sync::Arc;

use async_trait::async_trait;

use sl_api::ApiClient;
use sl_core::error::SlResult;
use sl_models::{AuditLogEntry, Project, Role, User};

/// Read access to backend records plus append-only audit writes.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Fetch a user by id. Missing records are None, not an error.
    async fn user(&self, id: &str) -> SlResult<Option<User>>;

    /// Fetch a project by id. Missing records are None, not an error.
    async fn project(&self, id: &str) -> SlResult<Option<Project>>;

    /// Fetch every user holding the given role.
    async fn users_with_role(&self, role: Role) -> SlResult<Vec<User>>;

    /// Append one entry to the audit log.
    async fn append_audit(&self, entry: &AuditLogEntry) -> SlResult<()>;
}

/// Record store backed by the platform backend REST API.
pub struct BackendStore {
    api: Arc<ApiClient>,
}

impl BackendStore {
    /// Create a new BackendStore over an API client.
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl RecordStore for BackendStore {
    async fn user(&self, id: &str) -> SlResult<Option<User>> {
        self.api.fetch_user(id).await
    }

    async fn project(&self, id: &str) -> SlResult<Option<Project>> {
        self.api.fetch_project(id).await
    }

    async fn users_with_role(&self, role: Role) -> SlResult<Vec<User>> {
        self.api.fetch_users_by_role(role).await
    }

    async fn append_audit(&self, entry: &AuditLogEntry) -> SlResult<()> {
        self.api.append_audit_entry(entry).await
    }
}

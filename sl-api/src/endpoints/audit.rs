//! Audit log endpoints.

use sl_core::error::{SlError, SlResult};
use sl_models::AuditLogEntry;

use crate::client::ApiClient;

impl ApiClient {
    /// Append one entry to the audit log.
    pub async fn append_audit_entry(&self, entry: &AuditLogEntry) -> SlResult<()> {
        let resp = self
            .post_json::<serde_json::Value>("/audit", &entry.to_json())
            .await?;

        if let Some(message) = resp.error_message() {
            return Err(SlError::Internal(format!("audit append rejected: {message}")));
        }
        Ok(())
    }
}

//! Push gateway abstraction.

use async_trait::async_trait;

use sl_api::{DeliverySummary, NotificationContent, PushClient};
use sl_core::error::SlResult;

/// Outbound push delivery seam.
#[async_trait]
pub trait PushGateway: Send + Sync {
    /// Submit a notification to the given tokens in a single call.
    async fn deliver(
        &self,
        tokens: &[String],
        content: &NotificationContent,
    ) -> SlResult<DeliverySummary>;
}

#[async_trait]
impl PushGateway for PushClient {
    async fn deliver(
        &self,
        tokens: &[String],
        content: &NotificationContent,
    ) -> SlResult<DeliverySummary> {
        PushClient::deliver(self, tokens, content).await
    }
}

//! Notification handler.
//!
//! Ties the pipeline together for one event: resolve recipients, collect
//! tokens, build the notification content, and hand the batch to the push
//! gateway. Delivery is best-effort; every failure is terminal here and
//! reported through the returned `DeliveryOutcome`, never as an error.

use std::sync::Arc;

use tracing::{debug, info, warn};

use sl_api::NotificationContent;
use sl_core::error::SlResult;

use crate::event::RecordEvent;
use crate::gateway::PushGateway;
use crate::outcome::{DeliveryOutcome, SkipReason};
use crate::resolver::resolve_recipients;
use crate::store::RecordStore;
use crate::tokens::collect_tokens;

/// Handles record-creation events by fanning out push notifications.
pub struct NotificationHandler {
    store: Arc<dyn RecordStore>,
    gateway: Arc<dyn PushGateway>,
}

impl NotificationHandler {
    /// Create a new NotificationHandler.
    pub fn new(store: Arc<dyn RecordStore>, gateway: Arc<dyn PushGateway>) -> Self {
        Self { store, gateway }
    }

    /// Process one event. Never returns an error: the outcome says what
    /// happened and the caller decides what to log.
    pub async fn handle(&self, event: &RecordEvent) -> DeliveryOutcome {
        let outcome = match self.run(event).await {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!("notification for {} failed: {e}", event.label());
                DeliveryOutcome::Failed {
                    error: e.to_string(),
                }
            }
        };

        info!("{}: {outcome}", event.label());
        outcome
    }

    async fn run(&self, event: &RecordEvent) -> SlResult<DeliveryOutcome> {
        let recipients = resolve_recipients(self.store.as_ref(), event).await?;
        if recipients.is_empty() {
            return Ok(DeliveryOutcome::Skipped {
                reason: SkipReason::NoRecipients,
            });
        }
        debug!("{}: {} recipient(s)", event.label(), recipients.len());

        let tokens = collect_tokens(self.store.as_ref(), &recipients).await;
        if tokens.is_empty() {
            return Ok(DeliveryOutcome::Skipped {
                reason: SkipReason::NoValidTokens,
            });
        }

        let content = content_for(event);
        let summary = self.gateway.deliver(&tokens, &content).await?;

        if summary.sent == 0 {
            // Every collected token failed the gateway's format check.
            return Ok(DeliveryOutcome::Skipped {
                reason: SkipReason::NoValidTokens,
            });
        }

        Ok(DeliveryOutcome::Delivered {
            sent: summary.sent,
            dropped: summary.dropped,
        })
    }
}

/// Build the notification payload for an event.
pub fn content_for(event: &RecordEvent) -> NotificationContent {
    match event {
        RecordEvent::MessageCreated { message } => NotificationContent {
            title: match &message.sender_name {
                Some(name) => format!("New message from {name}"),
                None => "New message".to_string(),
            },
            body: message.text.clone().unwrap_or_default(),
            data: serde_json::json!({
                "type": "message",
                "projectId": message.project_id,
                "messageId": message.id,
            }),
        },
        RecordEvent::EstimateCreated { estimate, .. } => NotificationContent {
            title: "New estimate ready".to_string(),
            body: "An estimate was added to your project.".to_string(),
            data: serde_json::json!({
                "type": "estimate",
                "projectId": estimate.project_id,
                "estimateId": estimate.id,
            }),
        },
        RecordEvent::ProjectCreated { project, .. } => NotificationContent {
            title: "New project posted".to_string(),
            body: match &project.title {
                Some(title) => title.clone(),
                None => "A new project was created.".to_string(),
            },
            data: serde_json::json!({
                "type": "project",
                "projectId": project.id,
            }),
        },
    }
}

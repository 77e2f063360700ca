//! Push gateway delivery client.
//!
//! Builds one wire message per device token and submits a multi-token
//! batch in a single POST (or a single object for one recipient). Tokens
//! failing the provider-prefix format check are dropped silently before
//! submission. The gateway's JSON receipt is returned as-is and not
//! validated for per-token success.

use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use sl_core::config::PushConfig;
use sl_core::constants;
use sl_core::error::{SlError, SlResult};
use sl_models::is_valid_push_token;

use crate::client::classify_transport_error;

/// Notification payload independent of any particular device.
#[derive(Debug, Clone)]
pub struct NotificationContent {
    pub title: String,
    pub body: String,
    /// Arbitrary structured data delivered alongside the notification.
    pub data: serde_json::Value,
}

/// Wire message accepted by the push gateway, one per device token.
#[derive(Debug, Clone, Serialize)]
pub struct PushMessage {
    pub to: String,
    pub sound: String,
    pub title: String,
    pub body: String,
    pub data: serde_json::Value,
    pub priority: String,
    #[serde(rename = "channelId")]
    pub channel_id: String,
}

/// Result of a delivery attempt.
#[derive(Debug, Clone)]
pub struct DeliverySummary {
    /// Number of messages submitted to the gateway.
    pub sent: usize,
    /// Number of candidate tokens dropped by the format check.
    pub dropped: usize,
    /// Raw gateway receipt (not validated per token).
    pub receipt: serde_json::Value,
}

/// Client for the push notification gateway.
#[derive(Clone)]
pub struct PushClient {
    inner: Client,
    gateway_url: String,
    sound: String,
    priority: String,
    channel_id: String,
}

impl PushClient {
    /// Create a new PushClient from push configuration.
    pub fn new(config: &PushConfig) -> SlResult<Self> {
        let inner = Client::builder()
            .timeout(Duration::from_millis(constants::DEFAULT_API_TIMEOUT_MS))
            .build()
            .map_err(|e| SlError::Http(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            inner,
            gateway_url: config.gateway_url.clone(),
            sound: config.sound.clone(),
            priority: config.priority.clone(),
            channel_id: config.channel_id.clone(),
        })
    }

    /// Build the wire message for one token.
    fn message_for(&self, token: &str, content: &NotificationContent) -> PushMessage {
        PushMessage {
            to: token.to_string(),
            sound: self.sound.clone(),
            title: content.title.clone(),
            body: content.body.clone(),
            data: content.data.clone(),
            priority: self.priority.clone(),
            channel_id: self.channel_id.clone(),
        }
    }

    /// Submit a notification to the given tokens.
    ///
    /// Invalid tokens are dropped before submission; if none remain, no
    /// network call is made. Valid tokens go out in one POST: a bare
    /// object for a single recipient, an array for a batch.
    pub async fn deliver(
        &self,
        tokens: &[String],
        content: &NotificationContent,
    ) -> SlResult<DeliverySummary> {
        let valid: Vec<&String> = tokens
            .iter()
            .filter(|t| is_valid_push_token(t))
            .collect();
        let dropped = tokens.len() - valid.len();

        if dropped > 0 {
            debug!("dropped {dropped} token(s) failing the format check");
        }

        if valid.is_empty() {
            return Ok(DeliverySummary {
                sent: 0,
                dropped,
                receipt: serde_json::Value::Null,
            });
        }

        let messages: Vec<PushMessage> = valid
            .iter()
            .map(|token| self.message_for(token, content))
            .collect();

        let body = if messages.len() == 1 {
            serde_json::to_value(&messages[0])?
        } else {
            serde_json::to_value(&messages)?
        };

        debug!("POST push gateway ({} message(s))", messages.len());

        let response = self
            .inner
            .post(&self.gateway_url)
            .json(&body)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SlError::Server {
                status: status.as_u16(),
                message,
            });
        }

        let receipt = response
            .json::<serde_json::Value>()
            .await
            .unwrap_or_default();

        Ok(DeliverySummary {
            sent: messages.len(),
            dropped,
            receipt,
        })
    }
}

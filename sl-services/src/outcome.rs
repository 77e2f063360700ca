//! Delivery outcome values.
//!
//! Notifications are best-effort and fire-and-forget: no caller awaits a
//! result and nothing retries. Instead of swallowing failures silently,
//! the handler reports what happened as an explicit value the caller can
//! log and tests can assert on.

/// Why a delivery was skipped without contacting the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The resolved recipient set was empty (including a missing parent
    /// record).
    NoRecipients,
    /// Recipients existed but none had a usable push token.
    NoValidTokens,
}

/// What happened to one notification attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// No delivery was attempted.
    Skipped { reason: SkipReason },
    /// Messages were submitted to the gateway.
    Delivered { sent: usize, dropped: usize },
    /// Delivery failed; the error is terminal here.
    Failed { error: String },
}

impl DeliveryOutcome {
    /// Whether a gateway call was made.
    pub fn was_attempted(&self) -> bool {
        !matches!(self, DeliveryOutcome::Skipped { .. })
    }
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoRecipients => write!(f, "no recipients"),
            Self::NoValidTokens => write!(f, "no valid tokens"),
        }
    }
}

impl std::fmt::Display for DeliveryOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Skipped { reason } => write!(f, "skipped ({reason})"),
            Self::Delivered { sent, dropped } => {
                write!(f, "delivered ({sent} sent, {dropped} dropped)")
            }
            Self::Failed { error } => write!(f, "failed ({error})"),
        }
    }
}

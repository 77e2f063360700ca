//! Record-creation events.
//!
//! Each event carries the created record plus the actor that caused it,
//! where the record itself does not already name one. Events arrive from
//! the platform's document triggers; every dispatched event is handled as
//! an independent, stateless invocation.

use sl_core::error::{SlError, SlResult};
use sl_models::{Estimate, Project, ProjectMessage};

/// A record-creation event on one of the three observed collections.
#[derive(Debug, Clone)]
pub enum RecordEvent {
    /// A message was posted on a project thread.
    MessageCreated { message: ProjectMessage },
    /// An estimate was added to a project.
    EstimateCreated {
        estimate: Estimate,
        actor_id: Option<String>,
    },
    /// A new project was created.
    ProjectCreated {
        project: Project,
        actor_id: Option<String>,
    },
}

impl RecordEvent {
    /// Human-readable label for this event (for logging).
    pub fn label(&self) -> &'static str {
        match self {
            RecordEvent::MessageCreated { .. } => "MessageCreated",
            RecordEvent::EstimateCreated { .. } => "EstimateCreated",
            RecordEvent::ProjectCreated { .. } => "ProjectCreated",
        }
    }

    /// The user who caused this event, if known. Never notified.
    pub fn actor_id(&self) -> Option<&str> {
        match self {
            RecordEvent::MessageCreated { message } => Some(&message.sender_id),
            RecordEvent::EstimateCreated { actor_id, .. } => actor_id.as_deref(),
            RecordEvent::ProjectCreated { actor_id, .. } => actor_id.as_deref(),
        }
    }

    /// Parse an event from a trigger envelope:
    /// `{"collection": "...", "record": {...}, "actorId": "..."}`.
    pub fn from_envelope(envelope: &serde_json::Value) -> SlResult<Self> {
        let collection = envelope
            .get("collection")
            .and_then(|v| v.as_str())
            .ok_or_else(|| SlError::InvalidArgument("event envelope missing collection".into()))?;
        let record = envelope
            .get("record")
            .ok_or_else(|| SlError::InvalidArgument("event envelope missing record".into()))?;
        let actor_id = envelope
            .get("actorId")
            .and_then(|v| v.as_str())
            .map(String::from);

        match collection {
            "messages" => Ok(Self::MessageCreated {
                message: ProjectMessage::from_json(record)?,
            }),
            "estimates" => Ok(Self::EstimateCreated {
                estimate: Estimate::from_json(record)?,
                actor_id,
            }),
            "projects" => Ok(Self::ProjectCreated {
                project: Project::from_json(record)?,
                actor_id,
            }),
            other => Err(SlError::InvalidArgument(format!(
                "unknown collection {other}"
            ))),
        }
    }
}

//! Recipient resolution.
//!
//! Computes the ordered set of user ids to notify for a record-creation
//! event. The actor that caused the event is always excluded. A missing
//! parent record or an empty computed set terminates successfully with an
//! empty result.

use std::collections::HashSet;

use tracing::info;

use sl_core::error::SlResult;
use sl_models::{Project, Role};

use crate::event::RecordEvent;
use crate::store::RecordStore;

/// Resolve the ordered, deduplicated recipient set for an event.
pub async fn resolve_recipients(
    store: &dyn RecordStore,
    event: &RecordEvent,
) -> SlResult<Vec<String>> {
    let candidates = match event {
        RecordEvent::MessageCreated { message } => {
            let Some(project) = store.project(&message.project_id).await? else {
                info!(
                    "project {} not found for message {}, nothing to notify",
                    message.project_id, message.id
                );
                return Ok(Vec::new());
            };
            project_members(&project)
        }
        RecordEvent::EstimateCreated { estimate, .. } => {
            let Some(project) = store.project(&estimate.project_id).await? else {
                info!(
                    "project {} not found for estimate {}, nothing to notify",
                    estimate.project_id, estimate.id
                );
                return Ok(Vec::new());
            };
            // Estimates are for the client's eyes only.
            project.client_id.into_iter().collect()
        }
        RecordEvent::ProjectCreated { .. } => store
            .users_with_role(Role::Admin)
            .await?
            .into_iter()
            .map(|user| user.id)
            .collect(),
    };

    Ok(dedup_excluding(candidates, event.actor_id()))
}

/// Everyone attached to a project: the client first, then the assigned
/// contractors in stored order.
fn project_members(project: &Project) -> Vec<String> {
    project
        .client_id
        .iter()
        .chain(project.contractor_ids.iter())
        .cloned()
        .collect()
}

/// Deduplicate preserving order, dropping the actor and empty ids.
fn dedup_excluding(ids: Vec<String>, actor: Option<&str>) -> Vec<String> {
    let mut seen = HashSet::new();
    ids.into_iter()
        .filter(|id| !id.is_empty())
        .filter(|id| Some(id.as_str()) != actor)
        .filter(|id| seen.insert(id.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup_preserves_order() {
        let ids = vec!["u2".into(), "u3".into(), "u2".into(), "u4".into()];
        assert_eq!(dedup_excluding(ids, None), vec!["u2", "u3", "u4"]);
    }

    #[test]
    fn test_actor_excluded() {
        let ids = vec!["u1".into(), "u2".into(), "u1".into()];
        assert_eq!(dedup_excluding(ids, Some("u1")), vec!["u2"]);
    }

    #[test]
    fn test_empty_ids_dropped() {
        let ids = vec![String::new(), "u2".into()];
        assert_eq!(dedup_excluding(ids, None), vec!["u2"]);
    }

    #[test]
    fn test_project_members_client_first() {
        let project = Project {
            id: "p1".into(),
            title: None,
            status: None,
            client_id: Some("u2".into()),
            contractor_ids: vec!["u1".into(), "u3".into()],
        };
        assert_eq!(project_members(&project), vec!["u2", "u1", "u3"]);
    }
}

//! Notification pipeline commands.
//!
//! Builds a record-creation event from the command line (or reads a feed
//! of trigger envelopes from stdin) and runs it through the full pipeline
//! against the real backend and push gateway.

use std::sync::Arc;

use clap::Subcommand;
use console::style;
use tokio::io::AsyncBufReadExt;

use sl_api::PushClient;
use sl_core::config::AppConfig;
use sl_core::error::{SlError, SlResult};
use sl_models::{Estimate, ProjectMessage};
use sl_services::gateway::PushGateway;
use sl_services::store::RecordStore;
use sl_services::{BackendStore, EventDispatcher, NotificationHandler, RecordEvent};

use crate::OutputFormat;

#[derive(Subcommand)]
pub enum NotifyAction {
    /// Dispatch a message-created event.
    Message {
        /// Message record id.
        #[arg(long)]
        id: String,
        /// Project the message belongs to.
        #[arg(long)]
        project: String,
        /// Sender user id (never notified).
        #[arg(long)]
        sender: String,
        /// Sender display name.
        #[arg(long)]
        sender_name: Option<String>,
        /// Message text.
        #[arg(long)]
        text: Option<String>,
    },
    /// Dispatch an estimate-created event.
    Estimate {
        /// Estimate record id.
        #[arg(long)]
        id: String,
        /// Project the estimate belongs to.
        #[arg(long)]
        project: String,
        /// Acting user id (never notified).
        #[arg(long)]
        actor: Option<String>,
    },
    /// Dispatch a project-created event for an existing project record.
    Project {
        /// Project record id.
        #[arg(long)]
        id: String,
        /// Acting user id (never notified).
        #[arg(long)]
        actor: Option<String>,
    },
    /// Read trigger envelopes from stdin (one JSON object per line) and
    /// run each through the pipeline.
    Listen,
}

pub async fn run(config: &AppConfig, action: NotifyAction, format: OutputFormat) -> SlResult<()> {
    let db = super::open_database(config)?;
    let api = super::build_api_client(config, &db)?;
    let store: Arc<dyn RecordStore> = Arc::new(BackendStore::new(api));
    let gateway: Arc<dyn PushGateway> = Arc::new(PushClient::new(&config.push)?);
    let handler = Arc::new(NotificationHandler::new(store.clone(), gateway));

    let event = match action {
        NotifyAction::Message {
            id,
            project,
            sender,
            sender_name,
            text,
        } => RecordEvent::MessageCreated {
            message: ProjectMessage {
                id,
                project_id: project,
                sender_id: sender,
                sender_name,
                text,
            },
        },
        NotifyAction::Estimate { id, project, actor } => RecordEvent::EstimateCreated {
            estimate: Estimate {
                id,
                project_id: project,
            },
            actor_id: actor,
        },
        NotifyAction::Project { id, actor } => {
            let project = store
                .project(&id)
                .await?
                .ok_or_else(|| SlError::NotFound(format!("project {id} does not exist")))?;
            RecordEvent::ProjectCreated {
                project,
                actor_id: actor,
            }
        }
        NotifyAction::Listen => return listen(handler).await,
    };

    let label = event.label();
    let outcome = handler.handle(&event).await;

    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "event": label,
                    "outcome": outcome.to_string(),
                    "attempted": outcome.was_attempted(),
                })
            );
        }
        OutputFormat::Text => {
            println!("{} {label}: {outcome}", style("→").cyan());
        }
    }

    Ok(())
}

/// Feed stdin envelopes through the dispatcher; a subscriber task runs
/// the handler on each event as an independent invocation.
async fn listen(handler: Arc<NotificationHandler>) -> SlResult<()> {
    let dispatcher = EventDispatcher::new(64);
    let mut rx = dispatcher.subscribe();

    let worker = tokio::spawn(async move {
        while let Ok(event) = rx.recv().await {
            let label = event.label();
            let outcome = handler.handle(&event).await;
            println!("{} {label}: {outcome}", style("→").cyan());
        }
    });

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<serde_json::Value>(&line) {
            Ok(envelope) => match RecordEvent::from_envelope(&envelope) {
                Ok(event) => dispatcher.emit(event),
                Err(e) => eprintln!("{} skipping event: {e}", style("!").yellow()),
            },
            Err(e) => eprintln!("{} skipping malformed line: {e}", style("!").yellow()),
        }
    }

    // Closing the dispatcher ends the subscriber once the queue drains.
    drop(dispatcher);
    let _ = worker.await;
    Ok(())
}

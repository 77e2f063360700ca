//! Shared test utilities: in-memory fakes for the record store, push
//! gateway, auth directory, and language model.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;

use sl_api::{DeliverySummary, NotificationContent};
use sl_core::error::{SlError, SlResult};
use sl_models::{is_valid_push_token, AuditLogEntry, Project, Role, User};
use sl_services::assistant::LanguageModel;
use sl_services::auth::AuthDirectory;
use sl_services::caller::Caller;
use sl_services::event::RecordEvent;
use sl_services::gateway::PushGateway;
use sl_services::store::RecordStore;

// ---- Record store fake ----

/// In-memory record store with per-user failure injection.
#[derive(Default)]
pub struct MemoryStore {
    users: Mutex<HashMap<String, User>>,
    projects: Mutex<HashMap<String, Project>>,
    failing_users: Mutex<HashSet<String>>,
    audit: Mutex<Vec<AuditLogEntry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_user(&self, user: User) {
        self.users.lock().unwrap().insert(user.id.clone(), user);
    }

    pub fn insert_project(&self, project: Project) {
        self.projects
            .lock()
            .unwrap()
            .insert(project.id.clone(), project);
    }

    /// Make lookups for this user id fail with a transport error.
    pub fn fail_user_lookup(&self, id: &str) {
        self.failing_users.lock().unwrap().insert(id.to_string());
    }

    pub fn audit_entries(&self) -> Vec<AuditLogEntry> {
        self.audit.lock().unwrap().clone()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn user(&self, id: &str) -> SlResult<Option<User>> {
        if self.failing_users.lock().unwrap().contains(id) {
            return Err(SlError::Http(format!("simulated failure loading {id}")));
        }
        Ok(self.users.lock().unwrap().get(id).cloned())
    }

    async fn project(&self, id: &str) -> SlResult<Option<Project>> {
        Ok(self.projects.lock().unwrap().get(id).cloned())
    }

    async fn users_with_role(&self, role: Role) -> SlResult<Vec<User>> {
        let users = self.users.lock().unwrap();
        let mut matching: Vec<User> = users.values().filter(|u| u.role == role).cloned().collect();
        matching.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(matching)
    }

    async fn append_audit(&self, entry: &AuditLogEntry) -> SlResult<()> {
        self.audit.lock().unwrap().push(entry.clone());
        Ok(())
    }
}

// ---- Push gateway fakes ----

/// Gateway fake that records submitted batches, applying the same token
/// format filter as the real client.
#[derive(Default)]
pub struct RecordingGateway {
    pub batches: Mutex<Vec<(Vec<String>, NotificationContent)>>,
}

impl RecordingGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submitted_tokens(&self) -> Vec<Vec<String>> {
        self.batches
            .lock()
            .unwrap()
            .iter()
            .map(|(tokens, _)| tokens.clone())
            .collect()
    }

    pub fn call_count(&self) -> usize {
        self.batches.lock().unwrap().len()
    }
}

#[async_trait]
impl PushGateway for RecordingGateway {
    async fn deliver(
        &self,
        tokens: &[String],
        content: &NotificationContent,
    ) -> SlResult<DeliverySummary> {
        let valid: Vec<String> = tokens
            .iter()
            .filter(|t| is_valid_push_token(t))
            .cloned()
            .collect();
        let dropped = tokens.len() - valid.len();

        if valid.is_empty() {
            return Ok(DeliverySummary {
                sent: 0,
                dropped,
                receipt: serde_json::Value::Null,
            });
        }

        let sent = valid.len();
        self.batches
            .lock()
            .unwrap()
            .push((valid, content.clone()));

        Ok(DeliverySummary {
            sent,
            dropped,
            receipt: serde_json::json!({"data": {"status": "ok"}}),
        })
    }
}

/// Gateway fake that always fails.
pub struct FailingGateway;

#[async_trait]
impl PushGateway for FailingGateway {
    async fn deliver(
        &self,
        _tokens: &[String],
        _content: &NotificationContent,
    ) -> SlResult<DeliverySummary> {
        Err(SlError::Server {
            status: 502,
            message: "gateway unavailable".into(),
        })
    }
}

// ---- Auth directory fake ----

#[derive(Default)]
pub struct FakeAuth {
    pub password_updates: Mutex<Vec<(String, String)>>,
    pub known_emails: Mutex<HashSet<String>>,
}

impl FakeAuth {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_known_email(&self, email: &str) {
        self.known_emails.lock().unwrap().insert(email.to_string());
    }

    pub fn updates(&self) -> Vec<(String, String)> {
        self.password_updates.lock().unwrap().clone()
    }
}

#[async_trait]
impl AuthDirectory for FakeAuth {
    async fn update_password(&self, uid: &str, new_password: &str) -> SlResult<()> {
        self.password_updates
            .lock()
            .unwrap()
            .push((uid.to_string(), new_password.to_string()));
        Ok(())
    }

    async fn password_reset_link(&self, email: &str) -> SlResult<String> {
        if !self.known_emails.lock().unwrap().contains(email) {
            return Err(SlError::NotFound(format!("no account for {email}")));
        }
        Ok(format!("https://sitelink.example/setup?email={email}"))
    }
}

// ---- Language model fake ----

#[derive(Default)]
pub struct FakeModel {
    /// When set, every call fails with a transport error.
    pub failing: bool,
}

impl FakeModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self { failing: true }
    }
}

#[async_trait]
impl LanguageModel for FakeModel {
    async fn transcribe(&self, audio: &[u8], _language: Option<&str>) -> SlResult<String> {
        if self.failing {
            return Err(SlError::Http("simulated provider outage".into()));
        }
        Ok(format!("transcript of {} bytes", audio.len()))
    }

    async fn generate_text(&self, prompt: &str, _instructions: Option<&str>) -> SlResult<String> {
        if self.failing {
            return Err(SlError::Http("simulated provider outage".into()));
        }
        Ok(format!("generated: {prompt}"))
    }

    async fn synthesize_speech(&self, text: &str, _voice: Option<&str>) -> SlResult<Vec<u8>> {
        if self.failing {
            return Err(SlError::Http("simulated provider outage".into()));
        }
        Ok(text.as_bytes().to_vec())
    }
}

// ---- Builders ----

pub fn user(id: &str, role: Role, push_token: Option<&str>) -> User {
    User {
        id: id.to_string(),
        email: Some(format!("{id}@example.com")),
        name: None,
        role,
        push_token: push_token.map(String::from),
    }
}

pub fn project(id: &str, client_id: Option<&str>, contractor_ids: &[&str]) -> Project {
    Project {
        id: id.to_string(),
        title: Some("Kitchen remodel".into()),
        status: Some("active".into()),
        client_id: client_id.map(String::from),
        contractor_ids: contractor_ids.iter().map(|s| s.to_string()).collect(),
    }
}

pub fn token_for(id: &str) -> String {
    format!("ExponentPushToken[{id}]")
}

pub fn message_event(project_id: &str, sender_id: &str) -> RecordEvent {
    RecordEvent::MessageCreated {
        message: sl_models::ProjectMessage {
            id: "m1".into(),
            project_id: project_id.to_string(),
            sender_id: sender_id.to_string(),
            sender_name: Some("Alice".into()),
            text: Some("On my way".into()),
        },
    }
}

pub fn estimate_event(project_id: &str, actor_id: Option<&str>) -> RecordEvent {
    RecordEvent::EstimateCreated {
        estimate: sl_models::Estimate {
            id: "e1".into(),
            project_id: project_id.to_string(),
        },
        actor_id: actor_id.map(String::from),
    }
}

pub fn project_event(project: Project, actor_id: Option<&str>) -> RecordEvent {
    RecordEvent::ProjectCreated {
        project,
        actor_id: actor_id.map(String::from),
    }
}

pub fn caller_for(uid: &str) -> Caller {
    Caller::new(uid, Some(format!("{uid}@example.com")))
}

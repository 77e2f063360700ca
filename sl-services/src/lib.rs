//! SiteLink Services - Event handling and callable function layer.
//!
//! This crate contains the behaviour that sits between the platform's
//! managed services and its clients:
//! - Record-creation events and a broadcast dispatcher
//! - Recipient resolution for each event kind (actor always excluded)
//! - Parallel, partial-tolerant push-token collection
//! - Fire-and-forget push delivery behind an explicit outcome value
//! - Admin callable functions (password change, welcome email) with
//!   role-gated authorization and audit logging
//! - Assistant callable functions (transcription, text generation,
//!   speech synthesis)
//! - Trait seams for the record store, auth directory, push gateway, and
//!   language model so tests can substitute fakes

pub mod event;
pub mod dispatcher;
pub mod store;
pub mod auth;
pub mod gateway;
pub mod resolver;
pub mod tokens;
pub mod outcome;
pub mod notify;
pub mod caller;
pub mod accounts;
pub mod assistant;

// Re-export key types
pub use event::RecordEvent;
pub use dispatcher::EventDispatcher;
pub use store::{BackendStore, RecordStore};
pub use auth::{AuthDirectory, BackendAuth};
pub use gateway::PushGateway;
pub use outcome::{DeliveryOutcome, SkipReason};
pub use notify::NotificationHandler;
pub use caller::Caller;
pub use accounts::AccountFunctions;
pub use assistant::{AssistantFunctions, LanguageModel};

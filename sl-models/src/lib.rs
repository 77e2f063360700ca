//! SiteLink Models - Record types, push-token validation, and local storage.
//!
//! This crate owns the data shapes exchanged with the platform backend
//! (users, projects, messages, estimates, audit entries), push-token
//! format validation, and the local SQLite credential store.

pub mod db;
pub mod schema;
pub mod migrations;
pub mod token;
pub mod models;

// Re-export key types
pub use db::{Database, DbPool};
pub use token::is_valid_push_token;
pub use models::user::{Role, User};
pub use models::project::Project;
pub use models::message::ProjectMessage;
pub use models::estimate::Estimate;
pub use models::audit::AuditLogEntry;
pub use models::credential::Credentials;

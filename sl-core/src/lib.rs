//! SiteLink Core - Foundation types, error handling, configuration, and logging.
//!
//! This crate provides the shared foundation used by all other SiteLink crates:
//! - Application configuration (backend URL, push gateway, AI provider, storage)
//! - Global error types with stable machine-readable error kinds
//! - Structured logging with tracing
//! - Platform detection utilities
//! - Common constants

pub mod config;
pub mod error;
pub mod logging;
pub mod platform;
pub mod constants;

// Re-export commonly used items at the crate root
pub use config::AppConfig;
pub use error::{SlError, SlResult};
pub use logging::init_logging;
pub use platform::Platform;

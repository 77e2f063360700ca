//! SiteLink API - HTTP clients for the platform's external services.
//!
//! This crate provides three outbound clients:
//! - `ApiClient`: typed client for the platform backend REST API, with
//!   bearer authentication, a bounded request timeout, and content-type
//!   aware response decoding. No retry or backoff anywhere.
//! - `PushClient`: push gateway delivery with token format filtering and
//!   single-call batching.
//! - `AiClient`: AI provider calls for transcription, text generation,
//!   and speech synthesis.

pub mod client;
pub mod response;
pub mod endpoints;
pub mod push;
pub mod ai;

// Re-export key types
pub use client::{ApiBody, ApiClient};
pub use response::{ApiError, ApiResponse};
pub use push::{DeliverySummary, NotificationContent, PushClient, PushMessage};
pub use ai::AiClient;

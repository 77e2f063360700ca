//! Global error types for the SiteLink application.
//!
//! All error categories across the application are unified into a single
//! `SlError` enum. Errors surfaced by callable functions carry a stable
//! machine-readable kind string alongside the human-readable message.

use thiserror::Error;

/// Convenience type alias for Results using SlError.
pub type SlResult<T> = Result<T, SlError>;

/// Unified error type covering all error categories in SiteLink.
#[derive(Error, Debug)]
pub enum SlError {
    // -- Configuration errors --
    /// Failed to load or parse application configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// A required configuration value is missing.
    #[error("missing configuration: {0}")]
    MissingConfig(String),

    // -- Local storage errors --
    /// SQLite database error.
    #[error("database error: {0}")]
    Database(String),

    /// Database migration failed.
    #[error("migration error: {0}")]
    Migration(String),

    /// Database connection pool error.
    #[error("connection pool error: {0}")]
    Pool(String),

    // -- Network errors --
    /// HTTP request failed before a response was received.
    #[error("http error: {0}")]
    Http(String),

    /// An outbound request exceeded the configured deadline.
    #[error("Request timeout")]
    Timeout,

    /// A remote service returned a non-success response.
    #[error("server error (status {status}): {message}")]
    Server {
        /// HTTP status code.
        status: u16,
        /// Response body or error message from the service.
        message: String,
    },

    // -- Callable function taxonomy --
    /// No caller identity was present on the request.
    #[error("unauthenticated: {0}")]
    Unauthenticated(String),

    /// The caller lacks the required role.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// A required field was missing or malformed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A referenced record does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// An unexpected downstream failure.
    #[error("internal error: {0}")]
    Internal(String),

    // -- File/IO errors --
    /// File system operation failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Wrapping anyhow errors for interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SlError {
    /// Stable machine-readable kind for this error.
    ///
    /// Callable function responses expose exactly one of:
    /// `unauthenticated`, `permission-denied`, `invalid-argument`,
    /// `not-found`, `timeout`, or `internal`.
    pub fn kind(&self) -> &'static str {
        match self {
            SlError::Unauthenticated(_) => "unauthenticated",
            SlError::PermissionDenied(_) => "permission-denied",
            SlError::InvalidArgument(_) => "invalid-argument",
            SlError::NotFound(_) => "not-found",
            SlError::Timeout => "timeout",
            _ => "internal",
        }
    }

    /// Whether this error already carries a distinguished taxonomy kind.
    pub fn is_typed(&self) -> bool {
        matches!(
            self,
            SlError::Unauthenticated(_)
                | SlError::PermissionDenied(_)
                | SlError::InvalidArgument(_)
                | SlError::NotFound(_)
                | SlError::Timeout
                | SlError::Internal(_)
        )
    }

    /// Re-wrap an untyped error as `internal` with context.
    ///
    /// Typed errors pass through unchanged so validation and authorization
    /// failures keep their specific kind across layers.
    pub fn or_internal(self, context: &str) -> SlError {
        if self.is_typed() {
            self
        } else {
            SlError::Internal(format!("{context}: {self}"))
        }
    }
}

impl From<serde_json::Error> for SlError {
    fn from(e: serde_json::Error) -> Self {
        SlError::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for SlError {
    fn from(e: toml::de::Error) -> Self {
        SlError::Config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_strings() {
        assert_eq!(SlError::Unauthenticated("x".into()).kind(), "unauthenticated");
        assert_eq!(SlError::PermissionDenied("x".into()).kind(), "permission-denied");
        assert_eq!(SlError::InvalidArgument("x".into()).kind(), "invalid-argument");
        assert_eq!(SlError::NotFound("x".into()).kind(), "not-found");
        assert_eq!(SlError::Timeout.kind(), "timeout");
        assert_eq!(SlError::Internal("x".into()).kind(), "internal");
        assert_eq!(SlError::Http("x".into()).kind(), "internal");
        assert_eq!(SlError::Database("x".into()).kind(), "internal");
    }

    #[test]
    fn test_timeout_display_exact() {
        assert_eq!(SlError::Timeout.to_string(), "Request timeout");
    }

    #[test]
    fn test_or_internal_wraps_untyped() {
        let err = SlError::Http("connection reset".into()).or_internal("user lookup failed");
        match err {
            SlError::Internal(msg) => {
                assert!(msg.contains("user lookup failed"));
                assert!(msg.contains("connection reset"));
            }
            other => panic!("expected Internal, got {other:?}"),
        }
    }

    #[test]
    fn test_or_internal_passes_typed_through() {
        let err = SlError::NotFound("user u1".into()).or_internal("ctx");
        assert!(matches!(err, SlError::NotFound(_)));

        let err = SlError::Timeout.or_internal("ctx");
        assert!(matches!(err, SlError::Timeout));
    }
}

//! Backend response envelope types.
//!
//! All backend REST responses follow a common envelope format with status,
//! message, and optional data/error fields.

use serde::{Deserialize, Serialize};

/// Standard backend response envelope.
///
/// ```json
/// { "status": 200, "message": "Success", "data": { ... } }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T = serde_json::Value> {
    /// HTTP-like status code from the backend.
    pub status: u16,
    /// Human-readable message.
    #[serde(default)]
    pub message: String,
    /// Response payload data (type varies by endpoint).
    pub data: Option<T>,
    /// Error details (present only on error responses).
    pub error: Option<ApiError>,
}

/// Backend error detail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error type identifier.
    #[serde(rename = "type")]
    pub error_type: Option<String>,
    /// Error message.
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Whether the response indicates success (status 200).
    pub fn is_success(&self) -> bool {
        self.status == 200
    }

    /// Whether the response indicates an error.
    pub fn is_error(&self) -> bool {
        self.status != 200
    }

    /// Get the error message if this is an error response.
    pub fn error_message(&self) -> Option<String> {
        if self.is_error() {
            self.error
                .as_ref()
                .and_then(|e| e.message.clone())
                .or_else(|| Some(self.message.clone()))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_success() {
        let json = r#"{"status":200,"message":"Success","data":{"id":"u1"}}"#;
        let resp: ApiResponse = serde_json::from_str(json).unwrap();
        assert!(resp.is_success());
        assert!(resp.error_message().is_none());
    }

    #[test]
    fn test_response_error() {
        let json = r#"{"status":400,"message":"Bad request","error":{"type":"validation","message":"missing field"}}"#;
        let resp: ApiResponse = serde_json::from_str(json).unwrap();
        assert!(resp.is_error());
        assert_eq!(resp.error_message().unwrap(), "missing field");
    }

    #[test]
    fn test_response_error_falls_back_to_message() {
        let json = r#"{"status":500,"message":"boom","data":null}"#;
        let resp: ApiResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.error_message().unwrap(), "boom");
    }
}

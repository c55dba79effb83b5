//! Standardized API response envelopes.

use serde::{Deserialize, Serialize};

/// Standard successful API response wrapper.
///
/// ```json
/// { "success": true, "message": "Post created successfully", "data": { ... } }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }
}

/// Failure envelope.
///
/// `message` is a short summary chosen by the handler layer, `error` carries
/// the underlying reason (for validation failures, the violated rule).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,

    /// A short, human-readable summary of the failure.
    pub message: String,

    /// The specific reason, when it is safe to surface.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Request ID for debugging purposes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            error: None,
            request_id: None,
        }
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    // Common error constructors
    pub fn validation(reason: impl Into<String>) -> Self {
        Self::new("Validation failed").with_error(reason)
    }

    pub fn bad_request(reason: impl Into<String>) -> Self {
        Self::new("Invalid request").with_error(reason)
    }

    pub fn unauthorized(reason: impl Into<String>) -> Self {
        Self::new("Authentication required").with_error(reason)
    }

    pub fn not_found(reason: impl Into<String>) -> Self {
        Self::new("Resource not found").with_error(reason)
    }

    pub fn internal_error() -> Self {
        Self::new("Internal server error")
    }
}

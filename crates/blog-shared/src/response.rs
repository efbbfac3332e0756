//! Standardized API error body.

use serde::{Deserialize, Serialize};

/// Error body returned with every non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// The HTTP status code.
    pub code: u16,

    /// A short, human-readable summary of the problem type.
    pub title: String,

    /// A human-readable explanation specific to this occurrence.
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: u16, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            title: title.into(),
            message: message.into(),
        }
    }

    // Common error constructors
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(400, "Bad Request", message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(404, "Not Found", message)
    }

    pub fn method_not_allowed(message: impl Into<String>) -> Self {
        Self::new(405, "Method Not Allowed", message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(409, "Conflict", message)
    }

    /// `message` must be generic; internal details belong in logs.
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(500, "Internal Server Error", message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_request_body() {
        let body = serde_json::to_value(ErrorResponse::bad_request("Missing `title`")).unwrap();
        assert_eq!(body["code"], 400);
        assert_eq!(body["title"], "Bad Request");
        assert_eq!(body["message"], "Missing `title`");
    }

    #[test]
    fn test_internal_error_body() {
        let body = ErrorResponse::internal_error("Database error");
        assert_eq!(body.code, 500);
        assert_eq!(body.title, "Internal Server Error");
        assert_eq!(body.message, "Database error");
    }
}

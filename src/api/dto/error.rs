//! Error and generic response DTOs.

use serde::Serialize;
use utoipa::ToSchema;

/// Standard error body. The primary field is `error`, a human-readable
/// message; `code` and `request_id` are optional extras for clients that
/// want them.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: None,
            request_id: None,
        }
    }

    pub fn with_code(mut self, code: &str) -> Self {
        self.code = Some(code.to_string());
        self
    }

    pub fn with_request_id(mut self, request_id: &str) -> Self {
        self.request_id = Some(request_id.to_string());
        self
    }
}

/// Body returned by every DELETE route.
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteResponse {
    pub success: bool,
}

impl DeleteResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_omits_empty_extras() {
        let body = serde_json::to_value(ErrorResponse::new("boom")).unwrap();
        assert_eq!(body, serde_json::json!({"error": "boom"}));

        let body =
            serde_json::to_value(ErrorResponse::new("boom").with_code("DATABASE_ERROR")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"error": "boom", "code": "DATABASE_ERROR"})
        );
    }

    #[test]
    fn delete_body_shape() {
        let body = serde_json::to_value(DeleteResponse::ok()).unwrap();
        assert_eq!(body, serde_json::json!({"success": true}));
    }
}

//! Maps `AppError` onto HTTP responses.
//!
//! Every error renders as a JSON body whose primary field is `error`.
//! Store-level failures return 500 with the underlying database message
//! passed through verbatim; the admin UI surfaces it directly and the
//! backend is not exposed to untrusted callers.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::api::dto::ErrorResponse;
use crate::error::AppError;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::NotFound { .. } => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new(self.to_string()).with_code("NOT_FOUND"),
            ),
            AppError::Duplicate { .. } => (
                StatusCode::CONFLICT,
                ErrorResponse::new(self.to_string()).with_code("DUPLICATE"),
            ),
            AppError::Validation { .. } => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new(self.to_string()).with_code("VALIDATION_ERROR"),
            ),
            AppError::BadRequest { message } => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new(message.clone()).with_code("BAD_REQUEST"),
            ),
            AppError::Unauthorized { message } => (
                StatusCode::UNAUTHORIZED,
                ErrorResponse::new(message.clone()).with_code("UNAUTHORIZED"),
            ),
            AppError::Forbidden { message } => (
                StatusCode::FORBIDDEN,
                ErrorResponse::new(message.clone()).with_code("FORBIDDEN"),
            ),
            // Only reached when the service-credential retry failed too.
            AppError::PermissionDenied { message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new(message.clone()).with_code("PERMISSION_DENIED"),
            ),
            AppError::Database { source, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new(source.to_string()).with_code("DATABASE_ERROR"),
            ),
            AppError::Configuration { key, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new(format!("Configuration error: {}", key))
                    .with_code("CONFIGURATION_ERROR"),
            ),
            AppError::ConnectionPool { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new("Database connection unavailable")
                    .with_code("CONNECTION_POOL_ERROR"),
            ),
            AppError::Internal { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new("An internal error occurred").with_code("INTERNAL_ERROR"),
            ),
        };

        if status.is_server_error() {
            tracing::error!(status = %status, error = %self, "request failed");
        }

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn database_error_passes_message_through_verbatim() {
        let err = AppError::Database {
            operation: "insert category".to_string(),
            source: anyhow::anyhow!("duplicate key value violates unique constraint \"categories_slug_key\""),
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(
            body["error"],
            "duplicate key value violates unique constraint \"categories_slug_key\""
        );
    }

    #[tokio::test]
    async fn unauthorized_maps_to_401() {
        let err = AppError::Unauthorized {
            message: "Missing authorization header".to_string(),
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body = body_json(response).await;
        assert_eq!(body["error"], "Missing authorization header");
    }

    #[tokio::test]
    async fn validation_maps_to_400_with_error_field() {
        let err = AppError::Validation {
            field: "name".to_string(),
            reason: "must not be empty".to_string(),
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert!(body["error"].as_str().unwrap().contains("name"));
    }

    #[tokio::test]
    async fn not_found_maps_to_404() {
        let err = AppError::NotFound {
            entity: "product".to_string(),
            field: "id".to_string(),
            value: "abc".to_string(),
        };
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }
}

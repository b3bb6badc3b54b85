use axum::extract::{
    FromRequest, FromRequestParts, Json, Query, Request,
    rejection::{JsonRejection, QueryRejection},
};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::{AppError, AppResult};

/// JSON extractor that runs `validator` rules after deserialization.
///
/// Malformed bodies become `AppError::BadRequest`, rule violations become
/// `AppError::Validation`; both render as a 400 with `{"error": ...}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> AppResult<Self> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}

/// Query-string extractor with the same validation behavior as [`ValidatedJson`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> AppResult<Self> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(AppError::from)?;
        value.validate()?;
        Ok(ValidatedQuery(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Method, header};
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Debug, Deserialize, Validate)]
    struct TestPayload {
        #[validate(length(min = 1, max = 120, message = "Name must not be empty"))]
        name: String,
        #[validate(range(min = 0, message = "Position must be non-negative"))]
        position: i32,
    }

    fn json_request(body: &str) -> Request {
        Request::builder()
            .method(Method::POST)
            .uri("/test")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_json() {
        let request = json_request(r#"{"name": "Chairs", "position": 0}"#);
        let result = ValidatedJson::<TestPayload>::from_request(request, &()).await;

        assert!(result.is_ok());
        let ValidatedJson(payload) = result.unwrap();
        assert_eq!(payload.name, "Chairs");
        assert_eq!(payload.position, 0);
    }

    #[tokio::test]
    async fn test_validation_error_empty_name() {
        let request = json_request(r#"{"name": "", "position": 0}"#);
        let result = ValidatedJson::<TestPayload>::from_request(request, &()).await;

        assert!(result.is_err());
        match result.unwrap_err() {
            AppError::Validation { field, reason } => {
                assert_eq!(field, "name");
                assert!(reason.contains("must not be empty"));
            }
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let request = json_request(r#"{"name": "Chairs""#);
        let result = ValidatedJson::<TestPayload>::from_request(request, &()).await;

        assert!(result.is_err());
        match result.unwrap_err() {
            AppError::BadRequest { message } => assert!(!message.is_empty()),
            other => panic!("Expected BadRequest error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_field_is_bad_request() {
        let request = json_request(r#"{"name": "Chairs"}"#);
        let result = ValidatedJson::<TestPayload>::from_request(request, &()).await;

        assert!(matches!(result, Err(AppError::BadRequest { .. })));
    }

    #[derive(Debug, Deserialize, Validate)]
    struct TestQuery {
        #[validate(range(min = 1, max = 100, message = "Limit must be between 1 and 100"))]
        limit: u32,
    }

    #[tokio::test]
    async fn test_valid_query() {
        let request = Request::builder()
            .method(Method::GET)
            .uri("/test?limit=25")
            .body(Body::empty())
            .unwrap();
        let (mut parts, _) = request.into_parts();

        let result = ValidatedQuery::<TestQuery>::from_request_parts(&mut parts, &()).await;
        assert!(result.is_ok());
        assert_eq!(result.unwrap().0.limit, 25);
    }

    #[tokio::test]
    async fn test_query_out_of_range() {
        let request = Request::builder()
            .method(Method::GET)
            .uri("/test?limit=500")
            .body(Body::empty())
            .unwrap();
        let (mut parts, _) = request.into_parts();

        let result = ValidatedQuery::<TestQuery>::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result, Err(AppError::Validation { .. })));
    }
}

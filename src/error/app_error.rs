use crate::error::DatabaseErrorConverter;
use thiserror::Error;

/// Application-wide error type that represents all possible errors in the system.
///
/// This enum provides structured error handling for the admin API, supporting
/// automatic conversion from anyhow and diesel errors and carrying enough
/// context for both logging and client responses.
#[derive(Error, Debug)]
pub enum AppError {
    /// Resource not found error with entity, field, and value information
    #[error("Resource not found: {entity} with {field}={value}")]
    NotFound {
        entity: String,
        field: String,
        value: String,
    },

    /// Duplicate entry error for unique constraint violations
    #[error("Duplicate entry: {entity}.{field} = '{value}' already exists")]
    Duplicate {
        entity: String,
        field: String,
        value: String,
    },

    /// Validation error with field-specific details
    #[error("Validation failed for {field}: {reason}")]
    Validation { field: String, reason: String },

    /// Bad request error with descriptive message
    #[error("Bad request: {message}")]
    BadRequest { message: String },

    /// Unauthorized access error with authentication message
    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    /// Forbidden access error with authorization message
    #[error("Forbidden: {message}")]
    Forbidden { message: String },

    /// Permission-denied signal from the store (SQLSTATE 42501 / row-level
    /// security rejection). Mutations retry exactly once with the service
    /// credential when they see this variant.
    #[error("Permission denied by store: {message}")]
    PermissionDenied { message: String },

    /// Database operation error with operation context
    #[error("Database operation failed: {operation}: {source}")]
    Database {
        operation: String,
        #[source]
        source: anyhow::Error,
    },

    /// Configuration error with key information
    #[error("Configuration error: {key}")]
    Configuration {
        key: String,
        #[source]
        source: anyhow::Error,
    },

    /// Connection pool error
    #[error("Connection pool error")]
    ConnectionPool {
        #[source]
        source: anyhow::Error,
    },

    /// Internal error for unexpected failures
    #[error("Internal error")]
    Internal {
        #[source]
        source: anyhow::Error,
    },
}

impl AppError {
    /// Whether this error is the permission-denied signal that triggers the
    /// one-shot service-credential retry. Any other error never escalates.
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, AppError::PermissionDenied { .. })
    }

    /// Whether this error looks like a transient connectivity failure worth
    /// retrying on the read path. Permission errors are deliberately excluded.
    pub fn is_transient(&self) -> bool {
        match self {
            AppError::ConnectionPool { .. } => true,
            AppError::Database { source, .. } => {
                let msg = source.to_string().to_lowercase();
                msg.contains("connection") || msg.contains("timed out") || msg.contains("broken")
            }
            _ => false,
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::Internal { source: error }
    }
}

impl From<diesel::result::Error> for AppError {
    fn from(error: diesel::result::Error) -> Self {
        DatabaseErrorConverter::convert_diesel_error(error, "database operation")
    }
}

impl From<diesel::ConnectionError> for AppError {
    fn from(error: diesel::ConnectionError) -> Self {
        AppError::Database {
            operation: "establish connection".to_string(),
            source: anyhow::Error::from(error),
        }
    }
}

impl From<diesel_async::pooled_connection::bb8::RunError> for AppError {
    fn from(error: diesel_async::pooled_connection::bb8::RunError) -> Self {
        AppError::ConnectionPool {
            source: anyhow::Error::from(error),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        // Report the first field error; the full set is in the Display output.
        let (field, reason) = errors
            .field_errors()
            .into_iter()
            .next()
            .map(|(field, errs)| {
                let reason = errs
                    .first()
                    .and_then(|e| e.message.as_ref())
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "invalid value".to_string());
                (field.to_string(), reason)
            })
            .unwrap_or_else(|| ("request".to_string(), "validation failed".to_string()));
        AppError::Validation { field, reason }
    }
}

impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        AppError::BadRequest {
            message: rejection.body_text(),
        }
    }
}

impl From<axum::extract::rejection::QueryRejection> for AppError {
    fn from(rejection: axum::extract::rejection::QueryRejection) -> Self {
        AppError::BadRequest {
            message: rejection.body_text(),
        }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permission_denied_is_detected() {
        let err = AppError::PermissionDenied {
            message: "permission denied for table categories".to_string(),
        };
        assert!(err.is_permission_denied());
        assert!(!err.is_transient());
    }

    #[test]
    fn other_errors_never_escalate() {
        let err = AppError::Duplicate {
            entity: "category".to_string(),
            field: "slug".to_string(),
            value: "sale".to_string(),
        };
        assert!(!err.is_permission_denied());

        let err = AppError::Database {
            operation: "insert category".to_string(),
            source: anyhow::anyhow!("syntax error at or near \"??\""),
        };
        assert!(!err.is_permission_denied());
    }

    #[test]
    fn connection_class_errors_are_transient() {
        let err = AppError::ConnectionPool {
            source: anyhow::anyhow!("pool timed out"),
        };
        assert!(err.is_transient());

        let err = AppError::Database {
            operation: "list categories".to_string(),
            source: anyhow::anyhow!("connection reset by peer"),
        };
        assert!(err.is_transient());
    }
}

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use regex::Regex;
use std::sync::OnceLock;

use crate::error::AppError;

/// Utility for converting database errors to structured AppError variants.
///
/// Constraint violations are parsed out of the Postgres detail text; a
/// permission-denied or row-level-security rejection becomes the dedicated
/// `PermissionDenied` variant so the mutation path can escalate on it.
pub struct DatabaseErrorConverter;

/// Postgres detail line for key violations: `Key (field)=(value) ...`.
fn key_detail_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"Key \((?P<field>[^)]+)\)=\((?P<value>[^)]*)\)").unwrap())
}

/// Table name out of messages like `... relation "products" ...`.
fn relation_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"(?:relation|table) "(?P<table>[^"]+)""#).unwrap())
}

impl DatabaseErrorConverter {
    /// Converts a Diesel error to an appropriate AppError variant.
    pub fn convert_diesel_error(error: DieselError, operation: &str) -> AppError {
        match error {
            DieselError::DatabaseError(kind, info) => {
                Self::convert_database_error(kind, info, operation)
            }
            DieselError::NotFound => AppError::NotFound {
                entity: "resource".to_string(),
                field: "id".to_string(),
                value: "unknown".to_string(),
            },
            other => AppError::Database {
                operation: operation.to_string(),
                source: anyhow::Error::from(other),
            },
        }
    }

    fn convert_database_error(
        kind: DatabaseErrorKind,
        info: Box<dyn diesel::result::DatabaseErrorInformation + Send + Sync>,
        operation: &str,
    ) -> AppError {
        let message = info.message().to_string();

        if Self::is_permission_denied_message(&message) {
            return AppError::PermissionDenied { message };
        }

        let entity = relation_regex()
            .captures(&message)
            .and_then(|c| c.name("table"))
            .map(|m| m.as_str().to_string())
            .or_else(|| info.table_name().map(|t| t.to_string()))
            .unwrap_or_else(|| "resource".to_string());

        let key_detail = info
            .details()
            .and_then(|d| key_detail_regex().captures(d))
            .map(|c| (c["field"].to_string(), c["value"].to_string()));

        match kind {
            DatabaseErrorKind::UniqueViolation => {
                let (field, value) =
                    key_detail.unwrap_or_else(|| ("unknown".to_string(), "unknown".to_string()));
                AppError::Duplicate {
                    entity,
                    field,
                    value,
                }
            }
            DatabaseErrorKind::NotNullViolation => {
                let field = info
                    .column_name()
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "unknown".to_string());
                AppError::Validation {
                    field,
                    reason: format!("Field is required for {}", entity),
                }
            }
            DatabaseErrorKind::ForeignKeyViolation => {
                let (field, value) =
                    key_detail.unwrap_or_else(|| ("unknown".to_string(), "unknown".to_string()));
                AppError::Validation {
                    field,
                    reason: format!("Invalid reference to {} with value '{}'", entity, value),
                }
            }
            _ => AppError::Database {
                operation: operation.to_string(),
                source: anyhow::Error::msg(message),
            },
        }
    }

    /// Permission signature from the store. Diesel does not expose the
    /// SQLSTATE for non-constraint errors, so this matches the server message
    /// text for 42501-class rejections.
    fn is_permission_denied_message(message: &str) -> bool {
        let lower = message.to_lowercase();
        lower.contains("permission denied") || lower.contains("row-level security")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockInfo {
        message: String,
        details: Option<String>,
        table: Option<String>,
        column: Option<String>,
    }

    impl diesel::result::DatabaseErrorInformation for MockInfo {
        fn message(&self) -> &str {
            &self.message
        }
        fn details(&self) -> Option<&str> {
            self.details.as_deref()
        }
        fn hint(&self) -> Option<&str> {
            None
        }
        fn table_name(&self) -> Option<&str> {
            self.table.as_deref()
        }
        fn column_name(&self) -> Option<&str> {
            self.column.as_deref()
        }
        fn constraint_name(&self) -> Option<&str> {
            None
        }
        fn statement_position(&self) -> Option<i32> {
            None
        }
    }

    fn db_error(kind: DatabaseErrorKind, info: MockInfo) -> DieselError {
        DieselError::DatabaseError(kind, Box::new(info))
    }

    #[test]
    fn permission_denied_message_becomes_permission_variant() {
        let err = db_error(
            DatabaseErrorKind::Unknown,
            MockInfo {
                message: "permission denied for table categories".to_string(),
                details: None,
                table: None,
                column: None,
            },
        );
        let app = DatabaseErrorConverter::convert_diesel_error(err, "insert category");
        assert!(app.is_permission_denied());
    }

    #[test]
    fn row_level_security_rejection_becomes_permission_variant() {
        let err = db_error(
            DatabaseErrorKind::Unknown,
            MockInfo {
                message: "new row violates row-level security policy for table \"banners\""
                    .to_string(),
                details: None,
                table: None,
                column: None,
            },
        );
        let app = DatabaseErrorConverter::convert_diesel_error(err, "insert banner");
        assert!(app.is_permission_denied());
    }

    #[test]
    fn unique_violation_parses_field_and_value() {
        let err = db_error(
            DatabaseErrorKind::UniqueViolation,
            MockInfo {
                message: "duplicate key value violates unique constraint \"categories_slug_key\""
                    .to_string(),
                details: Some("Key (slug)=(sale) already exists.".to_string()),
                table: Some("categories".to_string()),
                column: None,
            },
        );
        match DatabaseErrorConverter::convert_diesel_error(err, "insert category") {
            AppError::Duplicate {
                entity,
                field,
                value,
            } => {
                assert_eq!(entity, "categories");
                assert_eq!(field, "slug");
                assert_eq!(value, "sale");
            }
            other => panic!("expected Duplicate, got {:?}", other),
        }
    }

    #[test]
    fn foreign_key_violation_becomes_validation() {
        let err = db_error(
            DatabaseErrorKind::ForeignKeyViolation,
            MockInfo {
                message: "insert or update on table \"homepage_items\" violates foreign key constraint"
                    .to_string(),
                details: Some(
                    "Key (section_id)=(8c1b2f7e-0000-0000-0000-000000000000) is not present in table \"homepage_sections\"."
                        .to_string(),
                ),
                table: Some("homepage_items".to_string()),
                column: None,
            },
        );
        match DatabaseErrorConverter::convert_diesel_error(err, "insert homepage item") {
            AppError::Validation { field, .. } => assert_eq!(field, "section_id"),
            other => panic!("expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn not_found_maps_to_not_found() {
        let app = DatabaseErrorConverter::convert_diesel_error(DieselError::NotFound, "get row");
        assert!(matches!(app, AppError::NotFound { .. }));
    }
}

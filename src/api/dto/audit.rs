//! Audit listing DTOs.

use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, IntoParams)]
pub struct AuditQuery {
    /// Maximum number of entries to return, newest first.
    #[validate(range(min = 1, max = 500, message = "Limit must be between 1 and 500"))]
    pub limit: Option<i64>,
}

impl AuditQuery {
    pub fn limit_or_default(&self) -> i64 {
        self.limit.unwrap_or(100)
    }
}

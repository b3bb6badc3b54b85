//! Audit log queries.

use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::error::{AppError, AppResult};
use crate::models::{AuditEntry, NewAuditEntry};

/// Appends one audit row.
pub async fn append(conn: &mut AsyncPgConnection, entry: NewAuditEntry) -> AppResult<AuditEntry> {
    use crate::schema::audit_log::dsl::*;

    diesel::insert_into(audit_log)
        .values(&entry)
        .returning(AuditEntry::as_returning())
        .get_result(conn)
        .await
        .map_err(AppError::from)
}

/// Lists the most recent audit entries, newest first.
pub async fn list_recent(conn: &mut AsyncPgConnection, limit: i64) -> AppResult<Vec<AuditEntry>> {
    use crate::schema::audit_log::dsl::*;

    audit_log
        .order(id.desc())
        .limit(limit)
        .select(AuditEntry::as_select())
        .load(conn)
        .await
        .map_err(AppError::from)
}

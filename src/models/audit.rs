//! Audit log models.
//!
//! Every successful admin mutation appends exactly one row here. Writes are
//! best-effort: a failed append is logged and swallowed, never surfaced.

use chrono::NaiveDateTime;
use diesel::AsExpression;
use diesel::FromSqlRow;
use diesel::deserialize::{self, FromSql};
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::serialize::{self, Output, ToSql};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::schema::sql_types::AuditAction as AuditActionType;

/// Kind of mutation recorded in the audit log.
///
/// Maps to the `audit_action` Postgres enum.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    utoipa::ToSchema,
    AsExpression,
    FromSqlRow,
)]
#[diesel(sql_type = AuditActionType)]
#[serde(rename_all = "lowercase")]
pub enum AuditAction {
    Create,
    Update,
    Delete,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditAction::Create => "create",
            AuditAction::Update => "update",
            AuditAction::Delete => "delete",
        }
    }
}

impl ToSql<AuditActionType, Pg> for AuditAction {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        out.write_all(self.as_str().as_bytes())?;
        Ok(serialize::IsNull::No)
    }
}

impl FromSql<AuditActionType, Pg> for AuditAction {
    fn from_sql(
        bytes: <Pg as diesel::backend::Backend>::RawValue<'_>,
    ) -> deserialize::Result<Self> {
        match bytes.as_bytes() {
            b"create" => Ok(AuditAction::Create),
            b"update" => Ok(AuditAction::Update),
            b"delete" => Ok(AuditAction::Delete),
            other => Err(format!(
                "Unrecognized audit_action: {}",
                String::from_utf8_lossy(other)
            )
            .into()),
        }
    }
}

/// Audit entry model for reading from database.
#[derive(Debug, Queryable, Selectable, Serialize, Clone, utoipa::ToSchema)]
#[diesel(table_name = crate::schema::audit_log)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AuditEntry {
    pub id: i64,
    pub actor_id: i32,
    pub actor_email: String,
    pub entity_type: String,
    pub entity_id: String,
    pub action: AuditAction,
    pub created_at: NaiveDateTime,
}

/// NewAuditEntry model for appending audit rows.
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::audit_log)]
pub struct NewAuditEntry {
    pub actor_id: i32,
    pub actor_email: String,
    pub entity_type: String,
    pub entity_id: String,
    pub action: AuditAction,
}

//! Audit trail for admin mutations.
//!
//! Exactly one entry is attempted per successful mutation, regardless of
//! which credential performed it. The append is best-effort: a failed audit
//! write is logged at warn level and swallowed so it can never fail or roll
//! back the mutation it describes.

use crate::db::Db;
use crate::error::AppResult;
use crate::models::{AuditAction, AuditEntry, NewAuditEntry};
use crate::repositories::audit_repo;

/// Identity of the admin performing a mutation, taken from the session token.
#[derive(Debug, Clone)]
pub struct Actor {
    pub id: i32,
    pub email: String,
}

/// Best-effort audit recorder.
#[derive(Clone)]
pub struct AuditService {
    db: Db,
}

impl AuditService {
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    /// Records one mutation. Never returns an error.
    pub async fn record(&self, actor: &Actor, entity_type: &str, entity_id: &str, action: AuditAction) {
        let entry = NewAuditEntry {
            actor_id: actor.id,
            actor_email: actor.email.clone(),
            entity_type: entity_type.to_string(),
            entity_id: entity_id.to_string(),
            action,
        };

        let result = async {
            let mut conn = self.db.session().await?;
            audit_repo::append(&mut conn, entry).await
        }
        .await;

        if let Err(err) = result {
            tracing::warn!(
                entity_type,
                entity_id,
                action = action.as_str(),
                error = %err,
                "failed to append audit entry"
            );
        }
    }

    /// Recent audit entries for the admin activity view.
    pub async fn list_recent(&self, limit: i64) -> AppResult<Vec<AuditEntry>> {
        self.db
            .read("list audit entries", |conn| {
                Box::pin(audit_repo::list_recent(conn, limit))
            })
            .await
    }
}

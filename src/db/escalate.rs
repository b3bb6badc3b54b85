//! Privilege-escalation retry for mutating operations.
//!
//! Row-level policies on the store sometimes reject the session credential
//! for operations the application considers legitimate (cross-table
//! cascading writes, mostly). The mutation path retries exactly once with
//! the service credential when it sees the permission-denied signal, and
//! logs a warning each time it does. This is an intentional, observable
//! authorization bypass; do not widen or silence it.

use diesel_async::AsyncPgConnection;
use futures::future::BoxFuture;

use crate::db::Db;
use crate::error::{AppError, AppResult};

/// State machine outcome of the first attempt.
fn needs_escalation<T>(result: &AppResult<T>) -> bool {
    matches!(result, Err(err) if err.is_permission_denied())
}

impl Db {
    /// Runs a mutating operation with the session credential, escalating to
    /// the service credential on a permission-denied error.
    ///
    /// `op` is the identical logical operation re-issued on escalation, so it
    /// must be repeatable; callers clone their input into the future. Any
    /// error other than the permission signal fails immediately. The second
    /// attempt, if it also fails, propagates without further retries.
    pub async fn mutate<T, F>(&self, operation: &str, op: F) -> AppResult<T>
    where
        F: for<'c> Fn(&'c mut AsyncPgConnection) -> BoxFuture<'c, AppResult<T>>,
    {
        let first = {
            let mut conn = self.session().await?;
            op(&mut conn).await
        };

        if !needs_escalation(&first) {
            return first;
        }
        let denial = match first {
            Err(err) => err,
            Ok(_) => unreachable!("needs_escalation only matches Err"),
        };

        tracing::warn!(
            operation,
            error = %denial,
            "session credential rejected by store, retrying once with service credential"
        );

        let mut service = self.service_conn().await?;
        let second = op(&mut service).await;
        match &second {
            Ok(_) => tracing::info!(operation, "service-credential retry succeeded"),
            Err(err) => tracing::error!(operation, error = %err, "service-credential retry failed"),
        }
        second
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permission_denied_triggers_escalation() {
        let result: AppResult<()> = Err(AppError::PermissionDenied {
            message: "permission denied for table products".to_string(),
        });
        assert!(needs_escalation(&result));
    }

    #[test]
    fn success_does_not_escalate() {
        let result: AppResult<u32> = Ok(1);
        assert!(!needs_escalation(&result));
    }

    #[test]
    fn non_permission_errors_do_not_escalate() {
        let duplicate: AppResult<()> = Err(AppError::Duplicate {
            entity: "products".to_string(),
            field: "slug".to_string(),
            value: "widget".to_string(),
        });
        assert!(!needs_escalation(&duplicate));

        let db: AppResult<()> = Err(AppError::Database {
            operation: "insert product".to_string(),
            source: anyhow::anyhow!("value too long for type character varying(255)"),
        });
        assert!(!needs_escalation(&db));

        let transient: AppResult<()> = Err(AppError::ConnectionPool {
            source: anyhow::anyhow!("pool timed out"),
        });
        assert!(!needs_escalation(&transient));
    }
}

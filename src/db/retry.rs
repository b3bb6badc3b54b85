//! Bounded retry for read-only queries.
//!
//! Purely a resilience measure against flaky connectivity: transient
//! connection-class errors are retried a small number of times with a short
//! fixed backoff. Permission errors never retry here and never escalate.

use std::time::Duration;

use diesel_async::AsyncPgConnection;
use futures::future::BoxFuture;

use crate::db::Db;
use crate::error::AppResult;

const RETRY_DELAY: Duration = Duration::from_millis(100);

impl Db {
    /// Runs a read-only query with the session credential, retrying on
    /// transient errors up to `database.read_retry_attempts` times. Each
    /// attempt checks out a fresh pooled connection.
    pub async fn read<T, F>(&self, operation: &str, op: F) -> AppResult<T>
    where
        F: for<'c> Fn(&'c mut AsyncPgConnection) -> BoxFuture<'c, AppResult<T>>,
    {
        let attempts = self.config().read_retry_attempts.max(1);
        let mut attempt = 0u32;
        loop {
            attempt += 1;
            let result = match self.session().await {
                Ok(mut conn) => op(&mut conn).await,
                Err(err) => Err(err),
            };
            match result {
                Err(err) if err.is_transient() && attempt < attempts => {
                    tracing::warn!(
                        operation,
                        attempt,
                        error = %err,
                        "transient read failure, retrying"
                    );
                    tokio::time::sleep(RETRY_DELAY * attempt).await;
                }
                other => return other,
            }
        }
    }
}

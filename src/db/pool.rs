//! Async database connection handling for both credentials.
//!
//! The session credential is a bb8 pool over the restricted role; the service
//! credential is never pooled — it is a fresh connection established per
//! escalation from `database.service_url`.

use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::bb8::{Pool, PooledConnection};
use diesel_async::{AsyncConnection, AsyncPgConnection};
use diesel_migrations::{EmbeddedMigrations, embed_migrations};

use crate::config::settings::DatabaseConfig;
use crate::error::{AppError, AppResult};

/// Embedded SQL migrations, applied by the `migrate` subcommand or on
/// startup when `database.auto_migrate` is set.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Async connection pool type alias.
///
/// bb8::Pool internally uses Arc, so Clone is cheap (just reference count
/// increment).
pub type AsyncDbPool = Pool<AsyncPgConnection>;

/// Database handle carrying the session pool and the service-credential
/// configuration. Cloning is cheap.
#[derive(Clone)]
pub struct Db {
    pool: AsyncDbPool,
    config: DatabaseConfig,
}

impl Db {
    /// Builds the session pool from configuration.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(&config.url);
        let pool = Pool::builder()
            .max_size(config.max_connections)
            .min_idle(Some(config.min_connections))
            .connection_timeout(std::time::Duration::from_secs(config.connection_timeout))
            .build(manager)
            .await
            .map_err(|e| AppError::ConnectionPool {
                source: anyhow::Error::from(e),
            })?;
        Ok(Self {
            pool,
            config: config.clone(),
        })
    }

    /// Direct access to the session pool, for health checks.
    pub fn pool(&self) -> &AsyncDbPool {
        &self.pool
    }

    pub fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    /// Checks out a pooled connection with the session credential.
    pub async fn session(&self) -> AppResult<PooledConnection<'_, AsyncPgConnection>> {
        self.pool.get().await.map_err(AppError::from)
    }

    /// Establishes a fresh service-credential connection.
    ///
    /// Constructed lazily per call and never cached or pooled. A missing
    /// `database.service_url` is a fatal configuration error.
    pub async fn service_conn(&self) -> AppResult<AsyncPgConnection> {
        if self.config.service_url.is_empty() {
            return Err(AppError::Configuration {
                key: "database.service_url".to_string(),
                source: anyhow::anyhow!(
                    "service credential requested but database.service_url is not configured"
                ),
            });
        }
        AsyncPgConnection::establish(&self.config.service_url)
            .await
            .map_err(AppError::from)
    }
}

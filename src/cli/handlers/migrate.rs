//! Migrate command handler
//!
//! Handles database migration operations including dry-run and rollback.
//! Migrations run over a blocking diesel connection on the session
//! credential, moved onto the blocking thread pool.

use crate::config::settings::Settings;
use crate::db::MIGRATIONS;
use crate::error::{AppError, AppResult};

/// Handler for the migrate command
pub struct MigrateCommandHandler {
    config: Settings,
}

impl MigrateCommandHandler {
    pub fn new(config: Settings) -> Self {
        Self { config }
    }

    /// Execute the migrate command.
    ///
    /// `dry_run` lists pending migrations without applying them; `rollback`
    /// reverts the given number of most recent migrations.
    pub async fn execute(&self, dry_run: bool, rollback: Option<u32>) -> AppResult<()> {
        self.config.database.validate()?;

        if dry_run {
            return self.show_pending_migrations().await;
        }

        if let Some(steps) = rollback {
            self.rollback_migrations(steps).await
        } else {
            self.run_migrations().await
        }
    }

    async fn show_pending_migrations(&self) -> AppResult<()> {
        println!("Checking for pending migrations...");

        let database_url = self.config.database.url.clone();
        let pending: Vec<String> = tokio::task::spawn_blocking(move || {
            let mut conn = establish(&database_url)?;

            use diesel_migrations::MigrationHarness;
            let pending = conn
                .pending_migrations(MIGRATIONS)
                .map_err(|e| migration_error("check pending migrations", e))?;

            Ok::<_, AppError>(pending.iter().map(|m| m.name().to_string()).collect())
        })
        .await
        .map_err(join_error)??;

        if pending.is_empty() {
            println!("No pending migrations - database is up to date");
        } else {
            println!("Found {} pending migration(s):", pending.len());
            for name in &pending {
                println!("  - {}", name);
            }
            println!("\nRun without --dry-run to apply these migrations");
        }

        Ok(())
    }

    async fn run_migrations(&self) -> AppResult<()> {
        println!("Running database migrations...");

        let database_url = self.config.database.url.clone();
        let applied: Vec<String> = tokio::task::spawn_blocking(move || {
            let mut conn = establish(&database_url)?;

            use diesel_migrations::MigrationHarness;
            let applied = conn
                .run_pending_migrations(MIGRATIONS)
                .map_err(|e| migration_error("run pending migrations", e))?;

            Ok::<_, AppError>(applied.iter().map(|m| m.to_string()).collect())
        })
        .await
        .map_err(join_error)??;

        if applied.is_empty() {
            println!("No migrations to apply - database is already up to date");
        } else {
            println!("Applied {} migration(s):", applied.len());
            for name in &applied {
                println!("  - {}", name);
            }
        }

        Ok(())
    }

    async fn rollback_migrations(&self, steps: u32) -> AppResult<()> {
        if steps == 0 {
            return Err(AppError::Validation {
                field: "rollback_steps".to_string(),
                reason: "Number of rollback steps must be greater than 0".to_string(),
            });
        }

        println!("Rolling back {} migration(s)...", steps);

        let database_url = self.config.database.url.clone();
        let reverted: usize = tokio::task::spawn_blocking(move || {
            let mut conn = establish(&database_url)?;

            use diesel_migrations::MigrationHarness;
            let applied = conn
                .applied_migrations()
                .map_err(|e| migration_error("get applied migrations", e))?;

            if applied.len() < steps as usize {
                return Err(AppError::Validation {
                    field: "rollback_steps".to_string(),
                    reason: format!(
                        "Cannot rollback {} migrations - only {} applied",
                        steps,
                        applied.len()
                    ),
                });
            }

            for _ in 0..steps {
                conn.revert_last_migration(MIGRATIONS)
                    .map_err(|e| migration_error("revert migration", e))?;
            }

            Ok::<_, AppError>(steps as usize)
        })
        .await
        .map_err(join_error)??;

        println!("Rolled back {} migration(s)", reverted);
        Ok(())
    }

    pub fn config(&self) -> &Settings {
        &self.config
    }
}

fn establish(database_url: &str) -> AppResult<diesel::pg::PgConnection> {
    use diesel::Connection;
    diesel::pg::PgConnection::establish(database_url).map_err(AppError::from)
}

fn migration_error(
    operation: &str,
    e: Box<dyn std::error::Error + Send + Sync>,
) -> AppError {
    AppError::Database {
        operation: operation.to_string(),
        source: anyhow::anyhow!("Migration error: {}", e),
    }
}

fn join_error(e: tokio::task::JoinError) -> AppError {
    AppError::Internal {
        source: anyhow::Error::from(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_settings() -> Settings {
        let mut settings = Settings::default();
        settings.database.url = "postgres://localhost/vitrine_test".to_string();
        settings
    }

    #[test]
    fn migrate_handler_holds_config() {
        let settings = valid_settings();
        let handler = MigrateCommandHandler::new(settings.clone());
        assert_eq!(handler.config(), &settings);
    }

    #[tokio::test]
    async fn zero_rollback_steps_is_rejected() {
        let handler = MigrateCommandHandler::new(valid_settings());
        let result = handler.execute(false, Some(0)).await;

        match result {
            Err(AppError::Validation { field, reason }) => {
                assert_eq!(field, "rollback_steps");
                assert!(reason.contains("greater than 0"));
            }
            other => panic!("expected validation error, got {:?}", other.err()),
        }
    }

    #[tokio::test]
    async fn empty_database_url_is_rejected() {
        let handler = MigrateCommandHandler::new(Settings::default());
        assert!(handler.execute(true, None).await.is_err());
    }
}

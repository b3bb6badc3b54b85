//! Command executor for dispatching CLI commands
//!
//! Entry point for executing CLI commands after parsing and configuration
//! loading. `serve` without `--dry-run` returns Ok so main can start the
//! server with the merged settings.

use super::handlers::{MigrateCommandHandler, ServeCommandHandler};
use super::parser::{Cli, Commands};
use crate::config::settings::Settings;
use crate::error::{AppError, AppResult};

/// Execute a CLI command with the given settings.
pub async fn execute_command(cli: &Cli, settings: Settings) -> AppResult<()> {
    if let Err(msg) = cli.validate() {
        return Err(AppError::Validation {
            field: "cli_arguments".to_string(),
            reason: msg,
        });
    }

    match &cli.command {
        Some(Commands::Serve { dry_run, .. }) if *dry_run => {
            ServeCommandHandler::new(settings).validate_only().await
        }
        Some(Commands::Serve { .. }) | None => {
            // Actual server startup is handled in main.rs.
            Ok(())
        }
        Some(Commands::Migrate { dry_run, rollback }) => {
            MigrateCommandHandler::new(settings)
                .execute(*dry_run, *rollback)
                .await
        }
    }
}

/// Whether this invocation should start the HTTP server after the command
/// dispatch returns.
pub fn should_start_server(cli: &Cli) -> bool {
    matches!(
        &cli.command,
        None | Some(Commands::Serve { dry_run: false, .. })
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn valid_settings() -> Settings {
        let mut settings = Settings::default();
        settings.database.url = "postgres://localhost/vitrine_test".to_string();
        settings.jwt.secret = "a-test-secret-long-enough-to-pass!!".to_string();
        settings
    }

    #[tokio::test]
    async fn serve_dry_run_validates_and_exits() {
        let cli = Cli::try_parse_from(["vitrine", "serve", "--dry-run"]).unwrap();
        assert!(execute_command(&cli, valid_settings()).await.is_ok());
        assert!(!should_start_server(&cli));
    }

    #[tokio::test]
    async fn serve_defers_startup_to_main() {
        let cli = Cli::try_parse_from(["vitrine", "serve"]).unwrap();
        assert!(execute_command(&cli, valid_settings()).await.is_ok());
        assert!(should_start_server(&cli));
    }

    #[test]
    fn bare_invocation_starts_the_server() {
        let cli = Cli::try_parse_from(["vitrine"]).unwrap();
        assert!(should_start_server(&cli));
    }

    #[test]
    fn migrate_never_starts_the_server() {
        let cli = Cli::try_parse_from(["vitrine", "migrate"]).unwrap();
        assert!(!should_start_server(&cli));
    }
}

//! Serve command handler
//!
//! Handles the serve command's `--dry-run` validation path; the actual
//! server startup lives in `server::Server`.

use crate::config::settings::Settings;
use crate::error::AppResult;

/// Handler for the serve command
pub struct ServeCommandHandler {
    config: Settings,
}

impl ServeCommandHandler {
    pub fn new(config: Settings) -> Self {
        Self { config }
    }

    /// Validate configuration without starting the server.
    pub async fn validate_only(&self) -> AppResult<()> {
        self.config.validate()?;
        self.config.jwt.validate()?;

        println!("Configuration is valid");
        println!("Server would bind to: {}", self.config.server.address());
        println!(
            "Service credential configured: {}",
            !self.config.database.service_url.is_empty()
        );
        println!("Dry run completed successfully");
        Ok(())
    }

    pub fn config(&self) -> &Settings {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_settings() -> Settings {
        let mut settings = Settings::default();
        settings.database.url = "postgres://localhost/vitrine_test".to_string();
        settings.jwt.secret = "a-test-secret-long-enough-to-pass!!".to_string();
        settings
    }

    #[tokio::test]
    async fn dry_run_accepts_valid_config() {
        let handler = ServeCommandHandler::new(valid_settings());
        assert!(handler.validate_only().await.is_ok());
    }

    #[tokio::test]
    async fn dry_run_rejects_invalid_port() {
        let mut settings = valid_settings();
        settings.server.port = 0;
        let handler = ServeCommandHandler::new(settings);
        assert!(handler.validate_only().await.is_err());
    }

    #[tokio::test]
    async fn dry_run_rejects_missing_jwt_secret() {
        let mut settings = valid_settings();
        settings.jwt.secret = String::new();
        let handler = ServeCommandHandler::new(settings);
        assert!(handler.validate_only().await.is_err());
    }
}

//! Configuration merger for CLI arguments and config files
//!
//! CLI arguments have the highest precedence: they are applied on top of the
//! layered file/environment configuration just before validation.

use std::path::PathBuf;

use super::parser::{Cli, Commands};
use crate::config::error::ConfigError;
use crate::config::{ConfigLoader, settings::Settings};

/// Applies CLI argument overrides to a loaded base configuration.
pub struct ConfigurationMerger {
    base_config: Settings,
}

impl ConfigurationMerger {
    pub fn new(base_config: Settings) -> Self {
        Self { base_config }
    }

    /// Load configuration from an explicit file, or from the layered default
    /// loader when no path was given.
    ///
    /// Validation is deferred to [`merge_cli_args`](Self::merge_cli_args) so
    /// CLI overrides can repair an otherwise incomplete file.
    pub fn from_config_path(config_path: Option<&PathBuf>) -> Result<Self, ConfigError> {
        let config = if let Some(path) = config_path {
            ConfigLoader::from_file(path.clone()).load_unvalidated()?
        } else {
            ConfigLoader::new()?.load_unvalidated()?
        };

        Ok(Self::new(config))
    }

    /// Merge CLI argument overrides and validate the result.
    pub fn merge_cli_args(&self, cli: &Cli) -> Result<Settings, ConfigError> {
        let mut config = self.base_config.clone();

        if cli.verbose {
            config.logger.level = "debug".to_string();
        } else if cli.quiet {
            config.logger.level = "error".to_string();
        }

        if let Some(ref command) = cli.command {
            self.apply_command_overrides(&mut config, command);
        }

        config.validate()?;
        Ok(config)
    }

    fn apply_command_overrides(&self, config: &mut Settings, command: &Commands) {
        match command {
            Commands::Serve {
                host,
                port,
                log_level,
                dry_run: _,
            } => {
                if let Some(host_addr) = host {
                    config.server.host = host_addr.clone();
                }
                if let Some(port_num) = port {
                    config.server.port = *port_num;
                }
                // Command-specific log level beats the global flags.
                if let Some(level) = log_level {
                    config.logger.level = level.clone().into();
                }
            }
            Commands::Migrate { .. } => {}
        }
    }

    pub fn config(&self) -> &Settings {
        &self.base_config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn base_config() -> Settings {
        let mut config = Settings::default();
        config.database.url = "postgres://localhost/vitrine_test".to_string();
        config
    }

    #[test]
    fn merge_verbose_flag_sets_debug_level() {
        let merger = ConfigurationMerger::new(base_config());
        let cli = Cli::try_parse_from(["vitrine", "--verbose"]).unwrap();
        let merged = merger.merge_cli_args(&cli).unwrap();
        assert_eq!(merged.logger.level, "debug");
    }

    #[test]
    fn merge_quiet_flag_sets_error_level() {
        let merger = ConfigurationMerger::new(base_config());
        let cli = Cli::try_parse_from(["vitrine", "--quiet"]).unwrap();
        let merged = merger.merge_cli_args(&cli).unwrap();
        assert_eq!(merged.logger.level, "error");
    }

    #[test]
    fn merge_serve_host_and_port() {
        let merger = ConfigurationMerger::new(base_config());
        let cli =
            Cli::try_parse_from(["vitrine", "serve", "--host", "0.0.0.0", "--port", "8080"])
                .unwrap();
        let merged = merger.merge_cli_args(&cli).unwrap();
        assert_eq!(merged.server.host, "0.0.0.0");
        assert_eq!(merged.server.port, 8080);
    }

    #[test]
    fn command_log_level_overrides_global_verbose() {
        let merger = ConfigurationMerger::new(base_config());
        let cli =
            Cli::try_parse_from(["vitrine", "--verbose", "serve", "--log-level", "warn"]).unwrap();
        let merged = merger.merge_cli_args(&cli).unwrap();
        assert_eq!(merged.logger.level, "warn");
    }

    #[test]
    fn merged_config_is_validated() {
        // Empty database URL fails validation even after merging.
        let merger = ConfigurationMerger::new(Settings::default());
        let cli = Cli::try_parse_from(["vitrine", "serve"]).unwrap();
        assert!(merger.merge_cli_args(&cli).is_err());
    }
}

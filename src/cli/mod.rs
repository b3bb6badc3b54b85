//! CLI module for vitrine
//!
//! This module provides command-line interface functionality including:
//! - Argument parsing with clap
//! - Configuration merging (CLI args + config files)
//! - Command execution and validation
//! - Command handlers for serve and migrate operations

pub mod config_merger;
pub mod executor;
pub mod handlers;
pub mod parser;
pub mod validation;

pub use config_merger::ConfigurationMerger;
pub use executor::execute_command;
pub use parser::{Cli, Commands, LogLevel};

use crate::config::settings::Settings;
use crate::logger::init_logger;

/// Load configuration from files and apply CLI argument overrides.
pub fn load_and_merge_config(cli: &Cli) -> anyhow::Result<Settings> {
    if let Some(env) = &cli.env {
        // The loader reads the environment from this variable; the flag is
        // just a convenient alias for it.
        unsafe {
            std::env::set_var(
                crate::config::Environment::ENV_VAR,
                crate::config::Environment::from(env.clone()).as_str(),
            );
        }
    }

    let merger = ConfigurationMerger::from_config_path(cli.config.as_ref())?;
    Ok(merger.merge_cli_args(cli)?)
}

/// Initialize the logger from settings.
pub fn init_logger_from_settings(settings: &Settings) -> anyhow::Result<()> {
    init_logger(&settings.logger)
}

//! Logger initialization built on tracing-subscriber.
//!
//! Format and level come from the `[logger]` configuration section; output
//! goes to the console or, when `logger.file` is set, to that file.

use std::fs::OpenOptions;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use crate::config::settings::LoggerConfig;

/// Initialize the global tracing subscriber from configuration.
///
/// Safe to call more than once; a second call is a no-op. Failing to open a
/// configured log file is a hard error.
pub fn init_logger(config: &LoggerConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(&config.level);

    let result = if config.file.is_empty() {
        let builder = tracing_subscriber::fmt().with_env_filter(filter);
        match config.format.as_str() {
            "json" => builder.json().try_init(),
            "compact" => builder.compact().try_init(),
            _ => builder.pretty().try_init(),
        }
    } else {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&config.file)?;
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Arc::new(file))
            .with_ansi(false);
        match config.format.as_str() {
            "json" => builder.json().try_init(),
            "compact" => builder.compact().try_init(),
            _ => builder.pretty().try_init(),
        }
    };

    // An already-installed subscriber (tests, embedded use) is not an error.
    if let Err(err) = result {
        tracing::debug!(error = %err, "logger already initialized");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        let config = LoggerConfig::default();
        assert!(init_logger(&config).is_ok());
        assert!(init_logger(&config).is_ok());
    }

    #[test]
    fn file_logger_creates_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        let config = LoggerConfig {
            level: "debug".to_string(),
            format: "json".to_string(),
            file: path.to_string_lossy().to_string(),
        };
        // Subscriber install may be a no-op if one is already set, but the
        // file open itself must succeed.
        assert!(init_logger(&config).is_ok());
        assert!(path.exists());
    }

    #[test]
    fn unopenable_file_is_an_error() {
        let config = LoggerConfig {
            level: "info".to_string(),
            format: "json".to_string(),
            file: "/nonexistent-dir/app.log".to_string(),
        };
        assert!(init_logger(&config).is_err());
    }
}

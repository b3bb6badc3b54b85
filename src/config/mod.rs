//! Configuration management module for vitrine
//!
//! Layered configuration loading:
//! 1. `default.toml` - Base default configuration
//! 2. `{environment}.toml` - Environment-specific configuration
//! 3. `local.toml` - Local development overrides (not committed)
//! 4. `VITRINE_*` environment variables (highest priority)

pub mod environment;
pub mod error;
pub mod loader;
pub mod settings;

pub use environment::Environment;
pub use loader::ConfigLoader;
pub use settings::{CacheConfig, DatabaseConfig, JwtConfig, MediaConfig, Settings};

//! Configuration settings structures for vitrine
//!
//! This module defines all configuration structures that can be loaded from
//! TOML files and environment variables.

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;

// ============================================================================
// Default value functions
// ============================================================================

fn default_app_name() -> String {
    "vitrine".to_string()
}

fn default_app_version() -> String {
    crate::pkg_version().to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_connection_timeout() -> u64 {
    30
}

fn default_read_retry_attempts() -> u32 {
    3
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_true() -> bool {
    true
}

fn default_categories_ttl() -> u64 {
    300
}

fn default_products_ttl() -> u64 {
    120
}

fn default_content_ttl() -> u64 {
    300
}

fn default_settings_ttl() -> u64 {
    300
}

fn default_media_timeout() -> u64 {
    10
}

fn default_access_token_expiration() -> i64 {
    1 // 1 hour
}

fn default_refresh_token_expiration() -> i64 {
    168 // 7 days
}

// ============================================================================
// Application Configuration
// ============================================================================

/// Application basic information configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Application name
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Application version
    #[serde(default = "default_app_version")]
    pub version: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            version: default_app_version(),
        }
    }
}

// ============================================================================
// Server Configuration
// ============================================================================

/// Axum HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    /// Get the full server address as "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

// ============================================================================
// Database Configuration
// ============================================================================

/// Diesel database connection configuration.
///
/// `url` is the session credential (restricted role, subject to row-level
/// policies); `service_url` is the elevated service credential used only for
/// the one-shot escalation retry and never pooled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Session-credential connection URL
    #[serde(default)]
    pub url: String,

    /// Service-credential connection URL (unrestricted role)
    #[serde(default)]
    pub service_url: String,

    /// Maximum number of connections in the session pool
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Minimum number of connections in the session pool
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,

    /// Connection timeout in seconds
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout: u64,

    /// Attempts for the read-path transient retry
    #[serde(default = "default_read_retry_attempts")]
    pub read_retry_attempts: u32,

    /// Whether to automatically run pending migrations on startup
    #[serde(default)]
    pub auto_migrate: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            service_url: String::new(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connection_timeout: default_connection_timeout(),
            read_retry_attempts: default_read_retry_attempts(),
            auto_migrate: false,
        }
    }
}

impl DatabaseConfig {
    /// Validates the database configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.url.is_empty() {
            return Err(ConfigError::validation(
                "database.url",
                "Database URL cannot be empty",
            ));
        }
        if self.max_connections == 0 {
            return Err(ConfigError::validation(
                "database.max_connections",
                "Pool size must be at least 1",
            ));
        }
        if self.min_connections > self.max_connections {
            return Err(ConfigError::validation(
                "database.min_connections",
                "Minimum connections cannot exceed maximum connections",
            ));
        }
        Ok(())
    }
}

// ============================================================================
// JWT Configuration
// ============================================================================

/// JWT admin-session configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtConfig {
    /// Secret key for signing JWT tokens.
    /// Keep this out of committed config files; use VITRINE_JWT__SECRET.
    #[serde(default)]
    pub secret: String,

    /// Access token expiration time in hours
    #[serde(default = "default_access_token_expiration")]
    pub access_token_expiration: i64,

    /// Refresh token expiration time in hours
    #[serde(default = "default_refresh_token_expiration")]
    pub refresh_token_expiration: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::new(),
            access_token_expiration: default_access_token_expiration(),
            refresh_token_expiration: default_refresh_token_expiration(),
        }
    }
}

impl JwtConfig {
    /// Validates the JWT configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.secret.is_empty() {
            return Err(ConfigError::validation(
                "jwt.secret",
                "JWT secret cannot be empty",
            ));
        }
        if self.secret.len() < 32 {
            return Err(ConfigError::validation(
                "jwt.secret",
                "JWT secret should be at least 32 characters for security",
            ));
        }
        if self.access_token_expiration <= 0 || self.refresh_token_expiration <= 0 {
            return Err(ConfigError::validation(
                "jwt.access_token_expiration",
                "Token expirations must be positive",
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Cache Configuration
// ============================================================================

/// TTL cache configuration.
///
/// TTLs are per logical list and are supplied by the reader at lookup time;
/// they also drive the `Cache-Control: max-age` header on cached GETs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Whether list caching is enabled at all
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// TTL for the category list, in seconds
    #[serde(default = "default_categories_ttl")]
    pub categories_ttl_seconds: u64,

    /// TTL for product lists (per category filter), in seconds
    #[serde(default = "default_products_ttl")]
    pub products_ttl_seconds: u64,

    /// TTL for banner / homepage / page lists, in seconds
    #[serde(default = "default_content_ttl")]
    pub content_ttl_seconds: u64,

    /// TTL for the site-settings map, in seconds
    #[serde(default = "default_settings_ttl")]
    pub settings_ttl_seconds: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            categories_ttl_seconds: default_categories_ttl(),
            products_ttl_seconds: default_products_ttl(),
            content_ttl_seconds: default_content_ttl(),
            settings_ttl_seconds: default_settings_ttl(),
        }
    }
}

// ============================================================================
// Media Configuration
// ============================================================================

/// Externally hosted media configuration.
///
/// Images live on an external host and are deleted by URL as a best-effort
/// side call when their owning row is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MediaConfig {
    /// Bearer token sent with deletion requests, if the host requires one
    #[serde(default)]
    pub auth_token: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_media_timeout")]
    pub timeout_seconds: u64,
}

// ============================================================================
// Logger Configuration
// ============================================================================

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: pretty, compact, json
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Optional log file path; console-only when empty
    #[serde(default)]
    pub file: String,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: String::new(),
        }
    }
}

// ============================================================================
// Root Settings
// ============================================================================

/// Root settings structure aggregating all configuration sections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub application: ApplicationConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub jwt: JwtConfig,

    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub media: MediaConfig,

    #[serde(default)]
    pub logger: LoggerConfig,
}

impl Settings {
    /// Validates the complete configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::validation(
                "server.port",
                "Port must be between 1 and 65535",
            ));
        }
        self.database.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_settings() -> Settings {
        let mut settings = Settings::default();
        settings.database.url = "postgres://localhost/vitrine".to_string();
        settings
    }

    #[test]
    fn default_cache_ttls_match_route_contract() {
        let cache = CacheConfig::default();
        assert_eq!(cache.categories_ttl_seconds, 300);
        assert_eq!(cache.products_ttl_seconds, 120);
        assert_eq!(cache.settings_ttl_seconds, 300);
        assert!(cache.enabled);
    }

    #[test]
    fn settings_validate_requires_database_url() {
        let settings = Settings::default();
        assert!(settings.validate().is_err());
        assert!(valid_settings().validate().is_ok());
    }

    #[test]
    fn settings_validate_rejects_port_zero() {
        let mut settings = valid_settings();
        settings.server.port = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn jwt_validate_rejects_short_secret() {
        let mut jwt = JwtConfig::default();
        jwt.secret = "short".to_string();
        assert!(jwt.validate().is_err());
        jwt.secret = "a".repeat(32);
        assert!(jwt.validate().is_ok());
    }

    #[test]
    fn service_url_is_optional_at_validation_time() {
        // Absence is only fatal when an escalation actually needs it.
        let settings = valid_settings();
        assert!(settings.database.service_url.is_empty());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn server_address_joins_host_and_port() {
        let server = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 8080,
        };
        assert_eq!(server.address(), "0.0.0.0:8080");
    }
}

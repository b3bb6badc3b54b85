//! Application state shared across request handlers.

use std::sync::Arc;

use crate::cache::TtlCache;
use crate::config::settings::{JwtConfig, Settings};
use crate::db::Db;
use crate::services::Services;

/// Application state for Axum's State extractor.
///
/// Cloning is cheap: the services hold bb8 pools and `Arc`s internally.
#[derive(Clone)]
pub struct AppState {
    /// All business logic services
    pub services: Services,
    /// Direct database access, for health checks
    pub db: Db,
    /// The shared list cache; exposed for targeted invalidation in tests
    pub cache: Arc<TtlCache>,
    /// JWT configuration for token validation in middleware
    pub jwt_config: JwtConfig,
}

impl AppState {
    /// Wires services, cache, and configuration into one state value.
    pub fn new(db: Db, settings: &Settings) -> Self {
        let cache = Arc::new(TtlCache::new());
        let services = Services::new(db.clone(), settings, cache.clone());
        Self {
            services,
            db,
            cache,
            jwt_config: settings.jwt.clone(),
        }
    }
}

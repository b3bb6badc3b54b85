//! Site settings business logic.
//!
//! Settings are a flat key → JSON value map. Updates upsert each submitted
//! key sequentially (no transaction) and count as one audited mutation.

use std::sync::Arc;
use std::time::Duration;

use serde_json::{Map, Value as JsonValue};

use crate::cache::{CacheKey, TtlCache};
use crate::config::settings::CacheConfig;
use crate::db::Db;
use crate::error::AppResult;
use crate::models::AuditAction;
use crate::repositories::settings_repo;
use crate::services::audit::{Actor, AuditService};

#[derive(Clone)]
pub struct SettingsService {
    db: Db,
    cache: Arc<TtlCache>,
    cache_cfg: CacheConfig,
    audit: AuditService,
}

impl SettingsService {
    pub fn new(db: Db, cache: Arc<TtlCache>, cache_cfg: CacheConfig, audit: AuditService) -> Self {
        Self {
            db,
            cache,
            cache_cfg,
            audit,
        }
    }

    pub fn cache_ttl_seconds(&self) -> u64 {
        self.cache_cfg.settings_ttl_seconds
    }

    /// The whole settings map, served from cache when fresh.
    pub async fn get_all(&self) -> AppResult<Map<String, JsonValue>> {
        let ttl = Duration::from_secs(self.cache_ttl_seconds());
        if self.cache_cfg.enabled {
            if let Some(hit) = self
                .cache
                .get::<Map<String, JsonValue>>(&CacheKey::Settings, ttl)
            {
                return Ok(hit);
            }
        }

        let rows = self
            .db
            .read("list settings", |conn| {
                Box::pin(settings_repo::list_all(conn))
            })
            .await?;
        let map: Map<String, JsonValue> = rows
            .into_iter()
            .map(|row| (row.key, row.value))
            .collect();

        if self.cache_cfg.enabled {
            self.cache.insert(CacheKey::Settings, &map);
        }
        Ok(map)
    }

    /// Upserts every submitted key, one statement per key. A single-key
    /// update is audited under that key, a multi-key one as a batch.
    pub async fn update(
        &self,
        actor: &Actor,
        values: Map<String, JsonValue>,
    ) -> AppResult<Map<String, JsonValue>> {
        for (key, value) in &values {
            self.db
                .mutate("upsert setting", |conn| {
                    let key = key.clone();
                    let value = value.clone();
                    Box::pin(async move {
                        settings_repo::upsert(conn, &key, value).await?;
                        Ok(())
                    })
                })
                .await?;
        }

        let entity_id = if values.len() == 1 {
            values.keys().next().cloned().unwrap_or_default()
        } else {
            format!("bulk({})", values.len())
        };
        self.audit
            .record(actor, "setting", &entity_id, AuditAction::Update)
            .await;

        self.cache.remove(&CacheKey::Settings);
        self.get_all().await
    }
}

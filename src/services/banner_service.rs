//! Banner business logic. Banners are ordered within a named slot.

use std::sync::Arc;
use std::time::Duration;

use uuid::Uuid;

use crate::cache::{CacheKey, TtlCache};
use crate::config::settings::CacheConfig;
use crate::db::Db;
use crate::error::AppResult;
use crate::external::MediaClient;
use crate::models::{AuditAction, Banner, NewBanner, UpdateBanner};
use crate::repositories::banner_repo;
use crate::services::audit::{Actor, AuditService};
use crate::services::reorder;

#[derive(Clone)]
pub struct BannerService {
    db: Db,
    cache: Arc<TtlCache>,
    cache_cfg: CacheConfig,
    audit: AuditService,
    media: MediaClient,
}

impl BannerService {
    pub fn new(
        db: Db,
        cache: Arc<TtlCache>,
        cache_cfg: CacheConfig,
        audit: AuditService,
        media: MediaClient,
    ) -> Self {
        Self {
            db,
            cache,
            cache_cfg,
            audit,
            media,
        }
    }

    pub fn cache_ttl_seconds(&self) -> u64 {
        self.cache_cfg.content_ttl_seconds
    }

    pub async fn list(&self) -> AppResult<Vec<Banner>> {
        let ttl = Duration::from_secs(self.cache_ttl_seconds());
        if self.cache_cfg.enabled {
            if let Some(hit) = self.cache.get::<Vec<Banner>>(&CacheKey::Banners, ttl) {
                return Ok(hit);
            }
        }

        let rows = self
            .db
            .read("list banners", |conn| Box::pin(banner_repo::list_all(conn)))
            .await?;

        if self.cache_cfg.enabled {
            self.cache.insert(CacheKey::Banners, &rows);
        }
        Ok(rows)
    }

    /// Creates a banner. A negative `sort_order` appends within the slot.
    pub async fn create(&self, actor: &Actor, mut data: NewBanner) -> AppResult<Banner> {
        if data.sort_order < 0 {
            let slot = data.slot.clone();
            let positions = self
                .db
                .read("list banner positions", |conn| {
                    let slot = slot.clone();
                    Box::pin(async move { banner_repo::positions_in_slot(conn, &slot).await })
                })
                .await?;
            data.sort_order = reorder::next_position(&positions);
        }

        let row = self
            .db
            .mutate("create banner", |conn| {
                let data = data.clone();
                Box::pin(async move { banner_repo::create(conn, data).await })
            })
            .await?;

        self.audit
            .record(actor, "banner", &row.id.to_string(), AuditAction::Create)
            .await;
        self.invalidate();
        Ok(row)
    }

    pub async fn update(
        &self,
        actor: &Actor,
        id: Uuid,
        changes: UpdateBanner,
    ) -> AppResult<Banner> {
        let row = self
            .db
            .mutate("update banner", |conn| {
                let changes = changes.clone();
                Box::pin(async move { banner_repo::update(conn, id, changes).await })
            })
            .await?;

        self.audit
            .record(actor, "banner", &id.to_string(), AuditAction::Update)
            .await;
        self.invalidate();
        Ok(row)
    }

    pub async fn update_bulk(
        &self,
        actor: &Actor,
        updates: Vec<(Uuid, UpdateBanner)>,
    ) -> AppResult<Vec<Banner>> {
        let mut rows = Vec::with_capacity(updates.len());
        for (id, changes) in &updates {
            let id = *id;
            let row = self
                .db
                .mutate("update banner", |conn| {
                    let changes = changes.clone();
                    Box::pin(async move { banner_repo::update(conn, id, changes).await })
                })
                .await?;
            rows.push(row);
        }

        self.audit
            .record(
                actor,
                "banner",
                &format!("bulk({})", updates.len()),
                AuditAction::Update,
            )
            .await;
        self.invalidate();
        Ok(rows)
    }

    /// Deletes a banner, reindexes its slot, and drops the hosted image.
    pub async fn delete(&self, actor: &Actor, id: Uuid) -> AppResult<()> {
        let row = self
            .db
            .mutate("delete banner", |conn| {
                Box::pin(banner_repo::delete(conn, id))
            })
            .await?;

        self.media.delete_by_url(&row.image_url).await;

        let slot = row.slot.clone();
        self.db
            .mutate("reindex banners", |conn| {
                let slot = slot.clone();
                Box::pin(async move {
                    let positions = banner_repo::positions_in_slot(conn, &slot).await?;
                    for (row_id, position) in reorder::compact(&positions) {
                        banner_repo::set_sort_order(conn, row_id, position).await?;
                    }
                    Ok(())
                })
            })
            .await?;

        self.audit
            .record(actor, "banner", &id.to_string(), AuditAction::Delete)
            .await;
        self.invalidate();
        Ok(())
    }

    fn invalidate(&self) {
        self.cache.remove(&CacheKey::Banners);
    }
}

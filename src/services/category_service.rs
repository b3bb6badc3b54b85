//! Category business logic: cached listing, mutations with audit and
//! targeted cache invalidation, dense reindexing after deletes.

use std::sync::Arc;
use std::time::Duration;

use uuid::Uuid;

use crate::cache::{CacheKey, TtlCache};
use crate::config::settings::CacheConfig;
use crate::db::Db;
use crate::error::AppResult;
use crate::external::MediaClient;
use crate::models::{AuditAction, Category, NewCategory, UpdateCategory};
use crate::repositories::category_repo;
use crate::services::audit::{Actor, AuditService};
use crate::services::reorder;

#[derive(Clone)]
pub struct CategoryService {
    db: Db,
    cache: Arc<TtlCache>,
    cache_cfg: CacheConfig,
    audit: AuditService,
    media: MediaClient,
}

impl CategoryService {
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

    /// TTL both for the server-side cache and the `Cache-Control` header.
    pub fn cache_ttl_seconds(&self) -> u64 {
        self.cache_cfg.categories_ttl_seconds
    }

    /// Lists categories in display order, serving from cache when fresh.
    pub async fn list(&self) -> AppResult<Vec<Category>> {
        let ttl = Duration::from_secs(self.cache_ttl_seconds());
        if self.cache_cfg.enabled {
            if let Some(hit) = self.cache.get::<Vec<Category>>(&CacheKey::Categories, ttl) {
                return Ok(hit);
            }
        }

        let rows = self
            .db
            .read("list categories", |conn| {
                Box::pin(category_repo::list_all(conn))
            })
            .await?;

        if self.cache_cfg.enabled {
            self.cache.insert(CacheKey::Categories, &rows);
        }
        Ok(rows)
    }

    /// Creates a category. A negative `sort_order` means append to the end.
    pub async fn create(&self, actor: &Actor, mut data: NewCategory) -> AppResult<Category> {
        if data.sort_order < 0 {
            let positions = self
                .db
                .read("list category positions", |conn| {
                    Box::pin(category_repo::positions(conn))
                })
                .await?;
            data.sort_order = reorder::next_position(&positions);
        }

        let row = self
            .db
            .mutate("create category", |conn| {
                let data = data.clone();
                Box::pin(async move { category_repo::create(conn, data).await })
            })
            .await?;

        self.audit
            .record(actor, "category", &row.id.to_string(), AuditAction::Create)
            .await;
        self.invalidate();
        Ok(row)
    }

    pub async fn update(
        &self,
        actor: &Actor,
        id: Uuid,
        changes: UpdateCategory,
    ) -> AppResult<Category> {
        let row = self
            .db
            .mutate("update category", |conn| {
                let changes = changes.clone();
                Box::pin(async move { category_repo::update(conn, id, changes).await })
            })
            .await?;

        self.audit
            .record(actor, "category", &id.to_string(), AuditAction::Update)
            .await;
        self.invalidate();
        Ok(row)
    }

    /// Bulk update used by drag-reorder persistence: one UPDATE per row,
    /// sequentially, no transaction. One audit entry covers the batch.
    pub async fn update_bulk(
        &self,
        actor: &Actor,
        updates: Vec<(Uuid, UpdateCategory)>,
    ) -> AppResult<Vec<Category>> {
        let mut rows = Vec::with_capacity(updates.len());
        for (id, changes) in &updates {
            let id = *id;
            let row = self
                .db
                .mutate("update category", |conn| {
                    let changes = changes.clone();
                    Box::pin(async move { category_repo::update(conn, id, changes).await })
                })
                .await?;
            rows.push(row);
        }

        self.audit
            .record(
                actor,
                "category",
                &format!("bulk({})", updates.len()),
                AuditAction::Update,
            )
            .await;
        self.invalidate();
        Ok(rows)
    }

    /// Deletes a category, reindexes the survivors densely, and removes the
    /// category image from the media host as a best-effort side call.
    pub async fn delete(&self, actor: &Actor, id: Uuid) -> AppResult<()> {
        let row = self
            .db
            .mutate("delete category", |conn| {
                Box::pin(category_repo::delete(conn, id))
            })
            .await?;

        if let Some(url) = &row.image_url {
            self.media.delete_by_url(url).await;
        }

        self.db
            .mutate("reindex categories", |conn| {
                Box::pin(async move {
                    let positions = category_repo::positions(conn).await?;
                    for (row_id, position) in reorder::compact(&positions) {
                        category_repo::set_sort_order(conn, row_id, position).await?;
                    }
                    Ok(())
                })
            })
            .await?;

        self.audit
            .record(actor, "category", &id.to_string(), AuditAction::Delete)
            .await;

        // Products referencing the category fall back to uncategorized, so
        // their cached lists are stale too.
        self.invalidate();
        self.cache.remove(&CacheKey::Products { category: None });
        self.cache
            .remove(&CacheKey::Products { category: Some(id) });
        Ok(())
    }

    fn invalidate(&self) {
        self.cache.remove(&CacheKey::Categories);
    }
}

//! Static page and page block business logic.
//!
//! The page list is cached; blocks are loaded per page and kept densely
//! ordered within it.

use std::sync::Arc;
use std::time::Duration;

use uuid::Uuid;

use crate::cache::{CacheKey, TtlCache};
use crate::config::settings::CacheConfig;
use crate::db::Db;
use crate::error::AppResult;
use crate::models::{
    AuditAction, NewPage, NewPageBlock, Page, PageBlock, UpdatePage, UpdatePageBlock,
};
use crate::repositories::page_repo;
use crate::services::audit::{Actor, AuditService};
use crate::services::reorder;

#[derive(Clone)]
pub struct PageService {
    db: Db,
    cache: Arc<TtlCache>,
    cache_cfg: CacheConfig,
    audit: AuditService,
}

impl PageService {
    pub fn new(db: Db, cache: Arc<TtlCache>, cache_cfg: CacheConfig, audit: AuditService) -> Self {
        Self {
            db,
            cache,
            cache_cfg,
            audit,
        }
    }

    pub fn cache_ttl_seconds(&self) -> u64 {
        self.cache_cfg.content_ttl_seconds
    }

    // -----------------------------------------------------------------------
    // Pages
    // -----------------------------------------------------------------------

    pub async fn list_pages(&self) -> AppResult<Vec<Page>> {
        let ttl = Duration::from_secs(self.cache_ttl_seconds());
        if self.cache_cfg.enabled {
            if let Some(hit) = self.cache.get::<Vec<Page>>(&CacheKey::Pages, ttl) {
                return Ok(hit);
            }
        }

        let rows = self
            .db
            .read("list pages", |conn| Box::pin(page_repo::list_pages(conn)))
            .await?;

        if self.cache_cfg.enabled {
            self.cache.insert(CacheKey::Pages, &rows);
        }
        Ok(rows)
    }

    pub async fn create_page(&self, actor: &Actor, data: NewPage) -> AppResult<Page> {
        let row = self
            .db
            .mutate("create page", |conn| {
                let data = data.clone();
                Box::pin(async move { page_repo::create_page(conn, data).await })
            })
            .await?;

        self.audit
            .record(actor, "page", &row.id.to_string(), AuditAction::Create)
            .await;
        self.invalidate();
        Ok(row)
    }

    pub async fn update_page(
        &self,
        actor: &Actor,
        id: Uuid,
        changes: UpdatePage,
    ) -> AppResult<Page> {
        let row = self
            .db
            .mutate("update page", |conn| {
                let changes = changes.clone();
                Box::pin(async move { page_repo::update_page(conn, id, changes).await })
            })
            .await?;

        self.audit
            .record(actor, "page", &id.to_string(), AuditAction::Update)
            .await;
        self.invalidate();
        Ok(row)
    }

    pub async fn update_pages_bulk(
        &self,
        actor: &Actor,
        updates: Vec<(Uuid, UpdatePage)>,
    ) -> AppResult<Vec<Page>> {
        let mut rows = Vec::with_capacity(updates.len());
        for (id, changes) in &updates {
            let id = *id;
            let row = self
                .db
                .mutate("update page", |conn| {
                    let changes = changes.clone();
                    Box::pin(async move { page_repo::update_page(conn, id, changes).await })
                })
                .await?;
            rows.push(row);
        }

        self.audit
            .record(
                actor,
                "page",
                &format!("bulk({})", updates.len()),
                AuditAction::Update,
            )
            .await;
        self.invalidate();
        Ok(rows)
    }

    /// Deletes a page; its blocks cascade with it.
    pub async fn delete_page(&self, actor: &Actor, id: Uuid) -> AppResult<()> {
        self.db
            .mutate("delete page", |conn| {
                Box::pin(async move {
                    page_repo::delete_page(conn, id).await?;
                    Ok(())
                })
            })
            .await?;

        self.audit
            .record(actor, "page", &id.to_string(), AuditAction::Delete)
            .await;
        self.invalidate();
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Blocks
    // -----------------------------------------------------------------------

    pub async fn list_blocks(&self, page: Uuid) -> AppResult<Vec<PageBlock>> {
        self.db
            .read("list page blocks", |conn| {
                Box::pin(page_repo::list_blocks(conn, page))
            })
            .await
    }

    /// Creates a block. A negative `sort_order` appends within the page.
    pub async fn create_block(&self, actor: &Actor, mut data: NewPageBlock) -> AppResult<PageBlock> {
        if data.sort_order < 0 {
            let page = data.page_id;
            let positions = self
                .db
                .read("list block positions", |conn| {
                    Box::pin(page_repo::block_positions(conn, page))
                })
                .await?;
            data.sort_order = reorder::next_position(&positions);
        }

        let row = self
            .db
            .mutate("create page block", |conn| {
                let data = data.clone();
                Box::pin(async move { page_repo::create_block(conn, data).await })
            })
            .await?;

        self.audit
            .record(actor, "page_block", &row.id.to_string(), AuditAction::Create)
            .await;
        self.invalidate();
        Ok(row)
    }

    pub async fn update_block(
        &self,
        actor: &Actor,
        id: Uuid,
        changes: UpdatePageBlock,
    ) -> AppResult<PageBlock> {
        let row = self
            .db
            .mutate("update page block", |conn| {
                let changes = changes.clone();
                Box::pin(async move { page_repo::update_block(conn, id, changes).await })
            })
            .await?;

        self.audit
            .record(actor, "page_block", &id.to_string(), AuditAction::Update)
            .await;
        self.invalidate();
        Ok(row)
    }

    pub async fn update_blocks_bulk(
        &self,
        actor: &Actor,
        updates: Vec<(Uuid, UpdatePageBlock)>,
    ) -> AppResult<Vec<PageBlock>> {
        let mut rows = Vec::with_capacity(updates.len());
        for (id, changes) in &updates {
            let id = *id;
            let row = self
                .db
                .mutate("update page block", |conn| {
                    let changes = changes.clone();
                    Box::pin(async move { page_repo::update_block(conn, id, changes).await })
                })
                .await?;
            rows.push(row);
        }

        self.audit
            .record(
                actor,
                "page_block",
                &format!("bulk({})", updates.len()),
                AuditAction::Update,
            )
            .await;
        self.invalidate();
        Ok(rows)
    }

    /// Deletes a block and reindexes the remaining blocks of its page.
    pub async fn delete_block(&self, actor: &Actor, id: Uuid) -> AppResult<()> {
        let row = self
            .db
            .mutate("delete page block", |conn| {
                Box::pin(page_repo::delete_block(conn, id))
            })
            .await?;

        let page = row.page_id;
        self.db
            .mutate("reindex page blocks", |conn| {
                Box::pin(async move {
                    let positions = page_repo::block_positions(conn, page).await?;
                    for (row_id, position) in reorder::compact(&positions) {
                        page_repo::set_block_sort_order(conn, row_id, position).await?;
                    }
                    Ok(())
                })
            })
            .await?;

        self.audit
            .record(actor, "page_block", &id.to_string(), AuditAction::Delete)
            .await;
        self.invalidate();
        Ok(())
    }

    fn invalidate(&self) {
        self.cache.remove(&CacheKey::Pages);
    }
}

//! Homepage section and item business logic.
//!
//! Sections are ordered on the homepage, items within their section. The
//! section list is cached; items are read per request.

use std::sync::Arc;
use std::time::Duration;

use uuid::Uuid;

use crate::cache::{CacheKey, TtlCache};
use crate::config::settings::CacheConfig;
use crate::db::Db;
use crate::error::AppResult;
use crate::external::MediaClient;
use crate::models::{
    AuditAction, HomepageItem, HomepageSection, NewHomepageItem, NewHomepageSection,
    UpdateHomepageItem, UpdateHomepageSection,
};
use crate::repositories::homepage_repo;
use crate::services::audit::{Actor, AuditService};
use crate::services::reorder;

#[derive(Clone)]
pub struct HomepageService {
    db: Db,
    cache: Arc<TtlCache>,
    cache_cfg: CacheConfig,
    audit: AuditService,
    media: MediaClient,
}

impl HomepageService {
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

    // -----------------------------------------------------------------------
    // Sections
    // -----------------------------------------------------------------------

    pub async fn list_sections(&self) -> AppResult<Vec<HomepageSection>> {
        let ttl = Duration::from_secs(self.cache_ttl_seconds());
        if self.cache_cfg.enabled {
            if let Some(hit) = self
                .cache
                .get::<Vec<HomepageSection>>(&CacheKey::HomepageSections, ttl)
            {
                return Ok(hit);
            }
        }

        let rows = self
            .db
            .read("list homepage sections", |conn| {
                Box::pin(homepage_repo::list_sections(conn))
            })
            .await?;

        if self.cache_cfg.enabled {
            self.cache.insert(CacheKey::HomepageSections, &rows);
        }
        Ok(rows)
    }

    /// Creates a section. A negative `sort_order` appends to the homepage.
    pub async fn create_section(
        &self,
        actor: &Actor,
        mut data: NewHomepageSection,
    ) -> AppResult<HomepageSection> {
        if data.sort_order < 0 {
            let positions = self
                .db
                .read("list section positions", |conn| {
                    Box::pin(homepage_repo::section_positions(conn))
                })
                .await?;
            data.sort_order = reorder::next_position(&positions);
        }

        let row = self
            .db
            .mutate("create homepage section", |conn| {
                let data = data.clone();
                Box::pin(async move { homepage_repo::create_section(conn, data).await })
            })
            .await?;

        self.audit
            .record(
                actor,
                "homepage_section",
                &row.id.to_string(),
                AuditAction::Create,
            )
            .await;
        self.invalidate();
        Ok(row)
    }

    pub async fn update_section(
        &self,
        actor: &Actor,
        id: Uuid,
        changes: UpdateHomepageSection,
    ) -> AppResult<HomepageSection> {
        let row = self
            .db
            .mutate("update homepage section", |conn| {
                let changes = changes.clone();
                Box::pin(async move { homepage_repo::update_section(conn, id, changes).await })
            })
            .await?;

        self.audit
            .record(actor, "homepage_section", &id.to_string(), AuditAction::Update)
            .await;
        self.invalidate();
        Ok(row)
    }

    pub async fn update_sections_bulk(
        &self,
        actor: &Actor,
        updates: Vec<(Uuid, UpdateHomepageSection)>,
    ) -> AppResult<Vec<HomepageSection>> {
        let mut rows = Vec::with_capacity(updates.len());
        for (id, changes) in &updates {
            let id = *id;
            let row = self
                .db
                .mutate("update homepage section", |conn| {
                    let changes = changes.clone();
                    Box::pin(async move { homepage_repo::update_section(conn, id, changes).await })
                })
                .await?;
            rows.push(row);
        }

        self.audit
            .record(
                actor,
                "homepage_section",
                &format!("bulk({})", updates.len()),
                AuditAction::Update,
            )
            .await;
        self.invalidate();
        Ok(rows)
    }

    /// Deletes a section (its items cascade) and reindexes the survivors.
    pub async fn delete_section(&self, actor: &Actor, id: Uuid) -> AppResult<()> {
        self.db
            .mutate("delete homepage section", |conn| {
                Box::pin(async move {
                    homepage_repo::delete_section(conn, id).await?;
                    Ok(())
                })
            })
            .await?;

        self.db
            .mutate("reindex homepage sections", |conn| {
                Box::pin(async move {
                    let positions = homepage_repo::section_positions(conn).await?;
                    for (row_id, position) in reorder::compact(&positions) {
                        homepage_repo::set_section_sort_order(conn, row_id, position).await?;
                    }
                    Ok(())
                })
            })
            .await?;

        self.audit
            .record(actor, "homepage_section", &id.to_string(), AuditAction::Delete)
            .await;
        self.invalidate();
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Items
    // -----------------------------------------------------------------------

    pub async fn list_items(&self, section: Option<Uuid>) -> AppResult<Vec<HomepageItem>> {
        self.db
            .read("list homepage items", |conn| {
                Box::pin(homepage_repo::list_items(conn, section))
            })
            .await
    }

    /// Creates an item. A negative `sort_order` appends within the section.
    pub async fn create_item(
        &self,
        actor: &Actor,
        mut data: NewHomepageItem,
    ) -> AppResult<HomepageItem> {
        if data.sort_order < 0 {
            let section = data.section_id;
            let positions = self
                .db
                .read("list item positions", |conn| {
                    Box::pin(homepage_repo::item_positions(conn, section))
                })
                .await?;
            data.sort_order = reorder::next_position(&positions);
        }

        let row = self
            .db
            .mutate("create homepage item", |conn| {
                let data = data.clone();
                Box::pin(async move { homepage_repo::create_item(conn, data).await })
            })
            .await?;

        self.audit
            .record(actor, "homepage_item", &row.id.to_string(), AuditAction::Create)
            .await;
        self.invalidate();
        Ok(row)
    }

    pub async fn update_item(
        &self,
        actor: &Actor,
        id: Uuid,
        changes: UpdateHomepageItem,
    ) -> AppResult<HomepageItem> {
        let row = self
            .db
            .mutate("update homepage item", |conn| {
                let changes = changes.clone();
                Box::pin(async move { homepage_repo::update_item(conn, id, changes).await })
            })
            .await?;

        self.audit
            .record(actor, "homepage_item", &id.to_string(), AuditAction::Update)
            .await;
        self.invalidate();
        Ok(row)
    }

    pub async fn update_items_bulk(
        &self,
        actor: &Actor,
        updates: Vec<(Uuid, UpdateHomepageItem)>,
    ) -> AppResult<Vec<HomepageItem>> {
        let mut rows = Vec::with_capacity(updates.len());
        for (id, changes) in &updates {
            let id = *id;
            let row = self
                .db
                .mutate("update homepage item", |conn| {
                    let changes = changes.clone();
                    Box::pin(async move { homepage_repo::update_item(conn, id, changes).await })
                })
                .await?;
            rows.push(row);
        }

        self.audit
            .record(
                actor,
                "homepage_item",
                &format!("bulk({})", updates.len()),
                AuditAction::Update,
            )
            .await;
        self.invalidate();
        Ok(rows)
    }

    /// Deletes an item, reindexes its section, and drops its hosted image.
    pub async fn delete_item(&self, actor: &Actor, id: Uuid) -> AppResult<()> {
        let row = self
            .db
            .mutate("delete homepage item", |conn| {
                Box::pin(homepage_repo::delete_item(conn, id))
            })
            .await?;

        if let Some(url) = &row.image_url {
            self.media.delete_by_url(url).await;
        }

        let section = row.section_id;
        self.db
            .mutate("reindex homepage items", |conn| {
                Box::pin(async move {
                    let positions = homepage_repo::item_positions(conn, section).await?;
                    for (row_id, position) in reorder::compact(&positions) {
                        homepage_repo::set_item_sort_order(conn, row_id, position).await?;
                    }
                    Ok(())
                })
            })
            .await?;

        self.audit
            .record(actor, "homepage_item", &id.to_string(), AuditAction::Delete)
            .await;
        self.invalidate();
        Ok(())
    }

    fn invalidate(&self) {
        self.cache.remove(&CacheKey::HomepageSections);
    }
}

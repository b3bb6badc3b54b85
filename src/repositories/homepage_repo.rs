//! Homepage section and item queries.
//!
//! Sections are ordered on the homepage; items are ordered within their
//! section. Both orderings are kept dense by the reindexing service.

use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{
    HomepageItem, HomepageSection, NewHomepageItem, NewHomepageSection, UpdateHomepageItem,
    UpdateHomepageSection,
};

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

pub async fn list_sections(conn: &mut AsyncPgConnection) -> AppResult<Vec<HomepageSection>> {
    use crate::schema::homepage_sections::dsl::*;

    homepage_sections
        .order((sort_order.asc(), created_at.asc()))
        .select(HomepageSection::as_select())
        .load(conn)
        .await
        .map_err(AppError::from)
}

pub async fn find_section(
    conn: &mut AsyncPgConnection,
    section: Uuid,
) -> AppResult<Option<HomepageSection>> {
    use crate::schema::homepage_sections::dsl::*;

    homepage_sections
        .filter(id.eq(section))
        .select(HomepageSection::as_select())
        .first(conn)
        .await
        .optional()
        .map_err(AppError::from)
}

pub async fn create_section(
    conn: &mut AsyncPgConnection,
    new_section: NewHomepageSection,
) -> AppResult<HomepageSection> {
    use crate::schema::homepage_sections::dsl::*;

    diesel::insert_into(homepage_sections)
        .values(&new_section)
        .returning(HomepageSection::as_returning())
        .get_result(conn)
        .await
        .map_err(AppError::from)
}

pub async fn update_section(
    conn: &mut AsyncPgConnection,
    section: Uuid,
    changes: UpdateHomepageSection,
) -> AppResult<HomepageSection> {
    use crate::schema::homepage_sections::dsl::*;

    diesel::update(homepage_sections.filter(id.eq(section)))
        .set((&changes, updated_at.eq(diesel::dsl::now)))
        .returning(HomepageSection::as_returning())
        .get_result(conn)
        .await
        .map_err(AppError::from)
}

/// Deletes a section. Its items go with it via the FK cascade.
pub async fn delete_section(
    conn: &mut AsyncPgConnection,
    section: Uuid,
) -> AppResult<HomepageSection> {
    use crate::schema::homepage_sections::dsl::*;

    diesel::delete(homepage_sections.filter(id.eq(section)))
        .returning(HomepageSection::as_returning())
        .get_result(conn)
        .await
        .map_err(AppError::from)
}

pub async fn section_positions(conn: &mut AsyncPgConnection) -> AppResult<Vec<(Uuid, i32)>> {
    use crate::schema::homepage_sections::dsl::*;

    homepage_sections
        .order((sort_order.asc(), created_at.asc()))
        .select((id, sort_order))
        .load(conn)
        .await
        .map_err(AppError::from)
}

pub async fn set_section_sort_order(
    conn: &mut AsyncPgConnection,
    section: Uuid,
    position: i32,
) -> AppResult<usize> {
    use crate::schema::homepage_sections::dsl::*;

    diesel::update(homepage_sections.filter(id.eq(section)))
        .set(sort_order.eq(position))
        .execute(conn)
        .await
        .map_err(AppError::from)
}

// ---------------------------------------------------------------------------
// Items
// ---------------------------------------------------------------------------

/// Lists items, optionally restricted to one section.
pub async fn list_items(
    conn: &mut AsyncPgConnection,
    section: Option<Uuid>,
) -> AppResult<Vec<HomepageItem>> {
    use crate::schema::homepage_items::dsl::*;

    let mut query = homepage_items.into_boxed();
    if let Some(section) = section {
        query = query.filter(section_id.eq(section));
    }

    query
        .order((section_id.asc(), sort_order.asc(), created_at.asc()))
        .select(HomepageItem::as_select())
        .load(conn)
        .await
        .map_err(AppError::from)
}

pub async fn find_item(
    conn: &mut AsyncPgConnection,
    item: Uuid,
) -> AppResult<Option<HomepageItem>> {
    use crate::schema::homepage_items::dsl::*;

    homepage_items
        .filter(id.eq(item))
        .select(HomepageItem::as_select())
        .first(conn)
        .await
        .optional()
        .map_err(AppError::from)
}

pub async fn create_item(
    conn: &mut AsyncPgConnection,
    new_item: NewHomepageItem,
) -> AppResult<HomepageItem> {
    use crate::schema::homepage_items::dsl::*;

    diesel::insert_into(homepage_items)
        .values(&new_item)
        .returning(HomepageItem::as_returning())
        .get_result(conn)
        .await
        .map_err(AppError::from)
}

pub async fn update_item(
    conn: &mut AsyncPgConnection,
    item: Uuid,
    changes: UpdateHomepageItem,
) -> AppResult<HomepageItem> {
    use crate::schema::homepage_items::dsl::*;

    diesel::update(homepage_items.filter(id.eq(item)))
        .set((&changes, updated_at.eq(diesel::dsl::now)))
        .returning(HomepageItem::as_returning())
        .get_result(conn)
        .await
        .map_err(AppError::from)
}

pub async fn delete_item(conn: &mut AsyncPgConnection, item: Uuid) -> AppResult<HomepageItem> {
    use crate::schema::homepage_items::dsl::*;

    diesel::delete(homepage_items.filter(id.eq(item)))
        .returning(HomepageItem::as_returning())
        .get_result(conn)
        .await
        .map_err(AppError::from)
}

pub async fn item_positions(
    conn: &mut AsyncPgConnection,
    section: Uuid,
) -> AppResult<Vec<(Uuid, i32)>> {
    use crate::schema::homepage_items::dsl::*;

    homepage_items
        .filter(section_id.eq(section))
        .order((sort_order.asc(), created_at.asc()))
        .select((id, sort_order))
        .load(conn)
        .await
        .map_err(AppError::from)
}

pub async fn set_item_sort_order(
    conn: &mut AsyncPgConnection,
    item: Uuid,
    position: i32,
) -> AppResult<usize> {
    use crate::schema::homepage_items::dsl::*;

    diesel::update(homepage_items.filter(id.eq(item)))
        .set(sort_order.eq(position))
        .execute(conn)
        .await
        .map_err(AppError::from)
}

//! Static page and page block queries.

use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{NewPage, NewPageBlock, Page, PageBlock, UpdatePage, UpdatePageBlock};

pub async fn list_pages(conn: &mut AsyncPgConnection) -> AppResult<Vec<Page>> {
    use crate::schema::pages::dsl::*;

    pages
        .order(slug.asc())
        .select(Page::as_select())
        .load(conn)
        .await
        .map_err(AppError::from)
}

pub async fn find_page(conn: &mut AsyncPgConnection, page_id: Uuid) -> AppResult<Option<Page>> {
    use crate::schema::pages::dsl::*;

    pages
        .filter(id.eq(page_id))
        .select(Page::as_select())
        .first(conn)
        .await
        .optional()
        .map_err(AppError::from)
}

pub async fn create_page(conn: &mut AsyncPgConnection, new_page: NewPage) -> AppResult<Page> {
    use crate::schema::pages::dsl::*;

    diesel::insert_into(pages)
        .values(&new_page)
        .returning(Page::as_returning())
        .get_result(conn)
        .await
        .map_err(AppError::from)
}

pub async fn update_page(
    conn: &mut AsyncPgConnection,
    page_id: Uuid,
    changes: UpdatePage,
) -> AppResult<Page> {
    use crate::schema::pages::dsl::*;

    diesel::update(pages.filter(id.eq(page_id)))
        .set((&changes, updated_at.eq(diesel::dsl::now)))
        .returning(Page::as_returning())
        .get_result(conn)
        .await
        .map_err(AppError::from)
}

/// Deletes a page. Its blocks go with it via the FK cascade.
pub async fn delete_page(conn: &mut AsyncPgConnection, page_id: Uuid) -> AppResult<Page> {
    use crate::schema::pages::dsl::*;

    diesel::delete(pages.filter(id.eq(page_id)))
        .returning(Page::as_returning())
        .get_result(conn)
        .await
        .map_err(AppError::from)
}

// ---------------------------------------------------------------------------
// Blocks
// ---------------------------------------------------------------------------

pub async fn list_blocks(conn: &mut AsyncPgConnection, page: Uuid) -> AppResult<Vec<PageBlock>> {
    use crate::schema::page_blocks::dsl::*;

    page_blocks
        .filter(page_id.eq(page))
        .order((sort_order.asc(), created_at.asc()))
        .select(PageBlock::as_select())
        .load(conn)
        .await
        .map_err(AppError::from)
}

pub async fn find_block(
    conn: &mut AsyncPgConnection,
    block: Uuid,
) -> AppResult<Option<PageBlock>> {
    use crate::schema::page_blocks::dsl::*;

    page_blocks
        .filter(id.eq(block))
        .select(PageBlock::as_select())
        .first(conn)
        .await
        .optional()
        .map_err(AppError::from)
}

pub async fn create_block(
    conn: &mut AsyncPgConnection,
    new_block: NewPageBlock,
) -> AppResult<PageBlock> {
    use crate::schema::page_blocks::dsl::*;

    diesel::insert_into(page_blocks)
        .values(&new_block)
        .returning(PageBlock::as_returning())
        .get_result(conn)
        .await
        .map_err(AppError::from)
}

pub async fn update_block(
    conn: &mut AsyncPgConnection,
    block: Uuid,
    changes: UpdatePageBlock,
) -> AppResult<PageBlock> {
    use crate::schema::page_blocks::dsl::*;

    diesel::update(page_blocks.filter(id.eq(block)))
        .set((&changes, updated_at.eq(diesel::dsl::now)))
        .returning(PageBlock::as_returning())
        .get_result(conn)
        .await
        .map_err(AppError::from)
}

pub async fn delete_block(conn: &mut AsyncPgConnection, block: Uuid) -> AppResult<PageBlock> {
    use crate::schema::page_blocks::dsl::*;

    diesel::delete(page_blocks.filter(id.eq(block)))
        .returning(PageBlock::as_returning())
        .get_result(conn)
        .await
        .map_err(AppError::from)
}

pub async fn block_positions(
    conn: &mut AsyncPgConnection,
    page: Uuid,
) -> AppResult<Vec<(Uuid, i32)>> {
    use crate::schema::page_blocks::dsl::*;

    page_blocks
        .filter(page_id.eq(page))
        .order((sort_order.asc(), created_at.asc()))
        .select((id, sort_order))
        .load(conn)
        .await
        .map_err(AppError::from)
}

pub async fn set_block_sort_order(
    conn: &mut AsyncPgConnection,
    block: Uuid,
    position: i32,
) -> AppResult<usize> {
    use crate::schema::page_blocks::dsl::*;

    diesel::update(page_blocks.filter(id.eq(block)))
        .set(sort_order.eq(position))
        .execute(conn)
        .await
        .map_err(AppError::from)
}

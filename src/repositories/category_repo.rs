//! Category queries.

use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{Category, NewCategory, UpdateCategory};

/// Lists all categories ordered by position.
pub async fn list_all(conn: &mut AsyncPgConnection) -> AppResult<Vec<Category>> {
    use crate::schema::categories::dsl::*;

    categories
        .order((sort_order.asc(), created_at.asc()))
        .select(Category::as_select())
        .load(conn)
        .await
        .map_err(AppError::from)
}

pub async fn find_by_id(
    conn: &mut AsyncPgConnection,
    category_id: Uuid,
) -> AppResult<Option<Category>> {
    use crate::schema::categories::dsl::*;

    categories
        .filter(id.eq(category_id))
        .select(Category::as_select())
        .first(conn)
        .await
        .optional()
        .map_err(AppError::from)
}

pub async fn create(
    conn: &mut AsyncPgConnection,
    new_category: NewCategory,
) -> AppResult<Category> {
    use crate::schema::categories::dsl::*;

    diesel::insert_into(categories)
        .values(&new_category)
        .returning(Category::as_returning())
        .get_result(conn)
        .await
        .map_err(AppError::from)
}

/// Applies a partial update; `updated_at` always bumps, so an update with no
/// changed fields is still a valid statement.
pub async fn update(
    conn: &mut AsyncPgConnection,
    category_id: Uuid,
    changes: UpdateCategory,
) -> AppResult<Category> {
    use crate::schema::categories::dsl::*;

    diesel::update(categories.filter(id.eq(category_id)))
        .set((&changes, updated_at.eq(diesel::dsl::now)))
        .returning(Category::as_returning())
        .get_result(conn)
        .await
        .map_err(AppError::from)
}

/// Deletes a category, returning the removed row for cache and image cleanup.
pub async fn delete(conn: &mut AsyncPgConnection, category_id: Uuid) -> AppResult<Category> {
    use crate::schema::categories::dsl::*;

    diesel::delete(categories.filter(id.eq(category_id)))
        .returning(Category::as_returning())
        .get_result(conn)
        .await
        .map_err(AppError::from)
}

/// Current (id, sort_order) pairs in display order, for compaction.
pub async fn positions(conn: &mut AsyncPgConnection) -> AppResult<Vec<(Uuid, i32)>> {
    use crate::schema::categories::dsl::*;

    categories
        .order((sort_order.asc(), created_at.asc()))
        .select((id, sort_order))
        .load(conn)
        .await
        .map_err(AppError::from)
}

/// Writes one row's position. Reindexing issues one of these per moved row;
/// there is deliberately no surrounding transaction.
pub async fn set_sort_order(
    conn: &mut AsyncPgConnection,
    category_id: Uuid,
    position: i32,
) -> AppResult<usize> {
    use crate::schema::categories::dsl::*;

    diesel::update(categories.filter(id.eq(category_id)))
        .set(sort_order.eq(position))
        .execute(conn)
        .await
        .map_err(AppError::from)
}

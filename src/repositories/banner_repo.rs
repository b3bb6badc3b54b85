//! Banner queries. Banners are ordered within their slot.

use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{Banner, NewBanner, UpdateBanner};

pub async fn list_all(conn: &mut AsyncPgConnection) -> AppResult<Vec<Banner>> {
    use crate::schema::banners::dsl::*;

    banners
        .order((slot.asc(), sort_order.asc(), created_at.asc()))
        .select(Banner::as_select())
        .load(conn)
        .await
        .map_err(AppError::from)
}

pub async fn find_by_id(conn: &mut AsyncPgConnection, banner_id: Uuid) -> AppResult<Option<Banner>> {
    use crate::schema::banners::dsl::*;

    banners
        .filter(id.eq(banner_id))
        .select(Banner::as_select())
        .first(conn)
        .await
        .optional()
        .map_err(AppError::from)
}

pub async fn create(conn: &mut AsyncPgConnection, new_banner: NewBanner) -> AppResult<Banner> {
    use crate::schema::banners::dsl::*;

    diesel::insert_into(banners)
        .values(&new_banner)
        .returning(Banner::as_returning())
        .get_result(conn)
        .await
        .map_err(AppError::from)
}

pub async fn update(
    conn: &mut AsyncPgConnection,
    banner_id: Uuid,
    changes: UpdateBanner,
) -> AppResult<Banner> {
    use crate::schema::banners::dsl::*;

    diesel::update(banners.filter(id.eq(banner_id)))
        .set((&changes, updated_at.eq(diesel::dsl::now)))
        .returning(Banner::as_returning())
        .get_result(conn)
        .await
        .map_err(AppError::from)
}

pub async fn delete(conn: &mut AsyncPgConnection, banner_id: Uuid) -> AppResult<Banner> {
    use crate::schema::banners::dsl::*;

    diesel::delete(banners.filter(id.eq(banner_id)))
        .returning(Banner::as_returning())
        .get_result(conn)
        .await
        .map_err(AppError::from)
}

/// (id, sort_order) pairs for one slot, in display order.
pub async fn positions_in_slot(
    conn: &mut AsyncPgConnection,
    banner_slot: &str,
) -> AppResult<Vec<(Uuid, i32)>> {
    use crate::schema::banners::dsl::*;

    banners
        .filter(slot.eq(banner_slot))
        .order((sort_order.asc(), created_at.asc()))
        .select((id, sort_order))
        .load(conn)
        .await
        .map_err(AppError::from)
}

pub async fn set_sort_order(
    conn: &mut AsyncPgConnection,
    banner_id: Uuid,
    position: i32,
) -> AppResult<usize> {
    use crate::schema::banners::dsl::*;

    diesel::update(banners.filter(id.eq(banner_id)))
        .set(sort_order.eq(position))
        .execute(conn)
        .await
        .map_err(AppError::from)
}

//! Site settings queries. Settings are a flat key to JSON value map.

use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};
use serde_json::Value as JsonValue;

use crate::error::{AppError, AppResult};
use crate::models::SiteSetting;

pub async fn list_all(conn: &mut AsyncPgConnection) -> AppResult<Vec<SiteSetting>> {
    use crate::schema::site_settings::dsl::*;

    site_settings
        .order(key.asc())
        .select(SiteSetting::as_select())
        .load(conn)
        .await
        .map_err(AppError::from)
}

/// Upserts one setting by key.
pub async fn upsert(
    conn: &mut AsyncPgConnection,
    setting_key: &str,
    setting_value: JsonValue,
) -> AppResult<SiteSetting> {
    use crate::schema::site_settings::dsl::*;

    diesel::insert_into(site_settings)
        .values((key.eq(setting_key), value.eq(&setting_value)))
        .on_conflict(key)
        .do_update()
        .set((value.eq(&setting_value), updated_at.eq(diesel::dsl::now)))
        .returning(SiteSetting::as_returning())
        .get_result(conn)
        .await
        .map_err(AppError::from)
}

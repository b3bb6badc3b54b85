use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Site setting row. Settings are a flat key to JSON value map.
#[derive(Debug, Queryable, Selectable, Serialize, Deserialize, Clone, utoipa::ToSchema)]
#[diesel(table_name = crate::schema::site_settings)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct SiteSetting {
    pub key: String,
    #[schema(value_type = Object)]
    pub value: JsonValue,
    pub updated_at: NaiveDateTime,
}

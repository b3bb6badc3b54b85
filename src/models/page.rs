//! Static page and page block models.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use uuid::Uuid;

#[derive(Debug, Queryable, Selectable, Serialize, Deserialize, Clone, utoipa::ToSchema)]
#[diesel(table_name = crate::schema::pages)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Page {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub published: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Insertable, Deserialize, Clone)]
#[diesel(table_name = crate::schema::pages)]
pub struct NewPage {
    pub slug: String,
    pub title: String,
    pub published: bool,
}

#[derive(Debug, AsChangeset, Deserialize, Clone, Default)]
#[diesel(table_name = crate::schema::pages)]
pub struct UpdatePage {
    pub slug: Option<String>,
    pub title: Option<String>,
    pub published: Option<bool>,
}

/// Content block within a page, ordered by `sort_order`.
#[derive(Debug, Queryable, Selectable, Serialize, Deserialize, Clone, utoipa::ToSchema)]
#[diesel(table_name = crate::schema::page_blocks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PageBlock {
    pub id: Uuid,
    pub page_id: Uuid,
    pub kind: String,
    #[schema(value_type = Object)]
    pub content: JsonValue,
    pub sort_order: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Insertable, Deserialize, Clone)]
#[diesel(table_name = crate::schema::page_blocks)]
pub struct NewPageBlock {
    pub page_id: Uuid,
    pub kind: String,
    pub content: JsonValue,
    pub sort_order: i32,
}

#[derive(Debug, AsChangeset, Deserialize, Clone, Default)]
#[diesel(table_name = crate::schema::page_blocks)]
pub struct UpdatePageBlock {
    pub kind: Option<String>,
    pub content: Option<JsonValue>,
    pub sort_order: Option<i32>,
}

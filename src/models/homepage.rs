//! Homepage section and item models.
//!
//! Sections are ordered on the homepage; items are ordered within a section.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Queryable, Selectable, Serialize, Deserialize, Clone, utoipa::ToSchema)]
#[diesel(table_name = crate::schema::homepage_sections)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct HomepageSection {
    pub id: Uuid,
    pub title: String,
    pub kind: String,
    pub visible: bool,
    pub sort_order: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Insertable, Deserialize, Clone)]
#[diesel(table_name = crate::schema::homepage_sections)]
pub struct NewHomepageSection {
    pub title: String,
    pub kind: String,
    pub visible: bool,
    pub sort_order: i32,
}

#[derive(Debug, AsChangeset, Deserialize, Clone, Default)]
#[diesel(table_name = crate::schema::homepage_sections)]
pub struct UpdateHomepageSection {
    pub title: Option<String>,
    pub kind: Option<String>,
    pub visible: Option<bool>,
    pub sort_order: Option<i32>,
}

#[derive(Debug, Queryable, Selectable, Serialize, Deserialize, Clone, utoipa::ToSchema)]
#[diesel(table_name = crate::schema::homepage_items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct HomepageItem {
    pub id: Uuid,
    pub section_id: Uuid,
    pub title: String,
    pub image_url: Option<String>,
    pub link_url: Option<String>,
    pub sort_order: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Insertable, Deserialize, Clone)]
#[diesel(table_name = crate::schema::homepage_items)]
pub struct NewHomepageItem {
    pub section_id: Uuid,
    pub title: String,
    pub image_url: Option<String>,
    pub link_url: Option<String>,
    pub sort_order: i32,
}

#[derive(Debug, AsChangeset, Deserialize, Clone, Default)]
#[diesel(table_name = crate::schema::homepage_items)]
pub struct UpdateHomepageItem {
    pub title: Option<String>,
    pub image_url: Option<Option<String>>,
    pub link_url: Option<Option<String>>,
    pub sort_order: Option<i32>,
}

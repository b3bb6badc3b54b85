use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Banner model. Banners are ordered within their slot.
#[derive(Debug, Queryable, Selectable, Serialize, Deserialize, Clone, utoipa::ToSchema)]
#[diesel(table_name = crate::schema::banners)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Banner {
    pub id: Uuid,
    pub slot: String,
    pub title: String,
    pub image_url: String,
    pub link_url: Option<String>,
    pub active: bool,
    pub sort_order: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Insertable, Deserialize, Clone)]
#[diesel(table_name = crate::schema::banners)]
pub struct NewBanner {
    pub slot: String,
    pub title: String,
    pub image_url: String,
    pub link_url: Option<String>,
    pub active: bool,
    pub sort_order: i32,
}

#[derive(Debug, AsChangeset, Deserialize, Clone, Default)]
#[diesel(table_name = crate::schema::banners)]
pub struct UpdateBanner {
    pub slot: Option<String>,
    pub title: Option<String>,
    pub image_url: Option<String>,
    pub link_url: Option<Option<String>>,
    pub active: Option<bool>,
    pub sort_order: Option<i32>,
}

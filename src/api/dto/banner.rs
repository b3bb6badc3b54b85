//! Banner DTOs.

use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::double_option;
use crate::models::{NewBanner, UpdateBanner};

fn default_active() -> bool {
    true
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBannerRequest {
    #[validate(length(min = 1, max = 100, message = "Slot must be between 1 and 100 characters"))]
    pub slot: String,
    #[validate(length(min = 1, max = 255, message = "Title must be between 1 and 255 characters"))]
    pub title: String,
    #[validate(url(message = "Image URL must be a valid URL"))]
    pub image_url: String,
    pub link_url: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
    /// Position within the slot; omitted means append.
    pub sort_order: Option<i32>,
}

impl From<CreateBannerRequest> for NewBanner {
    fn from(req: CreateBannerRequest) -> Self {
        NewBanner {
            slot: req.slot,
            title: req.title,
            image_url: req.image_url,
            link_url: req.link_url,
            active: req.active,
            sort_order: req.sort_order.unwrap_or(-1),
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateBannerRequest {
    pub id: Uuid,
    #[validate(length(min = 1, max = 100, message = "Slot must be between 1 and 100 characters"))]
    pub slot: Option<String>,
    #[validate(length(min = 1, max = 255, message = "Title must be between 1 and 255 characters"))]
    pub title: Option<String>,
    #[validate(url(message = "Image URL must be a valid URL"))]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub link_url: Option<Option<String>>,
    pub active: Option<bool>,
    pub sort_order: Option<i32>,
}

impl UpdateBannerRequest {
    pub fn into_changes(self) -> (Uuid, UpdateBanner) {
        (
            self.id,
            UpdateBanner {
                slot: self.slot,
                title: self.title,
                image_url: self.image_url,
                link_url: self.link_url,
                active: self.active,
                sort_order: self.sort_order,
            },
        )
    }
}

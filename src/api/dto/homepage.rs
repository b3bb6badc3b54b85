//! Homepage section and item DTOs.

use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use super::double_option;
use crate::models::{
    NewHomepageItem, NewHomepageSection, UpdateHomepageItem, UpdateHomepageSection,
};

fn default_visible() -> bool {
    true
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateHomepageSectionRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be between 1 and 255 characters"))]
    pub title: String,
    #[validate(length(min = 1, max = 100, message = "Kind must be between 1 and 100 characters"))]
    pub kind: String,
    #[serde(default = "default_visible")]
    pub visible: bool,
    /// Position on the homepage; omitted means append.
    pub sort_order: Option<i32>,
}

impl From<CreateHomepageSectionRequest> for NewHomepageSection {
    fn from(req: CreateHomepageSectionRequest) -> Self {
        NewHomepageSection {
            title: req.title,
            kind: req.kind,
            visible: req.visible,
            sort_order: req.sort_order.unwrap_or(-1),
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateHomepageSectionRequest {
    pub id: Uuid,
    #[validate(length(min = 1, max = 255, message = "Title must be between 1 and 255 characters"))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 100, message = "Kind must be between 1 and 100 characters"))]
    pub kind: Option<String>,
    pub visible: Option<bool>,
    pub sort_order: Option<i32>,
}

impl UpdateHomepageSectionRequest {
    pub fn into_changes(self) -> (Uuid, UpdateHomepageSection) {
        (
            self.id,
            UpdateHomepageSection {
                title: self.title,
                kind: self.kind,
                visible: self.visible,
                sort_order: self.sort_order,
            },
        )
    }
}

#[derive(Debug, Deserialize, Validate, IntoParams)]
pub struct HomepageItemQuery {
    /// Restrict the list to one section.
    pub section_id: Option<Uuid>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateHomepageItemRequest {
    pub section_id: Uuid,
    #[validate(length(min = 1, max = 255, message = "Title must be between 1 and 255 characters"))]
    pub title: String,
    pub image_url: Option<String>,
    pub link_url: Option<String>,
    /// Position within the section; omitted means append.
    pub sort_order: Option<i32>,
}

impl From<CreateHomepageItemRequest> for NewHomepageItem {
    fn from(req: CreateHomepageItemRequest) -> Self {
        NewHomepageItem {
            section_id: req.section_id,
            title: req.title,
            image_url: req.image_url,
            link_url: req.link_url,
            sort_order: req.sort_order.unwrap_or(-1),
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateHomepageItemRequest {
    pub id: Uuid,
    #[validate(length(min = 1, max = 255, message = "Title must be between 1 and 255 characters"))]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub image_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub link_url: Option<Option<String>>,
    pub sort_order: Option<i32>,
}

impl UpdateHomepageItemRequest {
    pub fn into_changes(self) -> (Uuid, UpdateHomepageItem) {
        (
            self.id,
            UpdateHomepageItem {
                title: self.title,
                image_url: self.image_url,
                link_url: self.link_url,
                sort_order: self.sort_order,
            },
        )
    }
}

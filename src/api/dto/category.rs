//! Category DTOs.

use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::double_option;
use crate::models::{NewCategory, UpdateCategory};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = 255, message = "Slug must be between 1 and 255 characters"))]
    pub slug: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    /// Position within the list; omitted means append to the end.
    pub sort_order: Option<i32>,
}

impl From<CreateCategoryRequest> for NewCategory {
    fn from(req: CreateCategoryRequest) -> Self {
        NewCategory {
            name: req.name,
            slug: req.slug,
            description: req.description,
            image_url: req.image_url,
            sort_order: req.sort_order.unwrap_or(-1),
        }
    }
}

/// Update payload; `id` travels in the body, not the path. Nullable columns
/// distinguish an absent field (unchanged) from an explicit `null` (clear).
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateCategoryRequest {
    pub id: Uuid,
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 255, message = "Slug must be between 1 and 255 characters"))]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub image_url: Option<Option<String>>,
    pub sort_order: Option<i32>,
}

impl UpdateCategoryRequest {
    pub fn into_changes(self) -> (Uuid, UpdateCategory) {
        (
            self.id,
            UpdateCategory {
                name: self.name,
                slug: self.slug,
                description: self.description,
                image_url: self.image_url,
                sort_order: self.sort_order,
            },
        )
    }
}

//! Static page and page block DTOs.

use serde::Deserialize;
use serde_json::Value as JsonValue;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::models::{NewPage, NewPageBlock, UpdatePage, UpdatePageBlock};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePageRequest {
    #[validate(length(min = 1, max = 255, message = "Slug must be between 1 and 255 characters"))]
    pub slug: String,
    #[validate(length(min = 1, max = 255, message = "Title must be between 1 and 255 characters"))]
    pub title: String,
    #[serde(default)]
    pub published: bool,
}

impl From<CreatePageRequest> for NewPage {
    fn from(req: CreatePageRequest) -> Self {
        NewPage {
            slug: req.slug,
            title: req.title,
            published: req.published,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdatePageRequest {
    pub id: Uuid,
    #[validate(length(min = 1, max = 255, message = "Slug must be between 1 and 255 characters"))]
    pub slug: Option<String>,
    #[validate(length(min = 1, max = 255, message = "Title must be between 1 and 255 characters"))]
    pub title: Option<String>,
    pub published: Option<bool>,
}

impl UpdatePageRequest {
    pub fn into_changes(self) -> (Uuid, UpdatePage) {
        (
            self.id,
            UpdatePage {
                slug: self.slug,
                title: self.title,
                published: self.published,
            },
        )
    }
}

#[derive(Debug, Deserialize, Validate, IntoParams)]
pub struct PageBlockQuery {
    /// Page whose blocks to list.
    pub page_id: Uuid,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePageBlockRequest {
    pub page_id: Uuid,
    #[validate(length(min = 1, max = 100, message = "Kind must be between 1 and 100 characters"))]
    pub kind: String,
    #[schema(value_type = Object)]
    pub content: JsonValue,
    /// Position within the page; omitted means append.
    pub sort_order: Option<i32>,
}

impl From<CreatePageBlockRequest> for NewPageBlock {
    fn from(req: CreatePageBlockRequest) -> Self {
        NewPageBlock {
            page_id: req.page_id,
            kind: req.kind,
            content: req.content,
            sort_order: req.sort_order.unwrap_or(-1),
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdatePageBlockRequest {
    pub id: Uuid,
    #[validate(length(min = 1, max = 100, message = "Kind must be between 1 and 100 characters"))]
    pub kind: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub content: Option<JsonValue>,
    pub sort_order: Option<i32>,
}

impl UpdatePageBlockRequest {
    pub fn into_changes(self) -> (Uuid, UpdatePageBlock) {
        (
            self.id,
            UpdatePageBlock {
                kind: self.kind,
                content: self.content,
                sort_order: self.sort_order,
            },
        )
    }
}

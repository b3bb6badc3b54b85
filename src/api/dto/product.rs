//! Product DTOs, carrying the nested image and spec collections.

use bigdecimal::BigDecimal;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use super::double_option;
use crate::models::{NewProduct, UpdateProduct};
use crate::services::SpecEntry;

fn default_published() -> bool {
    true
}

#[derive(Debug, Deserialize, Validate, IntoParams)]
pub struct ProductQuery {
    /// Restrict the list to one category.
    pub category_id: Option<Uuid>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct SpecDto {
    #[validate(length(min = 1, max = 255, message = "Spec label must not be empty"))]
    pub label: String,
    pub value: String,
}

impl From<SpecDto> for SpecEntry {
    fn from(dto: SpecDto) -> Self {
        SpecEntry {
            label: dto.label,
            value: dto.value,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    pub category_id: Option<Uuid>,
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = 255, message = "Slug must be between 1 and 255 characters"))]
    pub slug: String,
    pub description: Option<String>,
    #[schema(value_type = String)]
    pub price: BigDecimal,
    #[serde(default)]
    pub featured: bool,
    #[serde(default = "default_published")]
    pub published: bool,
    /// Hosted image URLs in display order.
    #[serde(default)]
    pub images: Vec<String>,
    /// Spec rows in display order.
    #[serde(default)]
    #[validate(nested)]
    pub specs: Vec<SpecDto>,
}

impl CreateProductRequest {
    pub fn into_parts(self) -> (NewProduct, Vec<String>, Vec<SpecEntry>) {
        let specs = self.specs.into_iter().map(SpecEntry::from).collect();
        (
            NewProduct {
                category_id: self.category_id,
                name: self.name,
                slug: self.slug,
                description: self.description,
                price: self.price,
                featured: self.featured,
                published: self.published,
            },
            self.images,
            specs,
        )
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    pub id: Uuid,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<Uuid>)]
    pub category_id: Option<Option<Uuid>>,
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 255, message = "Slug must be between 1 and 255 characters"))]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    #[schema(value_type = Option<String>)]
    pub price: Option<BigDecimal>,
    pub featured: Option<bool>,
    pub published: Option<bool>,
    /// `null`/absent leaves images untouched; an array replaces them.
    pub images: Option<Vec<String>>,
    #[validate(nested)]
    pub specs: Option<Vec<SpecDto>>,
}

impl UpdateProductRequest {
    pub fn into_parts(
        self,
    ) -> (
        Uuid,
        UpdateProduct,
        Option<Vec<String>>,
        Option<Vec<SpecEntry>>,
    ) {
        let specs = self
            .specs
            .map(|specs| specs.into_iter().map(SpecEntry::from).collect());
        (
            self.id,
            UpdateProduct {
                category_id: self.category_id,
                name: self.name,
                slug: self.slug,
                description: self.description,
                price: self.price,
                featured: self.featured,
                published: self.published,
            },
            self.images,
            specs,
        )
    }
}

//! Request/response DTOs for the API layer.

mod audit;
mod auth;
mod banner;
mod category;
mod error;
mod health;
mod homepage;
mod page;
mod product;

pub use audit::AuditQuery;
pub use auth::{AdminInfo, LoginRequest, LoginResponse, RefreshTokenRequest};
pub use banner::{CreateBannerRequest, UpdateBannerRequest};
pub use category::{CreateCategoryRequest, UpdateCategoryRequest};
pub use error::{DeleteResponse, ErrorResponse};
pub use health::{HealthResponse, ReadinessResponse};
pub use homepage::{
    CreateHomepageItemRequest, CreateHomepageSectionRequest, HomepageItemQuery,
    UpdateHomepageItemRequest, UpdateHomepageSectionRequest,
};
pub use page::{
    CreatePageBlockRequest, CreatePageRequest, PageBlockQuery, UpdatePageBlockRequest,
    UpdatePageRequest,
};
pub use product::{CreateProductRequest, ProductQuery, SpecDto, UpdateProductRequest};

use serde::{Deserialize, Deserializer};
use uuid::Uuid;
use validator::Validate;

use crate::error::AppResult;

/// Deserializer for `Option<Option<T>>` fields that distinguishes an absent
/// field (`None`, leave unchanged) from an explicit `null`
/// (`Some(None)`, clear the column). Use with `#[serde(default,
/// deserialize_with = "double_option")]`.
pub(crate) fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(de).map(Some)
}

/// PUT bodies are either one update object or an array of them (the bulk
/// form used for drag-reorder persistence).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T: Validate> OneOrMany<T> {
    /// Runs validator rules on every contained item.
    pub fn validate_all(&self) -> AppResult<()> {
        match self {
            OneOrMany::One(item) => item.validate()?,
            OneOrMany::Many(items) => {
                for item in items {
                    item.validate()?;
                }
            }
        }
        Ok(())
    }
}

/// `?id=` query parameter used by all DELETE routes.
#[derive(Debug, Deserialize, Validate, utoipa::IntoParams)]
pub struct DeleteQuery {
    pub id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "double_option")]
        description: Option<Option<String>>,
    }

    #[test]
    fn double_option_distinguishes_absent_from_null() {
        let absent: Patch = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.description, None);

        let null: Patch = serde_json::from_str(r#"{"description": null}"#).unwrap();
        assert_eq!(null.description, Some(None));

        let set: Patch = serde_json::from_str(r#"{"description": "hi"}"#).unwrap();
        assert_eq!(set.description, Some(Some("hi".to_string())));
    }

    #[test]
    fn one_or_many_accepts_both_shapes() {
        #[derive(Debug, Deserialize)]
        struct Item {
            id: u32,
        }

        let one: OneOrMany<Item> = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert!(matches!(one, OneOrMany::One(Item { id: 1 })));

        let many: OneOrMany<Item> = serde_json::from_str(r#"[{"id": 1}, {"id": 2}]"#).unwrap();
        match many {
            OneOrMany::Many(items) => assert_eq!(items.len(), 2),
            other => panic!("expected Many, got {:?}", other),
        }
    }
}

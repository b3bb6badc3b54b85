//! Product business logic.
//!
//! Products carry two child collections (images and spec rows) that the
//! admin frontend always submits wholesale, so writes replace them rather
//! than patching. Listing is cached per category filter.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cache::{CacheKey, TtlCache};
use crate::config::settings::CacheConfig;
use crate::db::Db;
use crate::error::{AppError, AppResult};
use crate::external::MediaClient;
use crate::models::{
    AuditAction, NewProduct, NewProductImage, NewProductSpec, Product, ProductImage, ProductSpec,
    UpdateProduct,
};
use crate::repositories::product_repo;
use crate::services::audit::{Actor, AuditService};

/// Product with its ordered images and spec rows, as served to the admin UI.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ProductDetail {
    #[serde(flatten)]
    pub product: Product,
    pub images: Vec<ProductImage>,
    pub specs: Vec<ProductSpec>,
}

/// Label/value spec row as submitted by the frontend; order in the list is
/// the display order.
#[derive(Debug, Clone)]
pub struct SpecEntry {
    pub label: String,
    pub value: String,
}

#[derive(Clone)]
pub struct ProductService {
    db: Db,
    cache: Arc<TtlCache>,
    cache_cfg: CacheConfig,
    audit: AuditService,
    media: MediaClient,
}

impl ProductService {
    pub fn new(
        db: Db,
        cache: Arc<TtlCache>,
        cache_cfg: CacheConfig,
        audit: AuditService,
        media: MediaClient,
    ) -> Self {
        Self {
            db,
            cache,
            cache_cfg,
            audit,
            media,
        }
    }

    pub fn cache_ttl_seconds(&self) -> u64 {
        self.cache_cfg.products_ttl_seconds
    }

    /// Lists products with children, optionally filtered by category. Each
    /// filter value is its own cache key.
    pub async fn list(&self, category: Option<Uuid>) -> AppResult<Vec<ProductDetail>> {
        let key = CacheKey::Products { category };
        let ttl = Duration::from_secs(self.cache_ttl_seconds());
        if self.cache_cfg.enabled {
            if let Some(hit) = self.cache.get::<Vec<ProductDetail>>(&key, ttl) {
                return Ok(hit);
            }
        }

        let details = self
            .db
            .read("list products", |conn| {
                Box::pin(async move {
                    let products = product_repo::list(conn, category).await?;
                    let ids: Vec<Uuid> = products.iter().map(|p| p.id).collect();
                    let images = product_repo::images_for(conn, &ids).await?;
                    let specs = product_repo::specs_for(conn, &ids).await?;
                    Ok(assemble(products, images, specs))
                })
            })
            .await?;

        if self.cache_cfg.enabled {
            self.cache.insert(key, &details);
        }
        Ok(details)
    }

    pub async fn get(&self, id: Uuid) -> AppResult<ProductDetail> {
        self.db
            .read("get product", |conn| {
                Box::pin(async move {
                    let product = product_repo::find_by_id(conn, id)
                        .await?
                        .ok_or_else(|| not_found(id))?;
                    let images = product_repo::list_images(conn, id).await?;
                    let specs = product_repo::list_specs(conn, id).await?;
                    Ok(ProductDetail {
                        product,
                        images,
                        specs,
                    })
                })
            })
            .await
    }

    /// Creates a product and its children. The three writes are sequential
    /// and non-transactional; each escalates independently if needed.
    pub async fn create(
        &self,
        actor: &Actor,
        data: NewProduct,
        image_urls: Vec<String>,
        specs: Vec<SpecEntry>,
    ) -> AppResult<ProductDetail> {
        let product = self
            .db
            .mutate("create product", |conn| {
                let data = data.clone();
                Box::pin(async move { product_repo::create(conn, data).await })
            })
            .await?;

        let images = self.write_images(product.id, &image_urls).await?;
        let spec_rows = self.write_specs(product.id, &specs).await?;

        self.audit
            .record(actor, "product", &product.id.to_string(), AuditAction::Create)
            .await;
        self.invalidate(product.category_id);

        Ok(ProductDetail {
            product,
            images,
            specs: spec_rows,
        })
    }

    /// Applies a partial update; `images`/`specs` of `None` leave the child
    /// collections untouched, `Some` replaces them wholesale.
    pub async fn update(
        &self,
        actor: &Actor,
        id: Uuid,
        changes: UpdateProduct,
        image_urls: Option<Vec<String>>,
        specs: Option<Vec<SpecEntry>>,
    ) -> AppResult<ProductDetail> {
        let previous_category = self
            .db
            .read("get product", |conn| {
                Box::pin(product_repo::find_by_id(conn, id))
            })
            .await?
            .ok_or_else(|| not_found(id))?
            .category_id;

        let product = self
            .db
            .mutate("update product", |conn| {
                let changes = changes.clone();
                Box::pin(async move { product_repo::update(conn, id, changes).await })
            })
            .await?;

        let images = match image_urls {
            Some(urls) => self.write_images(id, &urls).await?,
            None => {
                self.db
                    .read("list product images", |conn| {
                        Box::pin(product_repo::list_images(conn, id))
                    })
                    .await?
            }
        };
        let spec_rows = match specs {
            Some(entries) => self.write_specs(id, &entries).await?,
            None => {
                self.db
                    .read("list product specs", |conn| {
                        Box::pin(product_repo::list_specs(conn, id))
                    })
                    .await?
            }
        };

        self.audit
            .record(actor, "product", &id.to_string(), AuditAction::Update)
            .await;
        self.invalidate(previous_category);
        if product.category_id != previous_category {
            self.invalidate(product.category_id);
        }

        Ok(ProductDetail {
            product,
            images,
            specs: spec_rows,
        })
    }

    /// Reorder persistence: one UPDATE per submitted row, sequentially, with
    /// one audit entry for the batch.
    pub async fn update_bulk(
        &self,
        actor: &Actor,
        updates: Vec<(Uuid, UpdateProduct)>,
    ) -> AppResult<Vec<Product>> {
        let mut rows = Vec::with_capacity(updates.len());
        for (id, changes) in &updates {
            let id = *id;
            let row = self
                .db
                .mutate("update product", |conn| {
                    let changes = changes.clone();
                    Box::pin(async move { product_repo::update(conn, id, changes).await })
                })
                .await?;
            rows.push(row);
        }

        self.audit
            .record(
                actor,
                "product",
                &format!("bulk({})", updates.len()),
                AuditAction::Update,
            )
            .await;
        self.cache.remove(&CacheKey::Products { category: None });
        for row in &rows {
            if let Some(cat) = row.category_id {
                self.cache
                    .remove(&CacheKey::Products { category: Some(cat) });
            }
        }
        Ok(rows)
    }

    /// Deletes a product: its hosted images go first (best-effort), then the
    /// row; children cascade via foreign keys.
    pub async fn delete(&self, actor: &Actor, id: Uuid) -> AppResult<()> {
        let urls = self
            .db
            .read("list product image urls", |conn| {
                Box::pin(product_repo::image_urls(conn, id))
            })
            .await?;
        self.media.delete_all(&urls).await;

        let product = self
            .db
            .mutate("delete product", |conn| {
                Box::pin(product_repo::delete(conn, id))
            })
            .await?;

        self.audit
            .record(actor, "product", &id.to_string(), AuditAction::Delete)
            .await;
        self.invalidate(product.category_id);
        Ok(())
    }

    async fn write_images(
        &self,
        product: Uuid,
        urls: &[String],
    ) -> AppResult<Vec<ProductImage>> {
        self.db
            .mutate("replace product images", |conn| {
                let rows: Vec<NewProductImage> = urls
                    .iter()
                    .enumerate()
                    .map(|(index, url)| NewProductImage {
                        product_id: product,
                        url: url.clone(),
                        sort_order: index as i32,
                    })
                    .collect();
                Box::pin(async move { product_repo::replace_images(conn, product, rows).await })
            })
            .await
    }

    async fn write_specs(
        &self,
        product: Uuid,
        entries: &[SpecEntry],
    ) -> AppResult<Vec<ProductSpec>> {
        self.db
            .mutate("replace product specs", |conn| {
                let rows: Vec<NewProductSpec> = entries
                    .iter()
                    .enumerate()
                    .map(|(index, entry)| NewProductSpec {
                        product_id: product,
                        label: entry.label.clone(),
                        value: entry.value.clone(),
                        sort_order: index as i32,
                    })
                    .collect();
                Box::pin(async move { product_repo::replace_specs(conn, product, rows).await })
            })
            .await
    }

    fn invalidate(&self, category: Option<Uuid>) {
        self.cache.remove(&CacheKey::Products { category: None });
        if category.is_some() {
            self.cache.remove(&CacheKey::Products { category });
        }
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound {
        entity: "product".to_string(),
        field: "id".to_string(),
        value: id.to_string(),
    }
}

fn assemble(
    products: Vec<Product>,
    images: Vec<ProductImage>,
    specs: Vec<ProductSpec>,
) -> Vec<ProductDetail> {
    products
        .into_iter()
        .map(|product| {
            let id = product.id;
            ProductDetail {
                product,
                images: images.iter().filter(|i| i.product_id == id).cloned().collect(),
                specs: specs.iter().filter(|s| s.product_id == id).cloned().collect(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;
    use chrono::NaiveDateTime;

    fn product(id: Uuid) -> Product {
        Product {
            id,
            category_id: None,
            name: "Widget".to_string(),
            slug: "widget".to_string(),
            description: None,
            price: BigDecimal::from(10),
            featured: false,
            published: true,
            created_at: NaiveDateTime::default(),
            updated_at: NaiveDateTime::default(),
        }
    }

    #[test]
    fn assemble_groups_children_by_product() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let images = vec![
            ProductImage {
                id: Uuid::new_v4(),
                product_id: a,
                url: "https://img.example/a0.jpg".to_string(),
                sort_order: 0,
            },
            ProductImage {
                id: Uuid::new_v4(),
                product_id: b,
                url: "https://img.example/b0.jpg".to_string(),
                sort_order: 0,
            },
        ];
        let specs = vec![ProductSpec {
            id: Uuid::new_v4(),
            product_id: a,
            label: "Weight".to_string(),
            value: "2kg".to_string(),
            sort_order: 0,
        }];

        let details = assemble(vec![product(a), product(b)], images, specs);
        assert_eq!(details.len(), 2);
        assert_eq!(details[0].images.len(), 1);
        assert_eq!(details[0].specs.len(), 1);
        assert_eq!(details[1].images.len(), 1);
        assert!(details[1].specs.is_empty());
    }

    #[test]
    fn detail_serializes_flat() {
        let detail = ProductDetail {
            product: product(Uuid::nil()),
            images: vec![],
            specs: vec![],
        };
        let json = serde_json::to_value(&detail).unwrap();
        // Product fields sit at the top level next to the child arrays.
        assert!(json.get("name").is_some());
        assert!(json.get("images").is_some());
        assert!(json.get("product").is_none());
    }
}

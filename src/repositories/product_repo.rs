//! Product queries, including the image and spec child tables.

use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{
    NewProduct, NewProductImage, NewProductSpec, Product, ProductImage, ProductSpec, UpdateProduct,
};

/// Lists products, optionally restricted to one category, newest first.
pub async fn list(
    conn: &mut AsyncPgConnection,
    category: Option<Uuid>,
) -> AppResult<Vec<Product>> {
    use crate::schema::products::dsl::*;

    let mut query = products.into_boxed();
    if let Some(cat) = category {
        query = query.filter(category_id.eq(cat));
    }

    query
        .order(created_at.desc())
        .select(Product::as_select())
        .load(conn)
        .await
        .map_err(AppError::from)
}

pub async fn find_by_id(
    conn: &mut AsyncPgConnection,
    product_id: Uuid,
) -> AppResult<Option<Product>> {
    use crate::schema::products::dsl::*;

    products
        .filter(id.eq(product_id))
        .select(Product::as_select())
        .first(conn)
        .await
        .optional()
        .map_err(AppError::from)
}

pub async fn create(conn: &mut AsyncPgConnection, new_product: NewProduct) -> AppResult<Product> {
    use crate::schema::products::dsl::*;

    diesel::insert_into(products)
        .values(&new_product)
        .returning(Product::as_returning())
        .get_result(conn)
        .await
        .map_err(AppError::from)
}

pub async fn update(
    conn: &mut AsyncPgConnection,
    product_id: Uuid,
    changes: UpdateProduct,
) -> AppResult<Product> {
    use crate::schema::products::dsl::*;

    diesel::update(products.filter(id.eq(product_id)))
        .set((&changes, updated_at.eq(diesel::dsl::now)))
        .returning(Product::as_returning())
        .get_result(conn)
        .await
        .map_err(AppError::from)
}

/// Deletes a product. Images and specs go with it via the FK cascade.
pub async fn delete(conn: &mut AsyncPgConnection, product_id: Uuid) -> AppResult<Product> {
    use crate::schema::products::dsl::*;

    diesel::delete(products.filter(id.eq(product_id)))
        .returning(Product::as_returning())
        .get_result(conn)
        .await
        .map_err(AppError::from)
}

// ---------------------------------------------------------------------------
// Images
// ---------------------------------------------------------------------------

pub async fn list_images(
    conn: &mut AsyncPgConnection,
    product: Uuid,
) -> AppResult<Vec<ProductImage>> {
    use crate::schema::product_images::dsl::*;

    product_images
        .filter(product_id.eq(product))
        .order(sort_order.asc())
        .select(ProductImage::as_select())
        .load(conn)
        .await
        .map_err(AppError::from)
}

/// Images for a set of products in one query, for list assembly.
pub async fn images_for(
    conn: &mut AsyncPgConnection,
    products: &[Uuid],
) -> AppResult<Vec<ProductImage>> {
    use crate::schema::product_images::dsl::*;

    product_images
        .filter(product_id.eq_any(products))
        .order((product_id.asc(), sort_order.asc()))
        .select(ProductImage::as_select())
        .load(conn)
        .await
        .map_err(AppError::from)
}

/// Specs for a set of products in one query.
pub async fn specs_for(
    conn: &mut AsyncPgConnection,
    products: &[Uuid],
) -> AppResult<Vec<ProductSpec>> {
    use crate::schema::product_specs::dsl::*;

    product_specs
        .filter(product_id.eq_any(products))
        .order((product_id.asc(), sort_order.asc()))
        .select(ProductSpec::as_select())
        .load(conn)
        .await
        .map_err(AppError::from)
}

/// URLs of all images belonging to a product, for external media cleanup.
pub async fn image_urls(conn: &mut AsyncPgConnection, product: Uuid) -> AppResult<Vec<String>> {
    use crate::schema::product_images::dsl::*;

    product_images
        .filter(product_id.eq(product))
        .order(sort_order.asc())
        .select(url)
        .load(conn)
        .await
        .map_err(AppError::from)
}

/// Replaces a product's image set wholesale: delete then insert in the order
/// given. The frontend always sends the full list.
pub async fn replace_images(
    conn: &mut AsyncPgConnection,
    product: Uuid,
    images: Vec<NewProductImage>,
) -> AppResult<Vec<ProductImage>> {
    use crate::schema::product_images::dsl::*;

    diesel::delete(product_images.filter(product_id.eq(product)))
        .execute(conn)
        .await?;

    if images.is_empty() {
        return Ok(Vec::new());
    }

    diesel::insert_into(product_images)
        .values(&images)
        .returning(ProductImage::as_returning())
        .get_results(conn)
        .await
        .map_err(AppError::from)
}

// ---------------------------------------------------------------------------
// Specs
// ---------------------------------------------------------------------------

pub async fn list_specs(
    conn: &mut AsyncPgConnection,
    product: Uuid,
) -> AppResult<Vec<ProductSpec>> {
    use crate::schema::product_specs::dsl::*;

    product_specs
        .filter(product_id.eq(product))
        .order(sort_order.asc())
        .select(ProductSpec::as_select())
        .load(conn)
        .await
        .map_err(AppError::from)
}

pub async fn replace_specs(
    conn: &mut AsyncPgConnection,
    product: Uuid,
    specs: Vec<NewProductSpec>,
) -> AppResult<Vec<ProductSpec>> {
    use crate::schema::product_specs::dsl::*;

    diesel::delete(product_specs.filter(product_id.eq(product)))
        .execute(conn)
        .await?;

    if specs.is_empty() {
        return Ok(Vec::new());
    }

    diesel::insert_into(product_specs)
        .values(&specs)
        .returning(ProductSpec::as_returning())
        .get_results(conn)
        .await
        .map_err(AppError::from)
}

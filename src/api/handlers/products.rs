//! Product CRUD handlers.
//!
//! Products travel with their nested image and spec collections; the list is
//! cached per category filter.

use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use super::{cache_control, json_value};
use crate::api::doc::PRODUCT_TAG;
use crate::api::dto::{
    CreateProductRequest, DeleteQuery, DeleteResponse, OneOrMany, ProductQuery,
    UpdateProductRequest,
};
use crate::api::middleware::AuthAdmin;
use crate::error::AppResult;
use crate::services::ProductDetail;
use crate::state::AppState;
use crate::utils::validate::{ValidatedJson, ValidatedQuery};

pub fn product_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(
        list_products,
        create_product,
        update_products,
        delete_product
    ))
}

/// GET /api/admin/products?category_id= - List products with children
#[utoipa::path(
    get,
    path = "",
    tag = PRODUCT_TAG,
    security(("bearerAuth" = [])),
    params(ProductQuery),
    responses(
        (status = 200, description = "Products, newest first", body = [ProductDetail])
    )
)]
async fn list_products(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<ProductQuery>,
) -> AppResult<impl IntoResponse> {
    let rows = state.services.products.list(query.category_id).await?;
    let ttl = state.services.products.cache_ttl_seconds();
    Ok((cache_control(ttl), Json(rows)))
}

/// POST /api/admin/products - Create a product with images and specs
#[utoipa::path(
    post,
    path = "",
    tag = PRODUCT_TAG,
    security(("bearerAuth" = [])),
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = ProductDetail),
        (status = 400, description = "Invalid request data")
    )
)]
async fn create_product(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthAdmin>,
    ValidatedJson(payload): ValidatedJson<CreateProductRequest>,
) -> AppResult<(StatusCode, Json<ProductDetail>)> {
    let (data, images, specs) = payload.into_parts();
    let detail = state
        .services
        .products
        .create(&admin.actor(), data, images, specs)
        .await?;
    Ok((StatusCode::CREATED, Json(detail)))
}

/// PUT /api/admin/products - Update one product or a batch
///
/// In the single form, `images`/`specs` arrays replace the child collections
/// wholesale when present and leave them untouched when absent. The bulk
/// (array) form touches only the product rows.
#[utoipa::path(
    put,
    path = "",
    tag = PRODUCT_TAG,
    security(("bearerAuth" = [])),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Updated row(s)"),
        (status = 404, description = "Product not found")
    )
)]
async fn update_products(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthAdmin>,
    Json(payload): Json<OneOrMany<UpdateProductRequest>>,
) -> AppResult<Json<serde_json::Value>> {
    payload.validate_all()?;
    let actor = admin.actor();

    let body = match payload {
        OneOrMany::One(req) => {
            let (id, changes, images, specs) = req.into_parts();
            let detail = state
                .services
                .products
                .update(&actor, id, changes, images, specs)
                .await?;
            json_value(detail)?
        }
        OneOrMany::Many(reqs) => {
            let updates = reqs
                .into_iter()
                .map(|req| {
                    let (id, changes, _, _) = req.into_parts();
                    (id, changes)
                })
                .collect();
            let rows = state.services.products.update_bulk(&actor, updates).await?;
            json_value(rows)?
        }
    };
    Ok(Json(body))
}

/// DELETE /api/admin/products?id= - Delete a product
///
/// Hosted images are deleted by URL first (best-effort); the child rows
/// cascade with the product.
#[utoipa::path(
    delete,
    path = "",
    tag = PRODUCT_TAG,
    security(("bearerAuth" = [])),
    params(DeleteQuery),
    responses(
        (status = 200, description = "Product deleted", body = DeleteResponse),
        (status = 404, description = "Product not found")
    )
)]
async fn delete_product(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthAdmin>,
    ValidatedQuery(query): ValidatedQuery<DeleteQuery>,
) -> AppResult<Json<DeleteResponse>> {
    state
        .services
        .products
        .delete(&admin.actor(), query.id)
        .await?;
    Ok(Json(DeleteResponse::ok()))
}

//! Category CRUD handlers.

use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use super::{cache_control, json_value};
use crate::api::doc::CATEGORY_TAG;
use crate::api::dto::{
    CreateCategoryRequest, DeleteQuery, DeleteResponse, OneOrMany, UpdateCategoryRequest,
};
use crate::api::middleware::AuthAdmin;
use crate::error::AppResult;
use crate::models::Category;
use crate::state::AppState;
use crate::utils::validate::{ValidatedJson, ValidatedQuery};

pub fn category_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(
        list_categories,
        create_category,
        update_categories,
        delete_category
    ))
}

/// GET /api/admin/categories - List categories in display order
#[utoipa::path(
    get,
    path = "",
    tag = CATEGORY_TAG,
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Categories in display order", body = [Category])
    )
)]
async fn list_categories(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let rows = state.services.categories.list().await?;
    let ttl = state.services.categories.cache_ttl_seconds();
    Ok((cache_control(ttl), Json(rows)))
}

/// POST /api/admin/categories - Create a category
#[utoipa::path(
    post,
    path = "",
    tag = CATEGORY_TAG,
    security(("bearerAuth" = [])),
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created", body = Category),
        (status = 400, description = "Invalid request data")
    )
)]
async fn create_category(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthAdmin>,
    ValidatedJson(payload): ValidatedJson<CreateCategoryRequest>,
) -> AppResult<(StatusCode, Json<Category>)> {
    let row = state
        .services
        .categories
        .create(&admin.actor(), payload.into())
        .await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// PUT /api/admin/categories - Update one category or a batch
///
/// The `id` travels in the body. An array body is the bulk form used for
/// drag-reorder persistence; the response mirrors the request shape.
#[utoipa::path(
    put,
    path = "",
    tag = CATEGORY_TAG,
    security(("bearerAuth" = [])),
    request_body = UpdateCategoryRequest,
    responses(
        (status = 200, description = "Updated row(s)"),
        (status = 404, description = "Category not found")
    )
)]
async fn update_categories(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthAdmin>,
    Json(payload): Json<OneOrMany<UpdateCategoryRequest>>,
) -> AppResult<Json<serde_json::Value>> {
    payload.validate_all()?;
    let actor = admin.actor();

    let body = match payload {
        OneOrMany::One(req) => {
            let (id, changes) = req.into_changes();
            let row = state.services.categories.update(&actor, id, changes).await?;
            json_value(row)?
        }
        OneOrMany::Many(reqs) => {
            let updates = reqs
                .into_iter()
                .map(UpdateCategoryRequest::into_changes)
                .collect();
            let rows = state.services.categories.update_bulk(&actor, updates).await?;
            json_value(rows)?
        }
    };
    Ok(Json(body))
}

/// DELETE /api/admin/categories?id= - Delete a category
///
/// Survivors are reindexed densely; the category image is removed from the
/// media host as a best-effort side call.
#[utoipa::path(
    delete,
    path = "",
    tag = CATEGORY_TAG,
    security(("bearerAuth" = [])),
    params(DeleteQuery),
    responses(
        (status = 200, description = "Category deleted", body = DeleteResponse),
        (status = 404, description = "Category not found")
    )
)]
async fn delete_category(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthAdmin>,
    ValidatedQuery(query): ValidatedQuery<DeleteQuery>,
) -> AppResult<Json<DeleteResponse>> {
    state
        .services
        .categories
        .delete(&admin.actor(), query.id)
        .await?;
    Ok(Json(DeleteResponse::ok()))
}

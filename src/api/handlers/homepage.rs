//! Homepage section and item handlers.
//!
//! Sections are ordered on the homepage; items within their section. Both
//! live under `/api/admin/homepage/`.

use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use super::{cache_control, json_value};
use crate::api::doc::HOMEPAGE_TAG;
use crate::api::dto::{
    CreateHomepageItemRequest, CreateHomepageSectionRequest, DeleteQuery, DeleteResponse,
    HomepageItemQuery, OneOrMany, UpdateHomepageItemRequest, UpdateHomepageSectionRequest,
};
use crate::api::middleware::AuthAdmin;
use crate::error::AppResult;
use crate::models::{HomepageItem, HomepageSection};
use crate::state::AppState;
use crate::utils::validate::{ValidatedJson, ValidatedQuery};

pub fn homepage_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(
            list_sections,
            create_section,
            update_sections,
            delete_section
        ))
        .routes(routes!(list_items, create_item, update_items, delete_item))
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

/// GET /api/admin/homepage/sections - List sections in display order
#[utoipa::path(
    get,
    path = "/sections",
    tag = HOMEPAGE_TAG,
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Sections in display order", body = [HomepageSection])
    )
)]
async fn list_sections(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let rows = state.services.homepage.list_sections().await?;
    let ttl = state.services.homepage.cache_ttl_seconds();
    Ok((cache_control(ttl), Json(rows)))
}

/// POST /api/admin/homepage/sections - Create a section
#[utoipa::path(
    post,
    path = "/sections",
    tag = HOMEPAGE_TAG,
    security(("bearerAuth" = [])),
    request_body = CreateHomepageSectionRequest,
    responses(
        (status = 201, description = "Section created", body = HomepageSection),
        (status = 400, description = "Invalid request data")
    )
)]
async fn create_section(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthAdmin>,
    ValidatedJson(payload): ValidatedJson<CreateHomepageSectionRequest>,
) -> AppResult<(StatusCode, Json<HomepageSection>)> {
    let row = state
        .services
        .homepage
        .create_section(&admin.actor(), payload.into())
        .await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// PUT /api/admin/homepage/sections - Update one section or a batch
#[utoipa::path(
    put,
    path = "/sections",
    tag = HOMEPAGE_TAG,
    security(("bearerAuth" = [])),
    request_body = UpdateHomepageSectionRequest,
    responses(
        (status = 200, description = "Updated row(s)"),
        (status = 404, description = "Section not found")
    )
)]
async fn update_sections(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthAdmin>,
    Json(payload): Json<OneOrMany<UpdateHomepageSectionRequest>>,
) -> AppResult<Json<serde_json::Value>> {
    payload.validate_all()?;
    let actor = admin.actor();

    let body = match payload {
        OneOrMany::One(req) => {
            let (id, changes) = req.into_changes();
            let row = state
                .services
                .homepage
                .update_section(&actor, id, changes)
                .await?;
            json_value(row)?
        }
        OneOrMany::Many(reqs) => {
            let updates = reqs
                .into_iter()
                .map(UpdateHomepageSectionRequest::into_changes)
                .collect();
            let rows = state
                .services
                .homepage
                .update_sections_bulk(&actor, updates)
                .await?;
            json_value(rows)?
        }
    };
    Ok(Json(body))
}

/// DELETE /api/admin/homepage/sections?id= - Delete a section
///
/// Its items cascade; surviving sections are reindexed.
#[utoipa::path(
    delete,
    path = "/sections",
    tag = HOMEPAGE_TAG,
    security(("bearerAuth" = [])),
    params(DeleteQuery),
    responses(
        (status = 200, description = "Section deleted", body = DeleteResponse),
        (status = 404, description = "Section not found")
    )
)]
async fn delete_section(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthAdmin>,
    ValidatedQuery(query): ValidatedQuery<DeleteQuery>,
) -> AppResult<Json<DeleteResponse>> {
    state
        .services
        .homepage
        .delete_section(&admin.actor(), query.id)
        .await?;
    Ok(Json(DeleteResponse::ok()))
}

// ---------------------------------------------------------------------------
// Items
// ---------------------------------------------------------------------------

/// GET /api/admin/homepage/items?section_id= - List items
#[utoipa::path(
    get,
    path = "/items",
    tag = HOMEPAGE_TAG,
    security(("bearerAuth" = [])),
    params(HomepageItemQuery),
    responses(
        (status = 200, description = "Items in section order", body = [HomepageItem])
    )
)]
async fn list_items(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<HomepageItemQuery>,
) -> AppResult<Json<Vec<HomepageItem>>> {
    let rows = state.services.homepage.list_items(query.section_id).await?;
    Ok(Json(rows))
}

/// POST /api/admin/homepage/items - Create an item
#[utoipa::path(
    post,
    path = "/items",
    tag = HOMEPAGE_TAG,
    security(("bearerAuth" = [])),
    request_body = CreateHomepageItemRequest,
    responses(
        (status = 201, description = "Item created", body = HomepageItem),
        (status = 400, description = "Invalid request data")
    )
)]
async fn create_item(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthAdmin>,
    ValidatedJson(payload): ValidatedJson<CreateHomepageItemRequest>,
) -> AppResult<(StatusCode, Json<HomepageItem>)> {
    let row = state
        .services
        .homepage
        .create_item(&admin.actor(), payload.into())
        .await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// PUT /api/admin/homepage/items - Update one item or a batch
#[utoipa::path(
    put,
    path = "/items",
    tag = HOMEPAGE_TAG,
    security(("bearerAuth" = [])),
    request_body = UpdateHomepageItemRequest,
    responses(
        (status = 200, description = "Updated row(s)"),
        (status = 404, description = "Item not found")
    )
)]
async fn update_items(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthAdmin>,
    Json(payload): Json<OneOrMany<UpdateHomepageItemRequest>>,
) -> AppResult<Json<serde_json::Value>> {
    payload.validate_all()?;
    let actor = admin.actor();

    let body = match payload {
        OneOrMany::One(req) => {
            let (id, changes) = req.into_changes();
            let row = state
                .services
                .homepage
                .update_item(&actor, id, changes)
                .await?;
            json_value(row)?
        }
        OneOrMany::Many(reqs) => {
            let updates = reqs
                .into_iter()
                .map(UpdateHomepageItemRequest::into_changes)
                .collect();
            let rows = state
                .services
                .homepage
                .update_items_bulk(&actor, updates)
                .await?;
            json_value(rows)?
        }
    };
    Ok(Json(body))
}

/// DELETE /api/admin/homepage/items?id= - Delete an item
///
/// Its section's survivors are reindexed; the item image is removed from the
/// media host as a best-effort side call.
#[utoipa::path(
    delete,
    path = "/items",
    tag = HOMEPAGE_TAG,
    security(("bearerAuth" = [])),
    params(DeleteQuery),
    responses(
        (status = 200, description = "Item deleted", body = DeleteResponse),
        (status = 404, description = "Item not found")
    )
)]
async fn delete_item(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthAdmin>,
    ValidatedQuery(query): ValidatedQuery<DeleteQuery>,
) -> AppResult<Json<DeleteResponse>> {
    state
        .services
        .homepage
        .delete_item(&admin.actor(), query.id)
        .await?;
    Ok(Json(DeleteResponse::ok()))
}

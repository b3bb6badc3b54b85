//! Static page and page block handlers.

use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use super::{cache_control, json_value};
use crate::api::doc::PAGE_TAG;
use crate::api::dto::{
    CreatePageBlockRequest, CreatePageRequest, DeleteQuery, DeleteResponse, OneOrMany,
    PageBlockQuery, UpdatePageBlockRequest, UpdatePageRequest,
};
use crate::api::middleware::AuthAdmin;
use crate::error::AppResult;
use crate::models::{Page, PageBlock};
use crate::state::AppState;
use crate::utils::validate::{ValidatedJson, ValidatedQuery};

pub fn page_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_pages, create_page, update_pages, delete_page))
        .routes(routes!(
            list_blocks,
            create_block,
            update_blocks,
            delete_block
        ))
}

// ---------------------------------------------------------------------------
// Pages
// ---------------------------------------------------------------------------

/// GET /api/admin/pages - List pages by slug
#[utoipa::path(
    get,
    path = "",
    tag = PAGE_TAG,
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Pages ordered by slug", body = [Page])
    )
)]
async fn list_pages(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let rows = state.services.pages.list_pages().await?;
    let ttl = state.services.pages.cache_ttl_seconds();
    Ok((cache_control(ttl), Json(rows)))
}

/// POST /api/admin/pages - Create a page
#[utoipa::path(
    post,
    path = "",
    tag = PAGE_TAG,
    security(("bearerAuth" = [])),
    request_body = CreatePageRequest,
    responses(
        (status = 201, description = "Page created", body = Page),
        (status = 400, description = "Invalid request data"),
        (status = 409, description = "Slug already exists")
    )
)]
async fn create_page(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthAdmin>,
    ValidatedJson(payload): ValidatedJson<CreatePageRequest>,
) -> AppResult<(StatusCode, Json<Page>)> {
    let row = state
        .services
        .pages
        .create_page(&admin.actor(), payload.into())
        .await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// PUT /api/admin/pages - Update one page or a batch
#[utoipa::path(
    put,
    path = "",
    tag = PAGE_TAG,
    security(("bearerAuth" = [])),
    request_body = UpdatePageRequest,
    responses(
        (status = 200, description = "Updated row(s)"),
        (status = 404, description = "Page not found")
    )
)]
async fn update_pages(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthAdmin>,
    Json(payload): Json<OneOrMany<UpdatePageRequest>>,
) -> AppResult<Json<serde_json::Value>> {
    payload.validate_all()?;
    let actor = admin.actor();

    let body = match payload {
        OneOrMany::One(req) => {
            let (id, changes) = req.into_changes();
            let row = state.services.pages.update_page(&actor, id, changes).await?;
            json_value(row)?
        }
        OneOrMany::Many(reqs) => {
            let updates = reqs
                .into_iter()
                .map(UpdatePageRequest::into_changes)
                .collect();
            let rows = state
                .services
                .pages
                .update_pages_bulk(&actor, updates)
                .await?;
            json_value(rows)?
        }
    };
    Ok(Json(body))
}

/// DELETE /api/admin/pages?id= - Delete a page and its blocks
#[utoipa::path(
    delete,
    path = "",
    tag = PAGE_TAG,
    security(("bearerAuth" = [])),
    params(DeleteQuery),
    responses(
        (status = 200, description = "Page deleted", body = DeleteResponse),
        (status = 404, description = "Page not found")
    )
)]
async fn delete_page(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthAdmin>,
    ValidatedQuery(query): ValidatedQuery<DeleteQuery>,
) -> AppResult<Json<DeleteResponse>> {
    state
        .services
        .pages
        .delete_page(&admin.actor(), query.id)
        .await?;
    Ok(Json(DeleteResponse::ok()))
}

// ---------------------------------------------------------------------------
// Blocks
// ---------------------------------------------------------------------------

/// GET /api/admin/pages/blocks?page_id= - List a page's blocks in order
#[utoipa::path(
    get,
    path = "/blocks",
    tag = PAGE_TAG,
    security(("bearerAuth" = [])),
    params(PageBlockQuery),
    responses(
        (status = 200, description = "Blocks in display order", body = [PageBlock])
    )
)]
async fn list_blocks(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<PageBlockQuery>,
) -> AppResult<Json<Vec<PageBlock>>> {
    let rows = state.services.pages.list_blocks(query.page_id).await?;
    Ok(Json(rows))
}

/// POST /api/admin/pages/blocks - Create a block
#[utoipa::path(
    post,
    path = "/blocks",
    tag = PAGE_TAG,
    security(("bearerAuth" = [])),
    request_body = CreatePageBlockRequest,
    responses(
        (status = 201, description = "Block created", body = PageBlock),
        (status = 400, description = "Invalid request data")
    )
)]
async fn create_block(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthAdmin>,
    ValidatedJson(payload): ValidatedJson<CreatePageBlockRequest>,
) -> AppResult<(StatusCode, Json<PageBlock>)> {
    let row = state
        .services
        .pages
        .create_block(&admin.actor(), payload.into())
        .await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// PUT /api/admin/pages/blocks - Update one block or a batch
#[utoipa::path(
    put,
    path = "/blocks",
    tag = PAGE_TAG,
    security(("bearerAuth" = [])),
    request_body = UpdatePageBlockRequest,
    responses(
        (status = 200, description = "Updated row(s)"),
        (status = 404, description = "Block not found")
    )
)]
async fn update_blocks(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthAdmin>,
    Json(payload): Json<OneOrMany<UpdatePageBlockRequest>>,
) -> AppResult<Json<serde_json::Value>> {
    payload.validate_all()?;
    let actor = admin.actor();

    let body = match payload {
        OneOrMany::One(req) => {
            let (id, changes) = req.into_changes();
            let row = state
                .services
                .pages
                .update_block(&actor, id, changes)
                .await?;
            json_value(row)?
        }
        OneOrMany::Many(reqs) => {
            let updates = reqs
                .into_iter()
                .map(UpdatePageBlockRequest::into_changes)
                .collect();
            let rows = state
                .services
                .pages
                .update_blocks_bulk(&actor, updates)
                .await?;
            json_value(rows)?
        }
    };
    Ok(Json(body))
}

/// DELETE /api/admin/pages/blocks?id= - Delete a block
///
/// The page's remaining blocks are reindexed densely.
#[utoipa::path(
    delete,
    path = "/blocks",
    tag = PAGE_TAG,
    security(("bearerAuth" = [])),
    params(DeleteQuery),
    responses(
        (status = 200, description = "Block deleted", body = DeleteResponse),
        (status = 404, description = "Block not found")
    )
)]
async fn delete_block(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthAdmin>,
    ValidatedQuery(query): ValidatedQuery<DeleteQuery>,
) -> AppResult<Json<DeleteResponse>> {
    state
        .services
        .pages
        .delete_block(&admin.actor(), query.id)
        .await?;
    Ok(Json(DeleteResponse::ok()))
}

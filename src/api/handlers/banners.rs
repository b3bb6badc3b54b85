//! Banner CRUD handlers. Banners are ordered within a named slot.

use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use super::{cache_control, json_value};
use crate::api::doc::BANNER_TAG;
use crate::api::dto::{
    CreateBannerRequest, DeleteQuery, DeleteResponse, OneOrMany, UpdateBannerRequest,
};
use crate::api::middleware::AuthAdmin;
use crate::error::AppResult;
use crate::models::Banner;
use crate::state::AppState;
use crate::utils::validate::{ValidatedJson, ValidatedQuery};

pub fn banner_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(
        list_banners,
        create_banner,
        update_banners,
        delete_banner
    ))
}

/// GET /api/admin/banners - List banners grouped by slot, in display order
#[utoipa::path(
    get,
    path = "",
    tag = BANNER_TAG,
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Banners in slot order", body = [Banner])
    )
)]
async fn list_banners(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let rows = state.services.banners.list().await?;
    let ttl = state.services.banners.cache_ttl_seconds();
    Ok((cache_control(ttl), Json(rows)))
}

/// POST /api/admin/banners - Create a banner
#[utoipa::path(
    post,
    path = "",
    tag = BANNER_TAG,
    security(("bearerAuth" = [])),
    request_body = CreateBannerRequest,
    responses(
        (status = 201, description = "Banner created", body = Banner),
        (status = 400, description = "Invalid request data")
    )
)]
async fn create_banner(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthAdmin>,
    ValidatedJson(payload): ValidatedJson<CreateBannerRequest>,
) -> AppResult<(StatusCode, Json<Banner>)> {
    let row = state
        .services
        .banners
        .create(&admin.actor(), payload.into())
        .await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// PUT /api/admin/banners - Update one banner or a batch
#[utoipa::path(
    put,
    path = "",
    tag = BANNER_TAG,
    security(("bearerAuth" = [])),
    request_body = UpdateBannerRequest,
    responses(
        (status = 200, description = "Updated row(s)"),
        (status = 404, description = "Banner not found")
    )
)]
async fn update_banners(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthAdmin>,
    Json(payload): Json<OneOrMany<UpdateBannerRequest>>,
) -> AppResult<Json<serde_json::Value>> {
    payload.validate_all()?;
    let actor = admin.actor();

    let body = match payload {
        OneOrMany::One(req) => {
            let (id, changes) = req.into_changes();
            let row = state.services.banners.update(&actor, id, changes).await?;
            json_value(row)?
        }
        OneOrMany::Many(reqs) => {
            let updates = reqs
                .into_iter()
                .map(UpdateBannerRequest::into_changes)
                .collect();
            let rows = state.services.banners.update_bulk(&actor, updates).await?;
            json_value(rows)?
        }
    };
    Ok(Json(body))
}

/// DELETE /api/admin/banners?id= - Delete a banner
///
/// The slot's survivors are reindexed and the banner image is removed from
/// the media host as a best-effort side call.
#[utoipa::path(
    delete,
    path = "",
    tag = BANNER_TAG,
    security(("bearerAuth" = [])),
    params(DeleteQuery),
    responses(
        (status = 200, description = "Banner deleted", body = DeleteResponse),
        (status = 404, description = "Banner not found")
    )
)]
async fn delete_banner(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthAdmin>,
    ValidatedQuery(query): ValidatedQuery<DeleteQuery>,
) -> AppResult<Json<DeleteResponse>> {
    state
        .services
        .banners
        .delete(&admin.actor(), query.id)
        .await?;
    Ok(Json(DeleteResponse::ok()))
}

//! Site settings handlers: a flat key → JSON value map.

use axum::{Extension, Json, extract::State, response::IntoResponse};
use serde_json::{Map, Value as JsonValue};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use super::cache_control;
use crate::api::doc::SETTINGS_TAG;
use crate::api::middleware::AuthAdmin;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

pub fn settings_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(get_settings, update_settings))
}

/// GET /api/admin/settings - The whole settings map
#[utoipa::path(
    get,
    path = "",
    tag = SETTINGS_TAG,
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Settings map", body = Object)
    )
)]
async fn get_settings(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let map = state.services.settings.get_all().await?;
    let ttl = state.services.settings.cache_ttl_seconds();
    Ok((cache_control(ttl), Json(JsonValue::Object(map))))
}

/// PUT /api/admin/settings - Upsert submitted keys
///
/// Every key in the body is upserted; keys not submitted stay untouched.
/// Returns the full map after the update.
#[utoipa::path(
    put,
    path = "",
    tag = SETTINGS_TAG,
    security(("bearerAuth" = [])),
    request_body = Object,
    responses(
        (status = 200, description = "Settings map after the update", body = Object),
        (status = 400, description = "Body is not a JSON object")
    )
)]
async fn update_settings(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthAdmin>,
    Json(payload): Json<JsonValue>,
) -> AppResult<Json<JsonValue>> {
    let values: Map<String, JsonValue> = match payload {
        JsonValue::Object(map) => map,
        _ => {
            return Err(AppError::BadRequest {
                message: "Settings body must be a JSON object".to_string(),
            });
        }
    };

    let map = state
        .services
        .settings
        .update(&admin.actor(), values)
        .await?;
    Ok(Json(JsonValue::Object(map)))
}

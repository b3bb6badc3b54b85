//! Admin authentication handlers for login and token refresh.

use axum::{Json, extract::State};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::AUTH_TAG;
use crate::api::dto::{LoginRequest, LoginResponse, RefreshTokenRequest};
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::validate::ValidatedJson;

/// Creates the authentication routes
///
/// # Routes
/// - `POST /login` - Authenticate an admin and get tokens
/// - `POST /refresh` - Refresh the access token using the refresh token
pub fn auth_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(login))
        .routes(routes!(refresh_token))
}

/// POST /api/auth/login - Authenticate an admin
#[utoipa::path(
    post,
    path = "/login",
    tag = AUTH_TAG,
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid credentials")
    )
)]
async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let tokens = state
        .services
        .auth
        .login(&payload.email, &payload.password)
        .await?;
    Ok(Json(LoginResponse::from(tokens)))
}

/// POST /api/auth/refresh - Refresh the session
///
/// Validates the refresh token, confirms the admin account still exists, and
/// issues a new access/refresh pair.
#[utoipa::path(
    post,
    path = "/refresh",
    tag = AUTH_TAG,
    request_body = RefreshTokenRequest,
    responses(
        (status = 200, description = "Tokens refreshed", body = LoginResponse),
        (status = 401, description = "Invalid or expired refresh token")
    )
)]
async fn refresh_token(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RefreshTokenRequest>,
) -> AppResult<Json<LoginResponse>> {
    let tokens = state.services.auth.refresh(&payload.refresh_token).await?;
    Ok(Json(LoginResponse::from(tokens)))
}

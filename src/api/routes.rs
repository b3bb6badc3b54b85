//! Router configuration for the API.
//!
//! Admin resources live under `/api/admin` behind the session middleware;
//! authentication and health endpoints stay public. The OpenAPI document is
//! collected from the handler annotations and served through Swagger UI.

use axum::{Router, middleware};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::doc::ApiDoc;
use crate::api::handlers;
use crate::api::middleware::{auth_middleware, logging_middleware, request_id_middleware};
use crate::state::AppState;

/// Creates the main application router with all routes and middleware.
///
/// # Middleware Order
/// Middleware is applied in reverse order of declaration (last added runs
/// first): request IDs are assigned before logging, and the session check
/// wraps only the `/api/admin` subtree.
pub fn create_router(state: AppState) -> Router {
    let admin_routes = OpenApiRouter::new()
        .nest("/categories", handlers::categories::category_routes())
        .nest("/products", handlers::products::product_routes())
        .nest("/banners", handlers::banners::banner_routes())
        .nest("/homepage", handlers::homepage::homepage_routes())
        .nest("/pages", handlers::pages::page_routes())
        .nest("/settings", handlers::settings::settings_routes())
        .nest("/audit", handlers::audit::audit_routes())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(handlers::health::health_routes())
        .nest("/api/auth", handlers::auth::auth_routes())
        .nest("/api/admin", admin_routes)
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        // Middleware is applied in reverse order - last added runs first,
        // so logging sees the request ID already set
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}

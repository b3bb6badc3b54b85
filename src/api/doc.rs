use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

pub const AUTH_TAG: &str = "Auth";
pub const HEALTH_TAG: &str = "Health";
pub const CATEGORY_TAG: &str = "Categories";
pub const PRODUCT_TAG: &str = "Products";
pub const BANNER_TAG: &str = "Banners";
pub const HOMEPAGE_TAG: &str = "Homepage";
pub const PAGE_TAG: &str = "Pages";
pub const SETTINGS_TAG: &str = "Settings";
pub const AUDIT_TAG: &str = "Audit";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Vitrine",
        description = "Admin backend for the Vitrine product catalog storefront",
    ),
    modifiers(&SecurityAddon),
    components(
        schemas(
            crate::api::dto::ErrorResponse,
            crate::api::dto::DeleteResponse,
        )
    ),
    tags(
        (name = AUTH_TAG, description = "Admin authentication endpoints"),
        (name = HEALTH_TAG, description = "Health check endpoints"),
        (name = CATEGORY_TAG, description = "Product category management"),
        (name = PRODUCT_TAG, description = "Product management with nested images and specs"),
        (name = BANNER_TAG, description = "Slot-based banner management"),
        (name = HOMEPAGE_TAG, description = "Homepage section and item management"),
        (name = PAGE_TAG, description = "Static page and block management"),
        (name = SETTINGS_TAG, description = "Site settings key/value map"),
        (name = AUDIT_TAG, description = "Read-only audit trail"),
    )
)]
pub struct ApiDoc;

pub struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT Bearer Token Authentication"))
                        .build(),
                ),
            )
        }
    }
}

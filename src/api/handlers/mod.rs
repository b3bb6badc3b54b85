//! HTTP request handlers for the admin API, organized by resource.
//!
//! Every resource follows the same shape: `GET` lists (cached lists mirror
//! their server-side TTL in a `Cache-Control` header), `POST` creates from a
//! flat JSON body, `PUT` updates by `id` in the body (an array body is a bulk
//! update), `DELETE` takes `?id=` and answers `{"success": true}`.

pub mod audit;
pub mod auth;
pub mod banners;
pub mod categories;
pub mod health;
pub mod homepage;
pub mod pages;
pub mod products;
pub mod settings;

use axum::http::{HeaderName, header};

use crate::error::{AppError, AppResult};

/// `Cache-Control` header mirroring the server-side TTL of a cached list.
pub(crate) fn cache_control(max_age: u64) -> [(HeaderName, String); 1] {
    [(
        header::CACHE_CONTROL,
        format!("public, max-age={}", max_age),
    )]
}

/// PUT routes answer with either one row or an array of rows, matching the
/// shape of the request body.
pub(crate) fn json_value<T: serde::Serialize>(value: T) -> AppResult<serde_json::Value> {
    serde_json::to_value(value).map_err(|e| AppError::Internal {
        source: anyhow::Error::from(e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_control_mirrors_ttl() {
        let [(name, value)] = cache_control(300);
        assert_eq!(name, header::CACHE_CONTROL);
        assert_eq!(value, "public, max-age=300");
    }
}

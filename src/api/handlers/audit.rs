//! Read-only audit trail listing.

use axum::{Json, extract::State};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::AUDIT_TAG;
use crate::api::dto::AuditQuery;
use crate::error::AppResult;
use crate::models::AuditEntry;
use crate::state::AppState;
use crate::utils::validate::ValidatedQuery;

pub fn audit_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(list_audit_entries))
}

/// GET /api/admin/audit?limit= - Recent audit entries, newest first
#[utoipa::path(
    get,
    path = "",
    tag = AUDIT_TAG,
    security(("bearerAuth" = [])),
    params(AuditQuery),
    responses(
        (status = 200, description = "Audit entries, newest first", body = [AuditEntry]),
        (status = 400, description = "Limit out of range")
    )
)]
async fn list_audit_entries(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<AuditQuery>,
) -> AppResult<Json<Vec<AuditEntry>>> {
    let rows = state
        .services
        .audit
        .list_recent(query.limit_or_default())
        .await?;
    Ok(Json(rows))
}

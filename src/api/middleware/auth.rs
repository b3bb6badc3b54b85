//! JWT session middleware for the admin routes.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::jwt::{Claims, validate_access_token};

/// Authenticated admin, added to request extensions after token validation
/// and extracted in handlers with `Extension<AuthAdmin>`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthAdmin {
    pub admin_id: i32,
    pub email: String,
}

impl AuthAdmin {
    /// The audit-log actor identity for this session.
    pub fn actor(&self) -> crate::services::Actor {
        crate::services::Actor {
            id: self.admin_id,
            email: self.email.clone(),
        }
    }
}

impl From<Claims> for AuthAdmin {
    fn from(claims: Claims) -> Self {
        Self {
            admin_id: claims.sub.parse().unwrap_or(0),
            email: claims.email,
        }
    }
}

/// Validates the `Authorization: Bearer <token>` header and stores the
/// admin identity in request extensions. Missing or invalid sessions are a
/// 401.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized {
            message: "Missing authorization header".to_string(),
        })?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Unauthorized {
            message: "Invalid authorization header format. Expected: Bearer <token>".to_string(),
        })?;

    let claims = validate_access_token(token, &state.jwt_config.secret)?;
    request.extensions_mut().insert(AuthAdmin::from(claims));

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::jwt::TokenType;

    #[test]
    fn auth_admin_from_claims() {
        let claims = Claims {
            sub: "42".to_string(),
            email: "admin@example.com".to_string(),
            token_type: TokenType::Access,
            iat: 0,
            exp: 9999999999,
        };

        let admin = AuthAdmin::from(claims);
        assert_eq!(admin.admin_id, 42);
        assert_eq!(admin.email, "admin@example.com");
    }

    #[test]
    fn auth_admin_from_claims_with_bad_subject() {
        let claims = Claims {
            sub: "not-a-number".to_string(),
            email: "admin@example.com".to_string(),
            token_type: TokenType::Access,
            iat: 0,
            exp: 9999999999,
        };

        // Falls back to 0 rather than panicking; the account lookup that
        // follows will reject it.
        assert_eq!(AuthAdmin::from(claims).admin_id, 0);
    }
}

//! Admin authentication: login and token refresh.

use crate::config::settings::JwtConfig;
use crate::db::Db;
use crate::error::{AppError, AppResult};
use crate::models::Admin;
use crate::repositories::admin_repo;
use crate::utils::jwt;

/// Issued token pair plus the authenticated admin.
#[derive(Debug)]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
    pub admin_id: i32,
    pub email: String,
}

#[derive(Clone)]
pub struct AuthService {
    db: Db,
    jwt: JwtConfig,
}

impl AuthService {
    pub fn new(db: Db, jwt: JwtConfig) -> Self {
        Self { db, jwt }
    }

    /// Verifies credentials and issues a token pair.
    ///
    /// Unknown email and wrong password produce the same error so the
    /// response does not reveal which admins exist.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<AuthTokens> {
        let admin = self.find_by_email(email).await?.ok_or_else(invalid_credentials)?;

        if !crate::utils::password::verify_password(password, &admin.password)? {
            return Err(invalid_credentials());
        }

        self.issue_tokens(&admin)
    }

    /// Exchanges a valid refresh token for a fresh pair.
    pub async fn refresh(&self, refresh_token: &str) -> AppResult<AuthTokens> {
        let claims = jwt::validate_refresh_token(refresh_token, &self.jwt.secret)?;
        let admin_id: i32 = claims.sub.parse().map_err(|_| AppError::Unauthorized {
            message: "Invalid token subject".to_string(),
        })?;

        let admin = self
            .db
            .read("find admin", |conn| {
                Box::pin(admin_repo::find_by_id(conn, admin_id))
            })
            .await?
            .ok_or_else(|| AppError::Unauthorized {
                message: "Admin account no longer exists".to_string(),
            })?;

        self.issue_tokens(&admin)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Admin>> {
        self.db
            .read("find admin by email", |conn| {
                let email = email.to_string();
                Box::pin(async move { admin_repo::find_by_email(conn, &email).await })
            })
            .await
    }

    fn issue_tokens(&self, admin: &Admin) -> AppResult<AuthTokens> {
        let (access_token, refresh_token) = jwt::generate_token_pair(
            admin.id,
            admin.email.clone(),
            &self.jwt.secret,
            self.jwt.access_token_expiration,
            self.jwt.refresh_token_expiration,
        )?;
        Ok(AuthTokens {
            access_token,
            refresh_token,
            admin_id: admin.id,
            email: admin.email.clone(),
        })
    }
}

fn invalid_credentials() -> AppError {
    AppError::Unauthorized {
        message: "Invalid email or password".to_string(),
    }
}

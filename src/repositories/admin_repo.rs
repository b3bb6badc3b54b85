//! Admin account queries.

use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::error::{AppError, AppResult};
use crate::models::{Admin, NewAdmin};

/// Finds an admin by email address.
///
/// # Returns
/// `Some(Admin)` if found, `None` otherwise
pub async fn find_by_email(
    conn: &mut AsyncPgConnection,
    admin_email: &str,
) -> AppResult<Option<Admin>> {
    use crate::schema::admins::dsl::*;

    admins
        .filter(email.eq(admin_email))
        .select(Admin::as_select())
        .first(conn)
        .await
        .optional()
        .map_err(AppError::from)
}

/// Finds an admin by id.
pub async fn find_by_id(conn: &mut AsyncPgConnection, admin_id: i32) -> AppResult<Option<Admin>> {
    use crate::schema::admins::dsl::*;

    admins
        .filter(id.eq(admin_id))
        .select(Admin::as_select())
        .first(conn)
        .await
        .optional()
        .map_err(AppError::from)
}

/// Creates an admin account. Used by the account-seeding CLI path.
pub async fn create(conn: &mut AsyncPgConnection, new_admin: NewAdmin) -> AppResult<Admin> {
    use crate::schema::admins::dsl::*;

    diesel::insert_into(admins)
        .values(&new_admin)
        .returning(Admin::as_returning())
        .get_result(conn)
        .await
        .map_err(AppError::from)
}

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::Deserialize;

/// Admin account model for reading from database.
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::admins)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Admin {
    pub id: i32,
    pub email: String,
    pub password: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// NewAdmin model for inserting new accounts.
#[derive(Debug, Insertable, Deserialize, Clone)]
#[diesel(table_name = crate::schema::admins)]
pub struct NewAdmin {
    pub email: String,
    pub password: String,
}

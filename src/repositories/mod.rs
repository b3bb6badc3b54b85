//! Diesel queries per entity.
//!
//! Repository functions take a `&mut AsyncPgConnection` rather than a pool so
//! the same logical operation can run on either the session or the service
//! credential; `Db::read` / `Db::mutate` decide which connection they get.

pub mod admin_repo;
pub mod audit_repo;
pub mod banner_repo;
pub mod category_repo;
pub mod homepage_repo;
pub mod page_repo;
pub mod product_repo;
pub mod settings_repo;

use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Product model for reading from database.
#[derive(Debug, Queryable, Selectable, Serialize, Deserialize, Clone, utoipa::ToSchema)]
#[diesel(table_name = crate::schema::products)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Product {
    pub id: Uuid,
    pub category_id: Option<Uuid>,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    #[schema(value_type = String)]
    pub price: BigDecimal,
    pub featured: bool,
    pub published: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// NewProduct model for inserting new records.
#[derive(Debug, Insertable, Deserialize, Clone)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct {
    pub category_id: Option<Uuid>,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub featured: bool,
    pub published: bool,
}

/// UpdateProduct model for partial updates.
#[derive(Debug, AsChangeset, Deserialize, Clone, Default)]
#[diesel(table_name = crate::schema::products)]
pub struct UpdateProduct {
    pub category_id: Option<Option<Uuid>>,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<Option<String>>,
    pub price: Option<BigDecimal>,
    pub featured: Option<bool>,
    pub published: Option<bool>,
}

/// Product image row. Images are hosted externally; only the URL is stored.
#[derive(Debug, Queryable, Selectable, Serialize, Deserialize, Clone, utoipa::ToSchema)]
#[diesel(table_name = crate::schema::product_images)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProductImage {
    pub id: Uuid,
    pub product_id: Uuid,
    pub url: String,
    pub sort_order: i32,
}

#[derive(Debug, Insertable, Deserialize, Clone)]
#[diesel(table_name = crate::schema::product_images)]
pub struct NewProductImage {
    pub product_id: Uuid,
    pub url: String,
    pub sort_order: i32,
}

/// Product spec row (label/value pairs, ordered within the product).
#[derive(Debug, Queryable, Selectable, Serialize, Deserialize, Clone, utoipa::ToSchema)]
#[diesel(table_name = crate::schema::product_specs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProductSpec {
    pub id: Uuid,
    pub product_id: Uuid,
    pub label: String,
    pub value: String,
    pub sort_order: i32,
}

#[derive(Debug, Insertable, Deserialize, Clone)]
#[diesel(table_name = crate::schema::product_specs)]
pub struct NewProductSpec {
    pub product_id: Uuid,
    pub label: String,
    pub value: String,
    pub sort_order: i32,
}

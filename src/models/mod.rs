//! Database models for all catalog entities.

mod admin;
mod audit;
mod banner;
mod category;
mod homepage;
mod page;
mod product;
mod settings;

pub use admin::{Admin, NewAdmin};
pub use audit::{AuditAction, AuditEntry, NewAuditEntry};
pub use banner::{Banner, NewBanner, UpdateBanner};
pub use category::{Category, NewCategory, UpdateCategory};
pub use homepage::{
    HomepageItem, HomepageSection, NewHomepageItem, NewHomepageSection, UpdateHomepageItem,
    UpdateHomepageSection,
};
pub use page::{NewPage, NewPageBlock, Page, PageBlock, UpdatePage, UpdatePageBlock};
pub use product::{
    NewProduct, NewProductImage, NewProductSpec, Product, ProductImage, ProductSpec, UpdateProduct,
};
pub use settings::SiteSetting;

//! Business logic services.

pub mod audit;
pub mod auth_service;
pub mod banner_service;
pub mod category_service;
pub mod homepage_service;
pub mod page_service;
pub mod product_service;
pub mod reorder;
pub mod settings_service;

use std::sync::Arc;

pub use audit::{Actor, AuditService};
pub use auth_service::{AuthService, AuthTokens};
pub use banner_service::BannerService;
pub use category_service::CategoryService;
pub use homepage_service::HomepageService;
pub use page_service::PageService;
pub use product_service::{ProductDetail, ProductService, SpecEntry};
pub use settings_service::SettingsService;

use crate::cache::TtlCache;
use crate::config::settings::Settings;
use crate::db::Db;
use crate::external::MediaClient;

/// All services, wired once at startup and cloned into handlers via state.
#[derive(Clone)]
pub struct Services {
    pub auth: AuthService,
    pub audit: AuditService,
    pub categories: CategoryService,
    pub products: ProductService,
    pub banners: BannerService,
    pub homepage: HomepageService,
    pub pages: PageService,
    pub settings: SettingsService,
}

impl Services {
    pub fn new(db: Db, settings: &Settings, cache: Arc<TtlCache>) -> Self {
        let audit = AuditService::new(db.clone());
        let media = MediaClient::new(settings.media.clone());
        let cache_cfg = settings.cache.clone();

        Self {
            auth: AuthService::new(db.clone(), settings.jwt.clone()),
            audit: audit.clone(),
            categories: CategoryService::new(
                db.clone(),
                cache.clone(),
                cache_cfg.clone(),
                audit.clone(),
                media.clone(),
            ),
            products: ProductService::new(
                db.clone(),
                cache.clone(),
                cache_cfg.clone(),
                audit.clone(),
                media.clone(),
            ),
            banners: BannerService::new(
                db.clone(),
                cache.clone(),
                cache_cfg.clone(),
                audit.clone(),
                media.clone(),
            ),
            homepage: HomepageService::new(
                db.clone(),
                cache.clone(),
                cache_cfg.clone(),
                audit.clone(),
                media,
            ),
            pages: PageService::new(db.clone(), cache.clone(), cache_cfg.clone(), audit.clone()),
            settings: SettingsService::new(db, cache, cache_cfg, audit),
        }
    }
}

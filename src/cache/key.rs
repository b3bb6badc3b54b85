//! Typed cache keys: entity kind plus discriminator.

use std::fmt;

use uuid::Uuid;

/// Cache key for admin list queries.
///
/// Each variant names the logical query whose result is cached; mutation
/// handlers remove the variants they can invalidate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    /// Full category list, ordered by sort_order.
    Categories,
    /// Product list, optionally filtered by category.
    Products { category: Option<Uuid> },
    /// Full banner list.
    Banners,
    /// Homepage sections with no item expansion.
    HomepageSections,
    /// Static page list.
    Pages,
    /// The whole site-settings map.
    Settings,
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheKey::Categories => write!(f, "admin_categories"),
            CacheKey::Products { category: Some(id) } => write!(f, "admin_products_{}", id),
            CacheKey::Products { category: None } => write!(f, "admin_products_all"),
            CacheKey::Banners => write!(f, "admin_banners"),
            CacheKey::HomepageSections => write!(f, "admin_homepage_sections"),
            CacheKey::Pages => write!(f, "admin_pages"),
            CacheKey::Settings => write!(f, "admin_settings"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_legacy_key_names() {
        assert_eq!(CacheKey::Categories.to_string(), "admin_categories");
        assert_eq!(
            CacheKey::Products { category: None }.to_string(),
            "admin_products_all"
        );
        let id = Uuid::nil();
        assert_eq!(
            CacheKey::Products { category: Some(id) }.to_string(),
            format!("admin_products_{}", id)
        );
    }

    #[test]
    fn product_keys_differ_per_category() {
        let a = CacheKey::Products {
            category: Some(Uuid::new_v4()),
        };
        let b = CacheKey::Products { category: None };
        assert_ne!(a, b);
    }
}

use std::env;

/// Static store branding served by `GET /store`.
///
/// Environment variables:
/// - STORE_SITE_HEADER (default: "GT Movies Store Admin")
/// - STORE_SITE_TITLE (default: "GT Movies Management")
/// - STORE_INDEX_TITLE (default: "Welcome to the GT Movies Store Admin Panel")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub site_header: String,
    pub site_title: String,
    pub index_title: String,
}

impl StoreConfig {
    pub fn from_env() -> Self {
        Self {
            site_header: env::var("STORE_SITE_HEADER")
                .unwrap_or_else(|_| "GT Movies Store Admin".to_string()),
            site_title: env::var("STORE_SITE_TITLE")
                .unwrap_or_else(|_| "GT Movies Management".to_string()),
            index_title: env::var("STORE_INDEX_TITLE")
                .unwrap_or_else(|_| "Welcome to the GT Movies Store Admin Panel".to_string()),
        }
    }
}

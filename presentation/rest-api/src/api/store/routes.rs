use poem_openapi::{Object, OpenApi, payload::Json};

use crate::api::tags::ApiTags;
use crate::config::store_config::StoreConfig;

#[derive(Debug, Clone, Object)]
pub struct StoreInfoResponse {
    /// Header shown on the store's back-office pages
    pub site_header: String,
    /// Browser title of the back-office pages
    pub site_title: String,
    /// Title of the back-office landing page
    pub index_title: String,
}

impl From<&StoreConfig> for StoreInfoResponse {
    fn from(config: &StoreConfig) -> Self {
        Self {
            site_header: config.site_header.clone(),
            site_title: config.site_title.clone(),
            index_title: config.index_title.clone(),
        }
    }
}

pub struct StoreApi {
    config: StoreConfig,
}

impl StoreApi {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }
}

#[OpenApi]
impl StoreApi {
    /// Store information
    ///
    /// Static branding loaded at startup. Public.
    #[oai(path = "/store", method = "get", tag = "ApiTags::Store")]
    async fn info(&self) -> Json<StoreInfoResponse> {
        Json(StoreInfoResponse::from(&self.config))
    }
}

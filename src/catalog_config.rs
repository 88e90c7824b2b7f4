use serde::{Deserialize, Serialize};

use crate::app_response::AppResponse;

pub const DEFAULT_PAGE_SIZE: usize = 6;
pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "/placeholder.svg?height=200&width=200";

/// Settings a catalog store is created with.
///
/// Every field has a default, so `{}` is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Records shown per page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Image reference used when a draft carries none.
    #[serde(default = "default_placeholder_image")]
    pub placeholder_image: String,
    /// Start with the demo records instead of an empty catalog.
    #[serde(default)]
    pub seed_samples: bool,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_placeholder_image() -> String {
    DEFAULT_PLACEHOLDER_IMAGE.to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            page_size: DEFAULT_PAGE_SIZE,
            placeholder_image: default_placeholder_image(),
            seed_samples: false,
        }
    }
}

impl CatalogConfig {
    pub fn from_json(json: &str) -> Result<Self, AppResponse> {
        let config: CatalogConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppResponse> {
        if self.page_size == 0 {
            return Err(AppResponse::ValidationError(
                "page_size must be at least 1".to_string(),
            ));
        }
        if self.placeholder_image.trim().is_empty() {
            return Err(AppResponse::ValidationError(
                "placeholder_image must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

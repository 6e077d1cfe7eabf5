//! Configuration loading and management

use crate::core::error::{BazaarResult, ConfigError};
use serde::{Deserialize, Serialize};

/// Settings for one paged list view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListSettings {
    /// Items per page
    pub per_page: usize,

    /// Width of the page-number window
    #[serde(default = "default_window")]
    pub window: usize,
}

fn default_window() -> usize {
    3
}

/// Remote API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the storefront API
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5001".to_string(),
        }
    }
}

/// Per-view list settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewsConfig {
    pub products: ListSettings,
    pub offers: ListSettings,
    pub orders: ListSettings,
    pub payments: ListSettings,
    pub reviews: ListSettings,
}

impl Default for ViewsConfig {
    fn default() -> Self {
        Self {
            products: ListSettings {
                per_page: 8,
                window: 3,
            },
            offers: ListSettings {
                per_page: 8,
                window: 3,
            },
            orders: ListSettings {
                per_page: 10,
                window: 3,
            },
            payments: ListSettings {
                per_page: 10,
                window: 3,
            },
            reviews: ListSettings {
                per_page: 6,
                window: 5,
            },
        }
    }
}

/// Complete configuration for the storefront views
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Remote API settings
    pub api: ApiConfig,

    /// Per-view list settings
    pub views: ViewsConfig,

    /// Categories featured on the home showcase
    pub showcase_categories: Vec<String>,

    /// Maximum number of admin notifications shown at once
    pub notifications_visible: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::default_config()
    }
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> BazaarResult<Self> {
        if !std::path::Path::new(path).exists() {
            return Err(ConfigError::FileNotFound {
                path: path.to_string(),
            }
            .into());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError {
            file: Some(path.to_string()),
            message: e.to_string(),
        })?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> BazaarResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// The configuration the storefront ships with
    pub fn default_config() -> Self {
        Self {
            api: ApiConfig::default(),
            views: ViewsConfig::default(),
            showcase_categories: vec![
                "furniture".to_string(),
                "home-decoration".to_string(),
                "mens-shoes".to_string(),
                "womens-dresses".to_string(),
                "laptops".to_string(),
            ],
            notifications_visible: 5,
        }
    }
}

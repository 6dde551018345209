use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_PLOTLY_SRC: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Where the marketplace API lives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Charting script loaded by the analytics page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartConfig {
    #[serde(default = "default_plotly_src")]
    pub plotly_src: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            plotly_src: default_plotly_src(),
        }
    }
}

/// Top-level config file structure matching `config.toml`.
///
/// Every section defaults so that a missing or partial file still yields a
/// usable client pointed at the local development API.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub charts: ChartConfig,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_plotly_src() -> String {
    DEFAULT_PLOTLY_SRC.to_string()
}

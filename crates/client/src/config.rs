use shared_types::AppConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// `config.toml` at the workspace root, embedded at build time since the
/// browser has no filesystem to read it from.
const EMBEDDED_CONFIG: &str = include_str!("../../../config.toml");

/// Parse config text. A malformed file falls back to defaults.
pub fn parse_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to parse config.toml, using defaults");
        AppConfig::default()
    })
}

/// Apply the build-time `HARVEST_API_URL` override, if any.
pub fn with_api_override(mut config: AppConfig, api_url: Option<&str>) -> AppConfig {
    if let Some(url) = api_url.map(str::trim).filter(|u| !u.is_empty()) {
        config.api.base_url = url.to_string();
    }
    config
}

/// Parse the embedded config once. Later calls are no-ops.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let config = with_api_override(parse_config(EMBEDDED_CONFIG), option_env!("HARVEST_API_URL"));
        tracing::info!(api = %config.api.base_url, "Configuration loaded");
        config
    })
}

/// The loaded configuration, loading it on first use.
pub fn config() -> &'static AppConfig {
    CONFIG.get().unwrap_or_else(load_config)
}

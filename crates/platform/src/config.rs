use shared_types::AppConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// `config.toml` from the crate root, embedded so the browser build needs
/// no filesystem.
const EMBEDDED_CONFIG: &str = include_str!("../config.toml");

/// Parse a config document, defaulting everything if it is unparseable.
pub fn parse_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!("failed to parse config.toml: {e}; using defaults");
        AppConfig::default()
    })
}

/// Parse the embedded config and store it in the global `OnceLock`.
/// Only the first call has effect.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let config = parse_config(EMBEDDED_CONFIG);
        tracing::info!(features = ?config.features, "config loaded");
        config
    })
}

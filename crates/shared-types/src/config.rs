use serde::{Deserialize, Serialize};

use crate::FeatureFlags;

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Where the session is persisted and how slow the mock backend is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SessionConfig {
    /// Name of the single persisted slot.
    pub storage_key: String,
    /// Directory for the file-backed slot on native targets. `None` keeps
    /// the session in memory only.
    pub file_dir: Option<String>,
    pub latency: LatencyConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: "user".to_string(),
            file_dir: None,
            latency: LatencyConfig::default(),
        }
    }
}

/// Simulated round-trip delays, in milliseconds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LatencyConfig {
    pub login_ms: u64,
    pub register_ms: u64,
    pub update_ms: u64,
    pub fetch_ms: u64,
}

impl LatencyConfig {
    /// No delay anywhere. Used by tests.
    pub const fn none() -> Self {
        Self {
            login_ms: 0,
            register_ms: 0,
            update_ms: 0,
            fetch_ms: 0,
        }
    }
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            login_ms: 1000,
            register_ms: 1500,
            update_ms: 1000,
            fetch_ms: 300,
        }
    }
}

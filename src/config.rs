/// Fetch configuration - compiled-in defaults with optional radmon.toml override
///
/// The endpoint URL and cooldown are fixed constants of this service;
/// the optional config file exists so a deployment can point at a
/// mirror or loosen the cooldown without recompiling.

use serde::Deserialize;
use std::fs;

use crate::ingest::iernet::FEED_URL;

/// Minimum elapsed time between two fetch attempts, in seconds.
///
/// The feed updates on a coarse schedule, and hammering it from a UI
/// refresh loop wastes traffic; five minutes matches the upstream
/// service's own refresh cadence.
pub const COOLDOWN_SECS: i64 = 300;

/// Runtime configuration for the feed fetcher.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Feed endpoint. Must be an absolute URL.
    pub endpoint_url: String,
    /// Cooldown window between fetch attempts, in seconds.
    pub cooldown_secs: i64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            endpoint_url: FEED_URL.to_string(),
            cooldown_secs: COOLDOWN_SECS,
        }
    }
}

/// Loads fetch configuration, applying `radmon.toml` overrides when the
/// file exists in the current working directory.
///
/// # Panics
/// Panics if the file exists but is malformed. This is intentional — a
/// present-but-broken config file is a deployment defect that should
/// fail loudly at startup, not fall back silently to defaults.
pub fn load_config() -> FetchConfig {
    let config_path = "radmon.toml";

    match fs::read_to_string(config_path) {
        Ok(contents) => toml::from_str(&contents)
            .unwrap_or_else(|e| panic!("Failed to parse {}: {}", config_path, e)),
        // Missing file is the normal case: run on compiled-in defaults.
        Err(_) => FetchConfig::default(),
    }
}

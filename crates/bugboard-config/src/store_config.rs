//! Store configuration
//!
//! Configuration loaded from a .bugboard.toml file, searched for in the
//! current working directory first and the home directory second. Every
//! field has a default, so a partial file (or none at all) works.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = ".bugboard.toml";

/// Store configuration loaded from .bugboard.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StoreConfig {
    /// Base endpoint of the tracker API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// How long a fetched bug collection stays fresh, in minutes
    #[serde(default = "default_cache_max_age_minutes")]
    pub cache_max_age_minutes: i64,
}

fn default_api_base_url() -> String {
    "http://localhost:9001/api".to_string()
}

fn default_cache_max_age_minutes() -> i64 {
    10
}

/// Candidate config file locations, most specific first
fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE)];
    if let Some(home) = env::var_os("HOME") {
        paths.push(PathBuf::from(home).join(CONFIG_FILE));
    }
    paths
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            cache_max_age_minutes: default_cache_max_age_minutes(),
        }
    }
}

impl StoreConfig {
    /// Load config from CWD first, then home directory, or use defaults
    ///
    /// A malformed candidate is logged and skipped; a missing one is
    /// silently skipped.
    pub fn load() -> Self {
        for path in candidate_paths() {
            let Ok(content) = std::fs::read_to_string(&path) else {
                continue;
            };
            match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded store config from {}", path.display());
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file {}: {}", path.display(), e);
                }
            }
        }

        log::debug!("Using default store config");
        Self::default()
    }

    /// Load config from an explicit path
    ///
    /// Unlike [`load`](Self::load), a missing or malformed file is an error
    /// rather than a silent fallback.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Freshness window of the bug collection as a duration
    pub fn cache_max_age(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.cache_max_age_minutes)
    }
}

//! Configuration file loading for modelvet.
//!
//! Reads `modelvet.json` and provides typed access to all settings.
//! Falls back to sensible defaults when the config file is missing or
//! incomplete.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Top-level modelvet configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelvetConfig {
    pub version: String,
    /// Types whose name ends with any of these are excluded from validation.
    #[serde(default = "default_excluded_suffixes")]
    pub excluded_suffixes: Vec<String>,
    /// Fully-qualified type names to exclude.
    #[serde(default)]
    pub excluded_types: Vec<String>,
    /// Relaxation names accepted for the equality-contract checks
    /// (e.g. `unused_properties`).
    #[serde(default)]
    pub relaxations: Vec<String>,
    #[serde(default)]
    pub checks: ChecksConfig,
}

/// Per-step check toggles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecksConfig {
    #[serde(default = "default_true")]
    pub conventions: bool,
    #[serde(default = "default_true")]
    pub equality: bool,
    #[serde(default = "default_true")]
    pub hash_sanity: bool,
}

fn default_true() -> bool {
    true
}

fn default_excluded_suffixes() -> Vec<String> {
    vec!["Builder".to_string(), "Test".to_string(), "IT".to_string()]
}

impl Default for ChecksConfig {
    fn default() -> Self {
        Self {
            conventions: true,
            equality: true,
            hash_sanity: true,
        }
    }
}

impl Default for ModelvetConfig {
    fn default() -> Self {
        Self {
            version: "0.1.0".to_string(),
            excluded_suffixes: default_excluded_suffixes(),
            excluded_types: vec![],
            relaxations: vec![],
            checks: ChecksConfig::default(),
        }
    }
}

impl ModelvetConfig {
    /// Load configuration from `modelvet.json` inside the given directory.
    /// Returns defaults if the file doesn't exist or can't be parsed.
    pub fn load(dir: &Path) -> Self {
        let config_path = dir.join("modelvet.json");
        let content = match std::fs::read_to_string(&config_path) {
            Ok(c) => c,
            Err(_) => return Self::default(),
        };
        match serde_json::from_str(&content) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!(
                    "modelvet: warning: failed to parse {}: {}, using defaults",
                    config_path.display(),
                    e
                );
                Self::default()
            }
        }
    }
}

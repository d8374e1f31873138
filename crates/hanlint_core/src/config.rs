//! Checker configuration.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::CheckError;

/// Configuration for the checker.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CheckConfig {
    /// Whether table rows are skipped instead of checked as prose.
    #[serde(default = "default_skip_tables")]
    pub skip_tables: bool,

    /// Per-rule enable map, keyed by rule identifier. Rules absent from
    /// the map are enabled.
    #[serde(default)]
    pub rules: HashMap<String, bool>,
}

fn default_skip_tables() -> bool {
    true
}

impl CheckConfig {
    /// Config file names probed by [`discover`](Self::discover).
    pub const CONFIG_FILES: [&'static str; 1] = [".hanlint.json"];

    /// Creates the default configuration.
    pub fn new() -> Self {
        Self {
            skip_tables: true,
            rules: HashMap::new(),
        }
    }

    /// Loads configuration from a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CheckError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| CheckError::config(format!("Failed to read config: {}", e)))?;
        Self::from_json(&content)
    }

    /// Parses configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, CheckError> {
        serde_json::from_str(json)
            .map_err(|e| CheckError::config(format!("Invalid config: {}", e)))
    }

    /// Searches `dir` and its ancestors for a config file.
    pub fn discover(dir: impl AsRef<Path>) -> Option<PathBuf> {
        for dir in dir.as_ref().ancestors() {
            for name in Self::CONFIG_FILES {
                let candidate = dir.join(name);
                if candidate.is_file() {
                    return Some(candidate);
                }
            }
        }
        None
    }

    /// Returns whether a rule identifier is enabled.
    pub fn rule_enabled(&self, id: &str) -> bool {
        self.rules.get(id).copied().unwrap_or(true)
    }
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self::new()
    }
}

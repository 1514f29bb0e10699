use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{HoardError, Result};

/// Project-level configuration, loaded from `.hoard.toml`.
///
/// Every field has a default so the CLI works without any config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Key file used when neither `--key-file` nor `HOARD_KEY` is given.
    #[serde(default)]
    pub key_file: Option<String>,

    /// Log filter used when `RUST_LOG` is unset (default: "warn").
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Pretty-print unlocked JSON (default: true).
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_pretty() -> bool {
    true
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            key_file: None,
            log_level: default_log_level(),
            pretty: default_pretty(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the project root.
    const FILE_NAME: &'static str = ".hoard.toml";

    /// Load settings from `<project_dir>/.hoard.toml`.
    ///
    /// If the file does not exist, defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let config_path = project_dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        toml::from_str(&contents).map_err(|e| {
            HoardError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })
    }

    /// Resolve the configured key file against the project directory.
    pub fn key_file_path(&self, project_dir: &Path) -> Option<PathBuf> {
        self.key_file.as_ref().map(|p| project_dir.join(p))
    }
}

// ── Tests ────────────────────────────────────────────────────────────

//! # Editor Configuration
//!
//! Window and timer settings read from a JSON file. Every field is optional;
//! anything missing takes its default.
//!
//! The file is `lattices.json` in the working directory unless the
//! `LATTICES_CONFIG` environment variable names another path.

use anyhow::{Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_ENV_VAR: &str = "LATTICES_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "lattices.json";

/// The poll timer is kept between these bounds, in milliseconds.
const MIN_POLL_MS: u64 = 5;
const MAX_POLL_MS: u64 = 50;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub poll_interval_ms: u64,
    pub window_width: f32,
    pub window_height: f32,
    /// Distance between neighbouring lattice nodes, in pixels.
    pub lattice_spacing: f32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 16,
            window_width: 900.0,
            window_height: 600.0,
            lattice_spacing: 90.0,
        }
    }
}

impl EditorConfig {
    /// Reads a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config = serde_json::from_str(&data)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        Ok(config)
    }

    /// Loads the config from the usual place, falling back to defaults when
    /// the file is missing or broken.
    pub fn load_or_default() -> Self {
        let path = std::env::var_os(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        if !path.exists() {
            info!("[CONFIG] No config at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::load(&path) {
            Ok(config) => {
                info!("[CONFIG] Loaded {}", path.display());
                config
            }
            Err(e) => {
                warn!("[CONFIG] {:#}; using defaults", e);
                Self::default()
            }
        }
    }

    /// Interval of the editor's poll timer.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms.clamp(MIN_POLL_MS, MAX_POLL_MS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: EditorConfig = serde_json::from_str(r#"{ "window_width": 1200 }"#).unwrap();
        assert_eq!(config.window_width, 1200.0);
        assert_eq!(config.window_height, 600.0);
        assert_eq!(config.poll_interval_ms, 16);
    }

    #[test]
    fn test_poll_interval_is_clamped() {
        let mut config = EditorConfig::default();
        config.poll_interval_ms = 1;
        assert_eq!(config.poll_interval(), Duration::from_millis(5));
        config.poll_interval_ms = 500;
        assert_eq!(config.poll_interval(), Duration::from_millis(50));
    }

    #[test]
    fn test_load_reports_missing_file() {
        let err = EditorConfig::load(Path::new("/nonexistent/lattices.json")).unwrap_err();
        assert!(format!("{:#}", err).contains("reading config file"));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("lattices-config-{}.json", std::process::id()));
        fs::write(&path, r#"{ "poll_interval_ms": 30, "lattice_spacing": 60.0 }"#).unwrap();
        let config = EditorConfig::load(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(config.poll_interval(), Duration::from_millis(30));
        assert_eq!(config.lattice_spacing, 60.0);
    }
}

//! Configuration management
//!
//! Compatible with the desktop console's settings.json format:
//! ```json
//! {
//!   "app": { "simulateLatency": true, ... }
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    app: AppSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppSettings {
    #[serde(default = "default_simulate_latency")]
    simulate_latency: bool,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

fn default_simulate_latency() -> bool {
    true
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            simulate_latency: true,
            other: HashMap::new(),
        }
    }
}

/// Console configuration (simplified view of settings)
#[derive(Debug, Clone)]
pub struct Config {
    pub simulate_latency: bool,
    // Keep the raw settings for preservation when saving
    _raw_settings: SettingsFile,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            simulate_latency: true,
            _raw_settings: SettingsFile::default(),
        }
    }
}

impl Config {
    /// Load config from the application directory
    ///
    /// Latency simulation can be disabled via:
    /// 1. Settings file ("simulateLatency": false)
    /// 2. Environment variable WAFR_SIMULATE_LATENCY (for CI/testing)
    pub fn load(app_dir: &Path) -> Result<Self> {
        let settings_path = app_dir.join("settings.json");

        let raw: SettingsFile = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        // Check env var for latency override (for CI/testing)
        let simulate_latency = match std::env::var("WAFR_SIMULATE_LATENCY").ok().as_deref() {
            Some("true" | "1" | "yes" | "TRUE" | "YES") => true,
            Some("false" | "0" | "no" | "FALSE" | "NO") => false,
            _ => raw.app.simulate_latency,
        };

        Ok(Self {
            simulate_latency,
            _raw_settings: raw,
        })
    }

    /// Save config to the application directory
    /// Preserves other settings that this crate doesn't manage
    pub fn save(&self, app_dir: &Path) -> Result<()> {
        let settings_path = app_dir.join("settings.json");

        let mut settings = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str::<SettingsFile>(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        settings.app.simulate_latency = self.simulate_latency;

        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(&settings_path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_defaults_simulate_latency() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert!(config.simulate_latency);
    }

    #[test]
    fn test_settings_file_round_trip() {
        let dir = TempDir::new().unwrap();

        let mut config = Config::load(dir.path()).unwrap();
        config.simulate_latency = false;
        config.save(dir.path()).unwrap();

        let reloaded = Config::load(dir.path()).unwrap();
        assert!(!reloaded.simulate_latency);
    }

    #[test]
    fn test_malformed_settings_fall_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("settings.json"), "{broken").unwrap();

        let config = Config::load(dir.path()).unwrap();
        assert!(config.simulate_latency);
    }
}

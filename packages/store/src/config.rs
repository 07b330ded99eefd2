//! # Client configuration — `fleetops.toml`
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8000/api"
//! ```
//!
//! On native builds the file lives in the user config directory (see
//! [`FileStore`](crate::FileStore) for the same directory convention); the
//! browser build ships with defaults baked in at deploy time. A missing or
//! empty file is equivalent to the default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `fleetops.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FleetOpsConfig {
    #[serde(default)]
    pub api: ApiConfig,
}

/// Backend endpoint configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:8000/api".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl FleetOpsConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "fleetops.toml"
    }

    /// Load from `<config_dir>/fleetops/fleetops.toml`. A missing or
    /// malformed file yields the defaults.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Some(dir) = dirs::config_dir() else {
            return Self::default();
        };
        let path = dir.join("fleetops").join(Self::filename());
        match std::fs::read_to_string(&path) {
            Ok(raw) => Self::from_toml(&raw).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// The browser build is configured at deploy time; runtime load returns
    /// the baked-in defaults.
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        Self::default()
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        let config = FleetOpsConfig::from_toml("").unwrap();
        assert_eq!(config, FleetOpsConfig::default());
        assert_eq!(config.api.base_url, "http://localhost:8000/api");
    }

    #[test]
    fn test_round_trip() {
        let config = FleetOpsConfig {
            api: ApiConfig {
                base_url: "https://fleet.example.com/api".into(),
            },
        };
        let toml = config.to_toml().unwrap();
        assert_eq!(FleetOpsConfig::from_toml(&toml).unwrap(), config);
    }

    #[test]
    fn test_partial_section_keeps_defaults() {
        let config = FleetOpsConfig::from_toml("[api]\n").unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8000/api");
    }
}

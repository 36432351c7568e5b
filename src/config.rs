//! Client configuration: endpoint, timeout, and default request options.
//!
//! Everything the documented snippet hard-codes at module level lives here as
//! explicit configuration instead, so callers (and tests) can point the
//! client anywhere.

use crate::error::ShipNoteError;
use crate::log_debug;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Production endpoint of the hosted service.
pub const DEFAULT_ENDPOINT: &str = "https://ship-note-web.pages.dev/api/generate";

/// How long to wait for the service before giving up.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Configuration for [`crate::ReleaseNoteClient`] and the CLI.
///
/// Loaded from `<config dir>/ship-note/config.toml`; every field has a
/// default so a partial (or absent) file works.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// URL of the generate endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Maximum time to wait for a response, in seconds.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    /// Formatting preset to request when the caller does not pick one.
    #[serde(default = "default_preset")]
    pub preset: String,
    /// Audience to request when the caller does not pick one.
    #[serde(default = "default_destination")]
    pub destination: String,
    /// Whether drafts should include rationale text per change.
    #[serde(default)]
    pub include_why: bool,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

const fn default_timeout_seconds() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

fn default_preset() -> String {
    "standard".to_string()
}

fn default_destination() -> String {
    "release".to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_seconds: default_timeout_seconds(),
            preset: default_preset(),
            destination: default_destination(),
            include_why: false,
        }
    }
}

impl ClientConfig {
    /// Load the configuration file, falling back to defaults when it does
    /// not exist. A file that exists but fails to parse is an error rather
    /// than a silent fallback.
    pub fn load() -> Result<Self, ShipNoteError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from an explicit path. Exposed so tests and
    /// embedding tools can keep their config wherever they like.
    pub fn load_from(config_path: &Path) -> Result<Self, ShipNoteError> {
        if !config_path.exists() {
            log_debug!("No config file at {config_path:?}, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path)
            .map_err(|e| ShipNoteError::Config(format!("failed to read {config_path:?}: {e}")))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| ShipNoteError::Config(format!("invalid config {config_path:?}: {e}")))?;

        log_debug!("Configuration loaded from {config_path:?}");
        Ok(config)
    }

    /// Write the configuration back to its file, creating the directory on
    /// first use.
    pub fn save(&self) -> Result<(), ShipNoteError> {
        self.save_to(&Self::config_path()?)
    }

    /// Write the configuration to an explicit path. Counterpart of
    /// [`Self::load_from`].
    pub fn save_to(&self, config_path: &Path) -> Result<(), ShipNoteError> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ShipNoteError::Config(format!("failed to create {parent:?}: {e}"))
            })?;
        }

        let content = toml::to_string(self)
            .map_err(|e| ShipNoteError::Config(format!("failed to serialize config: {e}")))?;
        fs::write(config_path, content)
            .map_err(|e| ShipNoteError::Config(format!("failed to write {config_path:?}: {e}")))?;

        log_debug!("Configuration saved to {config_path:?}");
        Ok(())
    }

    /// Path of the configuration file.
    pub fn config_path() -> Result<PathBuf, ShipNoteError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ShipNoteError::Config("could not locate config directory".into()))?;
        Ok(config_dir.join("ship-note").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_snippet() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout_seconds, 30);
        assert_eq!(config.preset, "standard");
        assert_eq!(config.destination, "release");
        assert!(!config.include_why);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let config: ClientConfig =
            toml::from_str("endpoint = \"http://localhost:8788/api/generate\"")
                .expect("partial config should parse");
        assert_eq!(config.endpoint, "http://localhost:8788/api/generate");
        assert_eq!(config.timeout_seconds, DEFAULT_TIMEOUT_SECONDS);
        assert_eq!(config.preset, "standard");
    }

    #[test]
    fn load_from_missing_file_is_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config =
            ClientConfig::load_from(&dir.path().join("config.toml")).expect("missing file is ok");
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn load_from_rejects_malformed_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "timeout_seconds = \"soon\"").expect("write");

        let err = ClientConfig::load_from(&path).expect_err("bad type must fail");
        assert!(matches!(err, ShipNoteError::Config(_)));
    }

    #[test]
    fn save_to_then_load_from_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("config.toml");

        let config = ClientConfig {
            endpoint: "http://localhost:8788/api/generate".to_string(),
            timeout_seconds: 3,
            preset: "short".to_string(),
            destination: "update".to_string(),
            include_why: true,
        };
        config.save_to(&path).expect("save creates the directory");

        let loaded = ClientConfig::load_from(&path).expect("load");
        assert_eq!(loaded, config);
    }

    #[test]
    fn toml_round_trip() {
        let config = ClientConfig {
            endpoint: "http://localhost:9999/api/generate".to_string(),
            timeout_seconds: 5,
            preset: "short".to_string(),
            destination: "internal".to_string(),
            include_why: true,
        };
        let serialized = toml::to_string(&config).expect("config should serialize");
        let parsed: ClientConfig = toml::from_str(&serialized).expect("config should parse");
        assert_eq!(parsed, config);
    }
}

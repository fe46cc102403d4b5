//! # Application Configuration
//!
//! Where the CSV files live and how much to log.
//!
//! ## Configuration Sources (later overrides earlier)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Defaults (this file)                                                │
//! │  2. Config file                                                         │
//! │     --config <path>, else                                               │
//! │     ~/.config/rail-reservation/rail.toml (Linux)                        │
//! │     ~/Library/Application Support/com.rail.reservation/rail.toml (macOS)│
//! │  3. Environment                                                         │
//! │     RAIL_DATA_DIR, RAIL_TRAINS_FILE, RAIL_TICKETS_FILE, RAIL_LOG        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example Config File
//! ```toml
//! [storage]
//! data_dir = "/var/lib/rail"
//! trains_file = "trains.csv"
//! tickets_file = "tickets.csv"
//!
//! [logging]
//! filter = "info"
//! ```

use std::io;
use std::path::PathBuf;

use rail_store::StoreConfig;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

/// Config file name inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "rail.toml";

/// Why the config file could not be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

// =============================================================================
// Sections
// =============================================================================

/// `[storage]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Directory the CSV files are resolved against.
    /// Default: current directory
    pub data_dir: PathBuf,

    /// Default: `trains.csv`
    pub trains_file: PathBuf,

    /// Default: `tickets.csv`
    pub tickets_file: PathBuf,
}

impl Default for StorageSettings {
    fn default() -> Self {
        let store = StoreConfig::default();
        StorageSettings {
            data_dir: store.data_dir,
            trains_file: store.trains_file,
            tickets_file: store.tickets_file,
        }
    }
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `tracing` filter directive, used when `RUST_LOG` is unset.
    /// Default: `warn`
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        LoggingSettings {
            filter: "warn".to_string(),
        }
    }
}

// =============================================================================
// AppConfig
// =============================================================================

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

impl AppConfig {
    /// Loads configuration from file and environment.
    ///
    /// A missing file is not an error; an unreadable or invalid one is.
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading config from file");
                config = Self::read_file(path)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        Ok(config)
    }

    /// Defaults plus environment overrides, for when the file is unusable.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env_overrides();
        config
    }

    fn read_file(path: PathBuf) -> Result<Self, ConfigError> {
        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(source) => return Err(ConfigError::Read { path, source }),
        };
        toml::from_str(&contents).map_err(|source| ConfigError::Parse { path, source })
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies `RAIL_*` overrides using `lookup` to read variables.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(dir) = lookup("RAIL_DATA_DIR") {
            debug!(data_dir = %dir, "Overriding data directory from environment");
            self.storage.data_dir = PathBuf::from(dir);
        }

        if let Some(file) = lookup("RAIL_TRAINS_FILE") {
            self.storage.trains_file = PathBuf::from(file);
        }

        if let Some(file) = lookup("RAIL_TICKETS_FILE") {
            self.storage.tickets_file = PathBuf::from(file);
        }

        if let Some(filter) = lookup("RAIL_LOG") {
            self.logging.filter = filter;
        }
    }

    /// Store configuration for the resolved file locations.
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::new(&self.storage.data_dir)
            .trains_file(&self.storage.trains_file)
            .tickets_file(&self.storage.tickets_file)
    }

    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "rail", "reservation")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fs;
    use std::path::Path;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.logging.filter, "warn");
        let store = config.store_config();
        assert_eq!(store.trains_path(), Path::new("./trains.csv"));
        assert_eq!(store.tickets_path(), Path::new("./tickets.csv"));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: AppConfig = toml::from_str("[storage]\ndata_dir = \"/srv/rail\"\n").unwrap();
        assert_eq!(config.storage.data_dir, PathBuf::from("/srv/rail"));
        assert_eq!(config.storage.trains_file, PathBuf::from("trains.csv"));
        assert_eq!(config.logging.filter, "warn");
    }

    #[test]
    fn test_load_from_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rail.toml");
        fs::write(
            &path,
            "[storage]\ntickets_file = \"bookings.csv\"\n[logging]\nfilter = \"debug\"\n",
        )
        .unwrap();

        let config = AppConfig::read_file(path).unwrap();
        assert_eq!(config.storage.tickets_file, PathBuf::from("bookings.csv"));
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rail.toml");
        fs::write(&path, "[storage\n").unwrap();

        let err = AppConfig::read_file(path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().starts_with("Invalid config file"));
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("RAIL_DATA_DIR", "/data"),
            ("RAIL_TICKETS_FILE", "t.csv"),
            ("RAIL_LOG", "info"),
        ]
        .into_iter()
        .collect();

        let mut config = AppConfig::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        let store = config.store_config();
        assert_eq!(store.trains_path(), Path::new("/data/trains.csv"));
        assert_eq!(store.tickets_path(), Path::new("/data/t.csv"));
        assert_eq!(config.logging.filter, "info");
    }
}

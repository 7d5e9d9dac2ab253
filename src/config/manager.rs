//! Configuration manager for loading application configuration
//!
//! The configuration lives in `$XDG_CONFIG_HOME/hyprsunset-tray/config.json`
//! and is only ever read. Tray state is deliberately not written back.

use crate::config::models::TrayConfig;
use crate::error::Result;
use crate::utils::paths;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Configuration manager
pub struct ConfigManager;

impl ConfigManager {
    /// Get the path to the configuration file
    ///
    /// Returns: `$XDG_CONFIG_HOME/hyprsunset-tray/config.json`
    pub fn get_config_path() -> PathBuf {
        paths::config_home()
            .join(paths::APP_DIR_NAME)
            .join("config.json")
    }

    /// Load configuration from the default location
    pub fn load() -> Result<TrayConfig> {
        Self::load_from(&Self::get_config_path())
    }

    /// Load configuration from `path`
    ///
    /// If the file doesn't exist or is corrupt, returns default configuration.
    /// Read errors other than "not found" are propagated.
    pub fn load_from(path: &Path) -> Result<TrayConfig> {
        if !path.exists() {
            info!(
                "Configuration file {} not found, using defaults",
                path.display()
            );
            return Ok(TrayConfig::default());
        }

        let json = std::fs::read_to_string(path)?;

        match serde_json::from_str(&json) {
            Ok(config) => {
                info!("Configuration loaded from {}", path.display());
                Ok(config)
            }
            Err(e) => {
                warn!("Failed to parse configuration, using defaults: {}", e);
                Ok(TrayConfig::default())
            }
        }
    }
}

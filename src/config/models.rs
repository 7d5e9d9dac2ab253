//! Configuration data models
//!
//! This module defines the data structures used for application configuration.
//! Every field has a default, so a partial `config.json` is valid.

use crate::controller::Kelvin;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Placeholder replaced by the requested temperature in command templates
pub const KELVIN_PLACEHOLDER: &str = "{kelvin}";

/// Top-level application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrayConfig {
    /// How to talk to the daemon
    pub daemon: DaemonCommands,
    /// Temperature menu settings
    pub temperature: TemperatureSettings,
}

/// Argument vectors used to control the daemon
///
/// The first element is the program, the rest are its arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DaemonCommands {
    /// Turns the filter on
    pub enable: Vec<String>,
    /// Turns the filter off
    pub disable: Vec<String>,
    /// Sets the color temperature; must contain `{kelvin}`
    pub set_temperature: Vec<String>,
}

/// Temperature presets shown in the menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemperatureSettings {
    /// Menu entries, in display order
    pub presets: Vec<u32>,
    /// Temperature assumed at startup
    pub default_kelvin: u32,
}

impl Default for DaemonCommands {
    fn default() -> Self {
        fn argv(parts: &[&str]) -> Vec<String> {
            parts.iter().map(ToString::to_string).collect()
        }

        Self {
            enable: argv(&["hyprctl", "hyprsunset", "identity", "false"]),
            disable: argv(&["hyprctl", "hyprsunset", "identity", "true"]),
            set_temperature: argv(&["hyprctl", "hyprsunset", "temperature", KELVIN_PLACEHOLDER]),
        }
    }
}

impl Default for TemperatureSettings {
    fn default() -> Self {
        Self {
            presets: vec![6500, 5500, 4500, 3500, 2500],
            default_kelvin: 6500,
        }
    }
}

impl TemperatureSettings {
    /// Presets that fall inside the daemon's range, in configured order.
    ///
    /// Out-of-range and duplicate entries are dropped. An empty result falls
    /// back to the built-in presets.
    pub fn valid_presets(&self) -> Vec<Kelvin> {
        let mut presets: Vec<Kelvin> = Vec::with_capacity(self.presets.len());
        for &value in &self.presets {
            match Kelvin::new(value) {
                Ok(kelvin) if !presets.contains(&kelvin) => presets.push(kelvin),
                Ok(_) => {}
                Err(e) => warn!("Ignoring temperature preset: {}", e),
            }
        }

        if presets.is_empty() {
            warn!("No usable temperature presets configured, using defaults");
            return Self::default().valid_presets();
        }
        presets
    }

    /// The startup temperature, or the built-in default if out of range.
    pub fn initial_kelvin(&self) -> Kelvin {
        Kelvin::new(self.default_kelvin).unwrap_or_else(|e| {
            warn!("Ignoring default temperature: {}", e);
            Kelvin::DEFAULT
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TrayConfig::default();
        assert_eq!(config.temperature.presets, vec![6500, 5500, 4500, 3500, 2500]);
        assert_eq!(config.temperature.default_kelvin, 6500);
        assert!(
            config
                .daemon
                .set_temperature
                .iter()
                .any(|arg| arg == KELVIN_PLACEHOLDER)
        );
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: TrayConfig =
            serde_json::from_str(r#"{"temperature": {"presets": [4000, 3000]}}"#).unwrap();
        assert_eq!(config.temperature.presets, vec![4000, 3000]);
        assert_eq!(config.temperature.default_kelvin, 6500);
        assert_eq!(config.daemon, DaemonCommands::default());
    }

    #[test]
    fn test_valid_presets_drops_out_of_range_and_duplicates() {
        let settings = TemperatureSettings {
            presets: vec![9000, 4000, 500, 4000, 2000],
            default_kelvin: 6500,
        };
        let presets: Vec<u32> = settings.valid_presets().iter().map(|k| k.get()).collect();
        assert_eq!(presets, vec![4000, 2000]);
    }

    #[test]
    fn test_valid_presets_falls_back_when_empty() {
        let settings = TemperatureSettings {
            presets: vec![12_000],
            default_kelvin: 6500,
        };
        assert_eq!(settings.valid_presets().len(), 5);
    }

    #[test]
    fn test_initial_kelvin_out_of_range() {
        let settings = TemperatureSettings {
            presets: vec![],
            default_kelvin: 100,
        };
        assert_eq!(settings.initial_kelvin(), Kelvin::DEFAULT);
    }
}

//! Configuration management module
//!
//! This module handles loading the read-only application configuration:
//! daemon command templates and the temperature presets shown in the menu.

pub mod manager;
pub mod models;

pub use manager::ConfigManager;
pub use models::{DaemonCommands, KELVIN_PLACEHOLDER, TemperatureSettings, TrayConfig};

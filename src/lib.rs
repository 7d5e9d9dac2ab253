//! `hyprsunset-tray` - tray controller for the hyprsunset blue-light filter
//!
//! Shows a StatusNotifierItem icon whose menu turns hyprsunset on and off and
//! picks a color temperature. Every menu action becomes one `hyprctl
//! hyprsunset ...` invocation; the tray keeps only an assumed state for
//! display and never supervises the daemon.
//!
//! # Requirements
//!
//! - A Wayland session running Hyprland with `hyprsunset`
//! - A tray host implementing StatusNotifierItem (waybar, ironbar, ...)

// Module declarations
pub mod config;
pub mod controller;
pub mod daemon;
pub mod error;
pub mod install;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export commonly used types
pub use error::{Result, TrayError};

//! GUI module
//!
//! Provides the StatusNotifierItem tray that presents the controller's menu
//! and the drawn fallback icon.

pub mod icon;
pub mod tray;

pub use tray::{TrayEvent, spawn_tray};

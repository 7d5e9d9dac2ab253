//! Utility modules
//!
//! Provides Hyprland autostart management, logging, XDG path lookup and
//! single instance enforcement.

pub mod autostart;
pub mod logging;
pub mod paths;
pub mod single_instance;

pub use autostart::AutoStartManager;
pub use logging::{init_console_logging, init_logging};
pub use single_instance::SingleInstanceGuard;

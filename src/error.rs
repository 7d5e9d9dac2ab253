//! Error types for `hyprsunset-tray`
//!
//! This module defines all error types used throughout the application,
//! providing clear error messages and proper error propagation.
//!
//! Error variants use `#[source]` to preserve error chains so the full cause
//! ends up in the log file.

use std::path::PathBuf;
use thiserror::Error;

/// Simple error type for wrapping string messages while implementing `std::error::Error`
#[derive(Debug, Error)]
#[error("{0}")]
pub struct StringError(pub String);

impl StringError {
    /// Create a new `StringError` from a string message
    pub fn new(msg: impl Into<String>) -> Box<Self> {
        Box::new(Self(msg.into()))
    }
}

/// Main error type for `hyprsunset-tray`
#[derive(Debug, Error)]
pub enum TrayError {
    /// The daemon command ran but exited unsuccessfully
    #[error("Command `{command}` failed: {status}")]
    CommandFailed {
        /// The command line that was run
        command: String,
        /// Human-readable exit status
        status: String,
    },

    /// The daemon command could not be started at all
    #[error("Failed to run `{command}`: {source}")]
    CommandSpawnFailed {
        /// The command line that was attempted
        command: String,
        /// Underlying spawn error
        #[source]
        source: std::io::Error,
    },

    /// A temperature outside the daemon's accepted range was requested
    #[error("Temperature {0}K is outside the supported range")]
    TemperatureOutOfRange(u32),

    /// The installer was started on a session that is not Wayland
    #[error("Unsupported session type: {0}")]
    UnsupportedSession(String),

    /// The compositor configuration file used for autostart does not exist
    #[error("Compositor config file not found: {}", .0.display())]
    MissingConfigFile(PathBuf),

    /// Another tray instance already owns the instance socket
    #[error("Another instance is already running")]
    AlreadyRunning,

    /// The StatusNotifierItem service could not be registered
    #[error("Tray service error: {0}")]
    TrayServiceError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Configuration error
    /// Preserves the underlying error source for full error chain transparency
    #[error("Configuration error: {0}")]
    ConfigError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl TrayError {
    /// Whether the error came from invoking the external daemon
    pub fn is_command_failure(&self) -> bool {
        matches!(
            self,
            Self::CommandFailed { .. } | Self::CommandSpawnFailed { .. }
        )
    }
}

/// Result type alias for `hyprsunset-tray` operations
pub type Result<T> = std::result::Result<T, TrayError>;

/// Convert an error to a user-friendly message
///
/// The messages include short troubleshooting hints and are printed to
/// stderr by the binary before exiting.
pub fn get_user_friendly_error(error: &TrayError) -> String {
    match error {
        TrayError::CommandFailed { command, .. } => {
            format!(
                "hyprsunset rejected the command:\n\n{command}\n\n\
                 Make sure hyprsunset is running in this Hyprland session."
            )
        }
        TrayError::CommandSpawnFailed { command, source } => {
            format!(
                "Could not run:\n\n{command}\n\n{source}\n\n\
                 Check that hyprctl and hyprsunset are installed and on PATH."
            )
        }
        TrayError::TemperatureOutOfRange(kelvin) => {
            format!(
                "{kelvin}K is not a valid temperature.\n\n\
                 Choose a value between 1000K and 6500K."
            )
        }
        TrayError::UnsupportedSession(session) => {
            format!(
                "This session reports display protocol '{session}'.\n\n\
                 hyprsunset-tray only works in a Wayland (Hyprland) session.\n\
                 Log into Hyprland and run the installer again."
            )
        }
        TrayError::MissingConfigFile(path) => {
            format!(
                "Hyprland config not found at:\n{}\n\n\
                 Autostart was not configured. Add the exec-once line manually.",
                path.display()
            )
        }
        TrayError::AlreadyRunning => "hyprsunset-tray is already running.\n\n\
             Check the system tray for the hyprsunset icon."
            .to_string(),
        TrayError::TrayServiceError(_) => "Failed to create the tray icon.\n\n\
             Please ensure a StatusNotifierItem host is running\n\
             (for example the tray module of waybar)."
            .to_string(),
        TrayError::ConfigError(source) => {
            format!(
                "hyprsunset-tray is not set up correctly:\n\n{source}\n\n\
                 Daemon commands come from ~/.config/hyprsunset-tray/config.json;\n\
                 none of them may be empty."
            )
        }
        TrayError::IoError(e) => {
            format!(
                "A file system error occurred:\n\n{e}\n\n\
                 Please check file permissions and disk space."
            )
        }
    }
}

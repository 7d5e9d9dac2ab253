//! Single instance enforcement
//!
//! Ensures only one tray runs per session using a Unix socket in
//! `$XDG_RUNTIME_DIR`. A live listener on the socket means another instance
//! owns it; a socket nobody answers on is left over from a crash and is
//! replaced.

use crate::error::{Result, TrayError};
use crate::utils::paths;
use std::os::unix::net::{UnixListener, UnixStream};
use std::path::{Path, PathBuf};
use tracing::{debug, error};

/// Socket file name inside the runtime directory
const SOCKET_NAME: &str = "hyprsunset-tray.sock";

/// Single instance guard (socket removed on drop)
#[derive(Debug)]
pub struct SingleInstanceGuard {
    path: PathBuf,
    _listener: UnixListener,
}

impl SingleInstanceGuard {
    /// Claim the session-wide instance socket
    pub fn new() -> Result<Self> {
        Self::at(paths::runtime_dir().join(SOCKET_NAME))
    }

    /// Claim the instance socket at `path`, returning an error if another instance is running
    pub fn at(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if UnixStream::connect(&path).is_ok() {
            error!("Another instance of hyprsunset-tray is already running");
            return Err(TrayError::AlreadyRunning);
        }

        if path.exists() {
            debug!("Removing stale instance socket {}", path.display());
            std::fs::remove_file(&path)?;
        }

        let listener = UnixListener::bind(&path)?;
        debug!("Single instance socket bound at {}", path.display());

        Ok(Self {
            path,
            _listener: listener,
        })
    }

    /// Location of the socket
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for SingleInstanceGuard {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
        debug!("Single instance socket released");
    }
}

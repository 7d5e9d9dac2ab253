//! Hyprland autostart management
//!
//! Autostart is a single `exec-once = <binary>` line in `hyprland.conf`.
//! Enabling appends it unless the exact line is already present; disabling
//! rewrites the file without it.

use crate::error::{Result, TrayError};
use crate::utils::paths;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Auto-start manager for one compositor config file and one binary
#[derive(Debug, Clone)]
pub struct AutoStartManager {
    config_path: PathBuf,
    line: String,
}

impl AutoStartManager {
    /// Manage autostart of `exe` in `config_path`
    pub fn new(config_path: impl Into<PathBuf>, exe: &Path) -> Self {
        Self {
            config_path: config_path.into(),
            line: format!("exec-once = {}", exe.display()),
        }
    }

    /// Manage autostart of the running binary in the default Hyprland config
    pub fn for_current_exe() -> Result<Self> {
        let exe = std::env::current_exe()?;
        Ok(Self::new(Self::hyprland_config_path(), &exe))
    }

    /// `$XDG_CONFIG_HOME/hypr/hyprland.conf`
    pub fn hyprland_config_path() -> PathBuf {
        paths::config_home().join("hypr").join("hyprland.conf")
    }

    /// The compositor config file
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// The line this manager adds
    pub fn line(&self) -> &str {
        &self.line
    }

    fn read_config(&self) -> Result<String> {
        if !self.config_path.exists() {
            return Err(TrayError::MissingConfigFile(self.config_path.clone()));
        }
        Ok(std::fs::read_to_string(&self.config_path)?)
    }

    fn contains_line(&self, contents: &str) -> bool {
        contents.lines().any(|line| line.trim() == self.line)
    }

    /// Check if auto-start is enabled
    pub fn is_enabled(&self) -> Result<bool> {
        let contents = self.read_config()?;
        Ok(self.contains_line(&contents))
    }

    /// Enable auto-start. Returns `false` if the line was already present.
    pub fn enable(&self) -> Result<bool> {
        let contents = self.read_config()?;
        if self.contains_line(&contents) {
            debug!("Autostart line already present in {}", self.config_path.display());
            return Ok(false);
        }

        let mut file = OpenOptions::new().append(true).open(&self.config_path)?;
        if !contents.is_empty() && !contents.ends_with('\n') {
            writeln!(file)?;
        }
        writeln!(file, "{}", self.line)?;

        info!("Added '{}' to {}", self.line, self.config_path.display());
        Ok(true)
    }

    /// Disable auto-start. Returns `false` if the line was not present.
    ///
    /// The file is rewritten through a temporary file next to it so an
    /// interrupted write never truncates the compositor config. A symlinked
    /// config is resolved first, so the link survives and its target is the
    /// file that changes. The original permissions are kept.
    pub fn disable(&self) -> Result<bool> {
        let contents = self.read_config()?;
        if !self.contains_line(&contents) {
            return Ok(false);
        }

        let mut kept = String::with_capacity(contents.len());
        for line in contents.lines().filter(|line| line.trim() != self.line) {
            kept.push_str(line);
            kept.push('\n');
        }

        let target = std::fs::canonicalize(&self.config_path)?;
        let permissions = std::fs::metadata(&target)?.permissions();
        let dir = target.parent().unwrap_or_else(|| Path::new("."));

        let mut temp = tempfile::NamedTempFile::new_in(dir)?;
        temp.write_all(kept.as_bytes())?;
        temp.as_file().set_permissions(permissions)?;
        temp.persist(&target)
            .map_err(|e| TrayError::IoError(e.error))?;

        info!("Removed '{}' from {}", self.line, self.config_path.display());
        Ok(true)
    }
}

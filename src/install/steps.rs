//! Installation steps
//!
//! Each step can report that it has nothing to do (`skip_reason`) before it
//! is applied, so re-running the installer only performs what is missing.

use crate::error::{Result, TrayError};
use crate::install::prompt::Prompt;
use crate::install::session::{SessionEnv, SessionProtocol};
use crate::utils::AutoStartManager;
use std::ffi::{OsStr, OsString};
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{info, warn};

/// Programs the tray needs at runtime
pub const REQUIRED_TOOLS: [&str; 2] = ["hyprsunset", "hyprctl"];

/// Everything the steps read or act on
pub struct InstallContext<'a> {
    /// Session environment snapshot
    pub session: SessionEnv,
    /// `PATH` used to look up the daemon tools
    pub path_var: Option<OsString>,
    /// Installed tray binary
    pub exe_path: PathBuf,
    /// Autostart target
    pub autostart: AutoStartManager,
    /// Consent source
    pub prompt: &'a mut dyn Prompt,
    /// Whether to start the tray at the end
    pub launch: bool,
}

/// Result of applying one step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The step made its change
    Done,
    /// Nothing was changed, with the reason
    Skipped(String),
    /// Completed with a problem the user should know about
    Warning(String),
}

/// One independently checkable installation step
pub trait InstallStep {
    /// Short name for logs and reports
    fn name(&self) -> &'static str;

    /// `Some(reason)` if the step has nothing to do
    fn skip_reason(&self, ctx: &InstallContext<'_>) -> Result<Option<String>>;

    /// Perform the step
    fn apply(&self, ctx: &mut InstallContext<'_>) -> Result<StepOutcome>;
}

/// Refuses to continue outside a Wayland session
pub struct SessionCheck;

impl InstallStep for SessionCheck {
    fn name(&self) -> &'static str {
        "session"
    }

    fn skip_reason(&self, _ctx: &InstallContext<'_>) -> Result<Option<String>> {
        Ok(None)
    }

    fn apply(&self, ctx: &mut InstallContext<'_>) -> Result<StepOutcome> {
        match ctx.session.protocol() {
            SessionProtocol::Wayland => {
                info!("Wayland session detected");
                Ok(StepOutcome::Done)
            }
            other => Err(TrayError::UnsupportedSession(other.to_string())),
        }
    }
}

/// Look `name` up in a `PATH`-style list of directories
pub fn find_in_path(name: &str, path_var: &OsStr) -> Option<PathBuf> {
    std::env::split_paths(path_var)
        .map(|dir| dir.join(name))
        .find(|candidate| is_executable(candidate))
}

fn is_executable(path: &Path) -> bool {
    std::fs::metadata(path)
        .is_ok_and(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
}

/// Warns about daemon tools missing from `PATH`
pub struct DaemonToolsCheck;

impl DaemonToolsCheck {
    fn missing(ctx: &InstallContext<'_>) -> Vec<&'static str> {
        let path_var = ctx.path_var.as_deref().unwrap_or_default();
        REQUIRED_TOOLS
            .into_iter()
            .filter(|tool| find_in_path(tool, path_var).is_none())
            .collect()
    }
}

impl InstallStep for DaemonToolsCheck {
    fn name(&self) -> &'static str {
        "daemon-tools"
    }

    fn skip_reason(&self, ctx: &InstallContext<'_>) -> Result<Option<String>> {
        Ok(Self::missing(ctx)
            .is_empty()
            .then(|| format!("{} found", REQUIRED_TOOLS.join(" and "))))
    }

    fn apply(&self, ctx: &mut InstallContext<'_>) -> Result<StepOutcome> {
        let missing = Self::missing(ctx).join(", ");
        warn!("Not found on PATH: {}", missing);
        Ok(StepOutcome::Warning(format!(
            "install {missing} with your package manager"
        )))
    }
}

/// Makes the tray binary executable
pub struct ExecutablePermission;

impl InstallStep for ExecutablePermission {
    fn name(&self) -> &'static str {
        "executable"
    }

    fn skip_reason(&self, ctx: &InstallContext<'_>) -> Result<Option<String>> {
        let mode = std::fs::metadata(&ctx.exe_path)?.permissions().mode();
        Ok((mode & 0o111 == 0o111).then(|| "already executable".to_string()))
    }

    fn apply(&self, ctx: &mut InstallContext<'_>) -> Result<StepOutcome> {
        let mut permissions = std::fs::metadata(&ctx.exe_path)?.permissions();
        permissions.set_mode(permissions.mode() | 0o755);
        std::fs::set_permissions(&ctx.exe_path, permissions)?;
        info!("Marked {} executable", ctx.exe_path.display());
        Ok(StepOutcome::Done)
    }
}

/// Adds the tray to Hyprland's `exec-once` list after asking
pub struct AutostartRegistration;

impl InstallStep for AutostartRegistration {
    fn name(&self) -> &'static str {
        "autostart"
    }

    fn skip_reason(&self, ctx: &InstallContext<'_>) -> Result<Option<String>> {
        match ctx.autostart.is_enabled() {
            Ok(true) => Ok(Some("already registered".to_string())),
            Ok(false) => Ok(None),
            Err(TrayError::MissingConfigFile(path)) => {
                warn!("{} not found, skipping autostart", path.display());
                Ok(Some(format!("{} not found", path.display())))
            }
            Err(e) => Err(e),
        }
    }

    fn apply(&self, ctx: &mut InstallContext<'_>) -> Result<StepOutcome> {
        let question = format!(
            "Add '{}' to {}?",
            ctx.autostart.line(),
            ctx.autostart.config_path().display()
        );
        if !ctx.prompt.confirm(&question)? {
            info!("Autostart declined");
            return Ok(StepOutcome::Skipped("declined".to_string()));
        }

        if ctx.autostart.enable()? {
            Ok(StepOutcome::Done)
        } else {
            Ok(StepOutcome::Skipped("already registered".to_string()))
        }
    }
}

/// Starts the tray once, detached from the installer
pub struct LaunchTray;

impl InstallStep for LaunchTray {
    fn name(&self) -> &'static str {
        "launch"
    }

    fn skip_reason(&self, ctx: &InstallContext<'_>) -> Result<Option<String>> {
        Ok((!ctx.launch).then(|| "launch disabled".to_string()))
    }

    fn apply(&self, ctx: &mut InstallContext<'_>) -> Result<StepOutcome> {
        let child = Command::new(&ctx.exe_path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| TrayError::CommandSpawnFailed {
                command: ctx.exe_path.display().to_string(),
                source,
            })?;
        info!("Started hyprsunset-tray (pid {})", child.id());
        Ok(StepOutcome::Done)
    }
}

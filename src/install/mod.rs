//! Installer
//!
//! `hyprsunset-tray install` runs an ordered list of steps:
//!
//! 1. `session` - refuse anything but a Wayland session
//! 2. `daemon-tools` - warn if `hyprsunset` or `hyprctl` is missing
//! 3. `executable` - make sure the binary has its execute bits
//! 4. `autostart` - ask, then add the `exec-once` line to `hyprland.conf`
//! 5. `launch` - start the tray once
//!
//! Steps that have nothing to do are skipped, so running the installer twice
//! is harmless. An unsupported session stops the run before anything is
//! written and maps to exit status 1.

pub mod prompt;
pub mod session;
pub mod steps;

pub use prompt::{AssumeYes, LinePrompt, Prompt};
pub use session::{SessionEnv, SessionProtocol};
pub use steps::{
    AutostartRegistration, DaemonToolsCheck, ExecutablePermission, InstallContext, InstallStep,
    LaunchTray, SessionCheck, StepOutcome,
};

use crate::error::Result;
use tracing::info;

/// Exit status for a successful or user-declined install
pub const EXIT_OK: u8 = 0;
/// Exit status when the session protocol is not supported (or any other failure)
pub const EXIT_FAILURE: u8 = 1;

/// Per-step results of a completed run, in execution order
pub type InstallReport = Vec<(&'static str, StepOutcome)>;

/// Runs installation steps in order
pub struct Installer {
    steps: Vec<Box<dyn InstallStep>>,
}

impl Installer {
    /// Installer with custom steps
    pub fn new(steps: Vec<Box<dyn InstallStep>>) -> Self {
        Self { steps }
    }

    /// The standard five-step installer
    pub fn standard() -> Self {
        Self::new(vec![
            Box::new(SessionCheck),
            Box::new(DaemonToolsCheck),
            Box::new(ExecutablePermission),
            Box::new(AutostartRegistration),
            Box::new(LaunchTray),
        ])
    }

    /// Names of the steps, in order
    pub fn step_names(&self) -> Vec<&'static str> {
        self.steps.iter().map(|step| step.name()).collect()
    }

    /// Run every step, stopping at the first error
    pub fn run(&self, ctx: &mut InstallContext<'_>) -> Result<InstallReport> {
        let mut report = Vec::with_capacity(self.steps.len());

        for step in &self.steps {
            let outcome = match step.skip_reason(ctx)? {
                Some(reason) => StepOutcome::Skipped(reason),
                None => step.apply(ctx)?,
            };
            info!("[{}] {:?}", step.name(), outcome);
            report.push((step.name(), outcome));
        }

        Ok(report)
    }
}

/// Process exit status for an installer result
pub fn exit_status(result: &Result<InstallReport>) -> u8 {
    match result {
        Ok(_) => EXIT_OK,
        Err(_) => EXIT_FAILURE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TrayError;

    #[test]
    fn test_standard_step_order() {
        assert_eq!(
            Installer::standard().step_names(),
            vec!["session", "daemon-tools", "executable", "autostart", "launch"]
        );
    }

    #[test]
    fn test_exit_status() {
        assert_eq!(exit_status(&Ok(Vec::new())), EXIT_OK);
        assert_eq!(
            exit_status(&Err(TrayError::UnsupportedSession("x11".to_string()))),
            EXIT_FAILURE
        );
    }
}

//! Daemon client implementations

use crate::config::{DaemonCommands, KELVIN_PLACEHOLDER};
use crate::controller::Kelvin;
use crate::error::{Result, StringError, TrayError};
use std::process::{Command, Stdio};
use tracing::{debug, info, warn};

/// Synchronous control interface of the blue-light daemon
///
/// Each call maps to one external invocation and returns once its exit
/// status is known.
pub trait DaemonClient {
    /// Turn the filter on
    fn enable(&mut self) -> Result<()>;

    /// Turn the filter off
    fn disable(&mut self) -> Result<()>;

    /// Apply `kelvin`
    fn set_temperature(&mut self, kelvin: Kelvin) -> Result<()>;
}

/// Runs the configured command lines
#[derive(Debug, Clone)]
pub struct CommandDaemonClient {
    commands: DaemonCommands,
}

impl CommandDaemonClient {
    /// Create a client for `commands`
    pub fn new(commands: DaemonCommands) -> Self {
        Self { commands }
    }

    /// Run one argument vector and map its exit status
    fn run(argv: &[String]) -> Result<()> {
        let Some((program, args)) = argv.split_first() else {
            return Err(TrayError::ConfigError(StringError::new(
                "daemon command is empty",
            )));
        };
        let command_line = argv.join(" ");
        debug!("Running: {}", command_line);

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| TrayError::CommandSpawnFailed {
                command: command_line.clone(),
                source,
            })?;

        if output.status.success() {
            info!("`{}` succeeded", command_line);
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.trim().is_empty() {
            warn!("`{}` stderr: {}", command_line, stderr.trim());
        }
        Err(TrayError::CommandFailed {
            command: command_line,
            status: output.status.to_string(),
        })
    }
}

/// Substitute `{kelvin}` in every argument
pub fn render_temperature_command(template: &[String], kelvin: Kelvin) -> Vec<String> {
    let value = kelvin.get().to_string();
    template
        .iter()
        .map(|arg| arg.replace(KELVIN_PLACEHOLDER, &value))
        .collect()
}

impl DaemonClient for CommandDaemonClient {
    fn enable(&mut self) -> Result<()> {
        Self::run(&self.commands.enable)
    }

    fn disable(&mut self) -> Result<()> {
        Self::run(&self.commands.disable)
    }

    fn set_temperature(&mut self, kelvin: Kelvin) -> Result<()> {
        Self::run(&render_temperature_command(
            &self.commands.set_temperature,
            kelvin,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(parts: &[&str]) -> Vec<String> {
        parts.iter().map(ToString::to_string).collect()
    }

    fn client(enable: &[&str], disable: &[&str], set_temperature: &[&str]) -> CommandDaemonClient {
        CommandDaemonClient::new(DaemonCommands {
            enable: argv(enable),
            disable: argv(disable),
            set_temperature: argv(set_temperature),
        })
    }

    #[test]
    fn test_render_temperature_command() {
        let template = argv(&["hyprctl", "hyprsunset", "temperature", "{kelvin}"]);
        let rendered = render_temperature_command(&template, Kelvin::new(3500).unwrap());
        assert_eq!(rendered, argv(&["hyprctl", "hyprsunset", "temperature", "3500"]));
    }

    #[test]
    fn test_render_placeholder_inside_argument() {
        let template = argv(&["sh", "-c", "echo temperature={kelvin}"]);
        let rendered = render_temperature_command(&template, Kelvin::new(2500).unwrap());
        assert_eq!(rendered[2], "echo temperature=2500");
    }

    #[test]
    fn test_successful_command() {
        let mut client = client(&["true"], &["true"], &["true", "{kelvin}"]);
        assert!(client.enable().is_ok());
        assert!(client.disable().is_ok());
        assert!(client.set_temperature(Kelvin::new(4000).unwrap()).is_ok());
    }

    #[test]
    fn test_non_zero_exit_is_command_failed() {
        let mut client = client(&["false"], &["true"], &["true"]);
        let error = client.enable().unwrap_err();
        assert!(matches!(error, TrayError::CommandFailed { ref command, .. } if command == "false"));
    }

    #[test]
    fn test_missing_program_is_spawn_failure() {
        let mut client = client(&["hyprsunset-tray-no-such-binary"], &["true"], &["true"]);
        let error = client.enable().unwrap_err();
        assert!(matches!(error, TrayError::CommandSpawnFailed { .. }));
        assert!(error.is_command_failure());
    }

    #[test]
    fn test_empty_command_is_config_error() {
        let mut client = client(&["true"], &[], &["true"]);
        assert!(matches!(client.disable(), Err(TrayError::ConfigError(_))));
    }
}

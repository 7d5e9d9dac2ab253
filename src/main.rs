//! `hyprsunset-tray` - tray controller for the hyprsunset blue-light filter
//!
//! Without a subcommand the tray icon is started. `install` runs the
//! interactive installer and `remove-autostart` undoes its autostart step.

// GUI module is only in the binary, not the library
mod gui;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gui::TrayEvent;
use hyprsunset_tray::{
    config::ConfigManager,
    controller::TrayController,
    daemon::CommandDaemonClient,
    error::{TrayError, get_user_friendly_error},
    install::{self, AssumeYes, InstallContext, Installer, LinePrompt, Prompt, SessionEnv},
    utils::{self, AutoStartManager, SingleInstanceGuard},
};
use signal_hook::consts::signal::{SIGINT, SIGTERM};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::time::Duration;
use tracing::{error, info, warn};

/// How often the main thread checks for a termination signal
const SIGNAL_POLL_INTERVAL: Duration = Duration::from_millis(250);

#[derive(Parser, Debug)]
#[command(version, about = "System tray controller for hyprsunset")]
struct Cli {
    /// Read configuration from this file instead of the XDG location
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check the session, register autostart and launch the tray
    Install {
        /// Register autostart without asking
        #[arg(long)]
        yes: bool,

        /// Do not start the tray when done
        #[arg(long)]
        no_launch: bool,
    },
    /// Remove the exec-once line added by `install`
    RemoveAutostart,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    match cli.command {
        None => run_tray(cli.config.as_deref()),
        Some(Command::Install { yes, no_launch }) => {
            utils::init_console_logging().context("Failed to initialize logging system")?;
            run_installer(yes, !no_launch)
        }
        Some(Command::RemoveAutostart) => {
            utils::init_console_logging().context("Failed to initialize logging system")?;
            remove_autostart()
        }
    }
}

/// Run the tray until Exit is chosen or a termination signal arrives.
///
/// The instance socket is claimed before file logging starts, so a second
/// launch never rotates the running instance's log.
fn run_tray(config_path: Option<&Path>) -> Result<ExitCode> {
    let _single_instance_guard = match SingleInstanceGuard::new() {
        Ok(guard) => guard,
        Err(TrayError::AlreadyRunning) => {
            utils::init_console_logging().context("Failed to initialize logging system")?;
            warn!("Another instance is already running");
            return Ok(ExitCode::SUCCESS);
        }
        Err(e) => {
            utils::init_console_logging().context("Failed to initialize logging system")?;
            return Err(e).context("Failed to claim the instance socket");
        }
    };

    utils::init_logging().context("Failed to initialize logging system")?;
    info!("hyprsunset-tray v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = match config_path {
        Some(path) => ConfigManager::load_from(path),
        None => ConfigManager::load(),
    }
    .context("Failed to load application configuration")?;

    let shutdown = Arc::new(AtomicBool::new(false));
    signal_hook::flag::register(SIGINT, Arc::clone(&shutdown))
        .context("Failed to register SIGINT handler")?;
    signal_hook::flag::register(SIGTERM, Arc::clone(&shutdown))
        .context("Failed to register SIGTERM handler")?;

    let client = CommandDaemonClient::new(config.daemon.clone());
    let controller = TrayController::new(client, &config.temperature);

    let (event_tx, event_rx) = mpsc::channel::<TrayEvent>();
    let _tray_handle = match gui::spawn_tray(controller, event_tx) {
        Ok(handle) => handle,
        Err(e) => {
            error!("Failed to start tray: {}", e);
            eprintln!("{}", get_user_friendly_error(&e));
            return Err(e).context("Failed to start system tray");
        }
    };

    info!("Hyprsunset tray started");
    loop {
        match event_rx.recv_timeout(SIGNAL_POLL_INTERVAL) {
            Ok(TrayEvent::Quit) => break,
            Err(mpsc::RecvTimeoutError::Timeout) => {
                if shutdown.load(Ordering::Relaxed) {
                    info!("Termination signal received");
                    break;
                }
            }
            Err(mpsc::RecvTimeoutError::Disconnected) => {
                warn!("Tray service stopped");
                break;
            }
        }
    }

    info!("hyprsunset-tray shutting down");
    Ok(ExitCode::SUCCESS)
}

/// Run the installer and translate its result into an exit status.
fn run_installer(assume_yes: bool, launch: bool) -> Result<ExitCode> {
    let exe_path = std::env::current_exe().context("Failed to locate the running binary")?;
    let autostart = AutoStartManager::new(AutoStartManager::hyprland_config_path(), &exe_path);

    let mut stdin_prompt;
    let mut assume = AssumeYes;
    let prompt: &mut dyn Prompt = if assume_yes {
        &mut assume
    } else {
        stdin_prompt = LinePrompt::stdio();
        &mut stdin_prompt
    };

    let mut ctx = InstallContext {
        session: SessionEnv::from_env(),
        path_var: std::env::var_os("PATH"),
        exe_path,
        autostart,
        prompt,
        launch,
    };

    let result = Installer::standard().run(&mut ctx);
    match &result {
        Ok(report) => {
            for (step, outcome) in report {
                eprintln!("{step:>13}: {outcome:?}");
            }
            info!("Installation finished");
        }
        Err(e) => {
            error!("Installation failed: {}", e);
            eprintln!("{}", get_user_friendly_error(e));
        }
    }

    Ok(ExitCode::from(install::exit_status(&result)))
}

/// Remove the autostart line from the Hyprland config.
fn remove_autostart() -> Result<ExitCode> {
    let manager = AutoStartManager::for_current_exe().context("Failed to locate the running binary")?;
    match manager.disable() {
        Ok(true) => eprintln!("Removed autostart from {}", manager.config_path().display()),
        Ok(false) => eprintln!("Autostart was not registered"),
        Err(e @ TrayError::MissingConfigFile(_)) => {
            warn!("{}", e);
            eprintln!("{}", get_user_friendly_error(&e));
        }
        Err(e) => return Err(e).context("Failed to update the Hyprland config"),
    }
    Ok(ExitCode::SUCCESS)
}

//! Tray controller implementation
//!
//! This module implements the controller that turns menu selections into
//! daemon commands and keeps the displayed state in step with them.

use crate::config::TemperatureSettings;
use crate::controller::menu::{MenuAction, MenuModel, build_menu};
use crate::controller::state::{Kelvin, PowerState, TrayState};
use crate::daemon::DaemonClient;
use crate::error::Result;
use tracing::{debug, info, warn};

/// What the caller should do after handling a menu action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep running
    Continue,
    /// Exit the tray process
    Quit,
}

/// Owns the tray state and the daemon client
pub struct TrayController<D: DaemonClient> {
    daemon: D,
    state: TrayState,
    presets: Vec<Kelvin>,
}

impl<D: DaemonClient> TrayController<D> {
    /// Create a controller in the startup state (on, default temperature)
    pub fn new(daemon: D, settings: &TemperatureSettings) -> Self {
        let state = TrayState::new(settings.initial_kelvin());
        let presets = settings.valid_presets();
        info!(
            "Tray controller ready: {} at {}, {} presets",
            state.power,
            state.temperature,
            presets.len()
        );

        Self {
            daemon,
            state,
            presets,
        }
    }

    /// Current state
    pub fn state(&self) -> &TrayState {
        &self.state
    }

    /// Temperature presets shown in the menu
    pub fn presets(&self) -> &[Kelvin] {
        &self.presets
    }

    /// The daemon client
    pub fn daemon(&self) -> &D {
        &self.daemon
    }

    /// Menu for the current state
    pub fn menu(&self) -> MenuModel {
        build_menu(&self.state, &self.presets)
    }

    /// Flip the power state and send `enable` or `disable`.
    ///
    /// On failure the previous power state is kept and the failure indicator
    /// is set. Returns the power state after the call.
    pub fn on_toggle_selected(&mut self) -> Result<PowerState> {
        let target = self.state.power.toggled();
        info!("Toggling hyprsunset: {} -> {}", self.state.power, target);

        let result = match target {
            PowerState::On => self.daemon.enable(),
            PowerState::Off => self.daemon.disable(),
        };

        match result {
            Ok(()) => {
                self.state.power = target;
                self.state.last_failure = None;
                Ok(target)
            }
            Err(e) => {
                warn!("Failed to switch hyprsunset {}: {}", target, e);
                let verb = if target.is_on() { "enable" } else { "disable" };
                self.state.last_failure = Some(format!("Could not {verb} hyprsunset"));
                Err(e)
            }
        }
    }

    /// Apply a temperature preset.
    ///
    /// Values outside the daemon's range are rejected without invoking it.
    /// The command is sent whatever the power state is. On failure the
    /// previous temperature is kept and the failure indicator is set.
    pub fn on_temperature_selected(&mut self, value: u32) -> Result<Kelvin> {
        let kelvin = Kelvin::new(value).inspect_err(|e| {
            warn!("Rejected temperature selection: {}", e);
        })?;
        info!("Setting temperature: {} -> {}", self.state.temperature, kelvin);

        match self.daemon.set_temperature(kelvin) {
            Ok(()) => {
                self.state.temperature = kelvin;
                self.state.last_failure = None;
                Ok(kelvin)
            }
            Err(e) => {
                warn!("Failed to set temperature {}: {}", kelvin, e);
                self.state.last_failure = Some(format!("Could not set {kelvin}"));
                Err(e)
            }
        }
    }

    /// Handle the quit entry. The daemon is left running.
    pub fn on_quit(&self) -> Flow {
        info!(
            "Quit requested; leaving hyprsunset {} at {}",
            self.state.power, self.state.temperature
        );
        Flow::Quit
    }

    /// Dispatch a menu action. Failures are already reflected in the state,
    /// so they are only logged here.
    pub fn handle(&mut self, action: MenuAction) -> Flow {
        debug!("Menu action: {:?}", action);
        match action {
            MenuAction::Toggle => {
                let _ = self.on_toggle_selected();
                Flow::Continue
            }
            MenuAction::SetTemperature(kelvin) => {
                let _ = self.on_temperature_selected(kelvin.get());
                Flow::Continue
            }
            MenuAction::Quit => self.on_quit(),
        }
    }
}

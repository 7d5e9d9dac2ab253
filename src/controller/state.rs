//! In-memory tray state
//!
//! Nothing here is persisted. Both values start at their defaults on every
//! launch and are only changed by the controller after the daemon accepted
//! the corresponding command.

use crate::error::{Result, TrayError};
use std::fmt;

/// Assumed on/off status of the daemon
///
/// This is a display hint: the daemon is never queried, so the value only
/// reflects the last command that succeeded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PowerState {
    /// Filter applied
    #[default]
    On,
    /// Filter removed
    Off,
}

impl PowerState {
    /// The other state
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::On => Self::Off,
            Self::Off => Self::On,
        }
    }

    /// `true` for [`PowerState::On`]
    pub fn is_on(self) -> bool {
        self == Self::On
    }
}

impl fmt::Display for PowerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::On => "ON",
            Self::Off => "OFF",
        })
    }
}

/// A color temperature the daemon accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Kelvin(u32);

impl Kelvin {
    /// Lowest temperature the daemon accepts
    pub const MIN: u32 = 1000;
    /// Highest temperature the daemon accepts (neutral white)
    pub const MAX: u32 = 6500;
    /// Temperature assumed at startup
    pub const DEFAULT: Self = Self(Self::MAX);

    /// Validate `value` against the daemon's range
    pub fn new(value: u32) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(TrayError::TemperatureOutOfRange(value))
        }
    }

    /// Raw Kelvin value
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Kelvin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}K", self.0)
    }
}

/// Everything the menu is built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrayState {
    /// Assumed daemon status
    pub power: PowerState,
    /// Last temperature the daemon accepted
    pub temperature: Kelvin,
    /// Description of the most recent failed command, cleared on the next success
    pub last_failure: Option<String>,
}

impl TrayState {
    /// Startup state: on, at `temperature`, no failure
    pub fn new(temperature: Kelvin) -> Self {
        Self {
            power: PowerState::On,
            temperature,
            last_failure: None,
        }
    }
}

impl Default for TrayState {
    fn default() -> Self {
        Self::new(Kelvin::DEFAULT)
    }
}

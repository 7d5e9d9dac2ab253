//! Tray controller module
//!
//! This module owns the tray's state and its mapping onto daemon commands.
//!
//! # Overview
//!
//! The controller is the single place where state changes happen:
//! - **Receives menu actions** from the tray adapter
//! - **Invokes the daemon** through a [`DaemonClient`](crate::daemon::DaemonClient)
//! - **Updates state** only after the daemon accepted the command
//! - **Builds the menu** from the current state on demand
//!
//! # Architecture
//!
//! - `TrayController`: owns `TrayState` and the daemon client
//! - `TrayState`: power state, temperature and failure indicator
//! - `build_menu`: pure function from state to `MenuModel`
//!
//! # Event Flow
//!
//! ```text
//! ksni menu click → MenuAction → TrayController → DaemonClient → hyprctl
//!                                      ↓
//!                                 TrayState → build_menu → ksni refresh
//! ```
//!
//! # Failure Handling
//!
//! A failed command never changes the power state or temperature. The
//! failure is recorded in `TrayState::last_failure`, which switches the icon
//! to a warning and adds a status line to the menu until the next command
//! succeeds.

pub mod menu;
pub mod state;
pub mod tray_controller;

pub use menu::{MenuAction, MenuEntry, MenuModel, build_menu};
pub use state::{Kelvin, PowerState, TrayState};
pub use tray_controller::{Flow, TrayController};

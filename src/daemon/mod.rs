//! Daemon control module
//!
//! The tray only needs three things from the blue-light daemon: turn it on,
//! turn it off, and change its temperature. [`DaemonClient`] captures exactly
//! that, so the controller can be driven by a fake in tests.
//!
//! # Overview
//!
//! - `DaemonClient`: the capability trait used by the controller
//! - `CommandDaemonClient`: runs configured command lines (by default
//!   `hyprctl hyprsunset ...`) and reports their exit status
//!
//! Invocations are synchronous. There is no retry and the daemon's output is
//! never parsed; only success or failure matters.

pub mod client;

pub use client::{CommandDaemonClient, DaemonClient};

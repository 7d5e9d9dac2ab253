//! System tray integration
//!
//! This module exposes the controller through a StatusNotifierItem tray using
//! the `ksni` crate, which works on Wayland bars (waybar, ironbar, ...)
//! without GTK.
//!
//! # Implementation Notes
//!
//! `ksni` runs the D-Bus service on its own thread and calls into
//! [`SunsetTray`] from there, one event at a time. That thread is the only
//! one touching the controller, so the state needs no lock. After every menu
//! activation `ksni` re-reads the icon, tooltip and menu, which are rebuilt
//! from [`TrayController::menu`] each time.
//!
//! Left-click on the icon behaves like the toggle entry.
//!
//! At login the tray is started by `exec-once` alongside the bar, so the
//! StatusNotifierWatcher may not exist yet. The service is spawned with
//! `assume_sni_available(true)` and stays up while the watcher is offline;
//! `ksni` registers the item once a watcher appears.

use crate::gui::icon::disc_icon;
use hyprsunset_tray::controller::{Flow, MenuAction, MenuEntry, TrayController};
use hyprsunset_tray::daemon::DaemonClient;
use hyprsunset_tray::error::{Result, StringError, TrayError};
use ksni::blocking::TrayMethods;
use ksni::menu::{CheckmarkItem, StandardItem, SubMenu};
use ksni::{MenuItem, OfflineReason};
use std::sync::mpsc;
use tracing::{debug, info, warn};

/// Messages sent from the tray thread to the main thread
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayEvent {
    /// The user chose Exit
    Quit,
}

/// `ksni` tray wrapping the controller
pub struct SunsetTray<D: DaemonClient> {
    controller: TrayController<D>,
    events: mpsc::Sender<TrayEvent>,
}

impl<D: DaemonClient> SunsetTray<D> {
    /// Wrap `controller`; quit requests are sent on `events`
    pub fn new(controller: TrayController<D>, events: mpsc::Sender<TrayEvent>) -> Self {
        Self { controller, events }
    }

    fn dispatch(&mut self, action: MenuAction) {
        if self.controller.handle(action) == Flow::Quit {
            let _ = self.events.send(TrayEvent::Quit);
        }
    }
}

fn to_ksni_item<D>(entry: MenuEntry) -> MenuItem<SunsetTray<D>>
where
    D: DaemonClient + Send + 'static,
{
    match entry {
        MenuEntry::Status { label } => MenuItem::Standard(StandardItem {
            label,
            enabled: false,
            ..Default::default()
        }),
        MenuEntry::Action { label, action } => MenuItem::Standard(StandardItem {
            label,
            activate: Box::new(move |tray: &mut SunsetTray<D>| {
                debug!("Tray: {:?} clicked", action);
                tray.dispatch(action);
            }),
            ..Default::default()
        }),
        MenuEntry::Choice {
            label,
            checked,
            action,
        } => MenuItem::Checkmark(CheckmarkItem {
            label,
            checked,
            activate: Box::new(move |tray: &mut SunsetTray<D>| {
                debug!("Tray: {:?} clicked", action);
                tray.dispatch(action);
            }),
            ..Default::default()
        }),
        MenuEntry::Submenu { label, entries } => MenuItem::SubMenu(SubMenu {
            label,
            submenu: entries.into_iter().map(to_ksni_item).collect(),
            ..Default::default()
        }),
        MenuEntry::Separator => MenuItem::Separator,
    }
}

impl<D: DaemonClient + Send + 'static> ksni::Tray for SunsetTray<D> {
    fn id(&self) -> String {
        "hyprsunset-tray".to_string()
    }

    fn title(&self) -> String {
        "Hyprsunset".to_string()
    }

    fn category(&self) -> ksni::Category {
        ksni::Category::ApplicationStatus
    }

    fn icon_name(&self) -> String {
        self.controller.menu().icon_name
    }

    fn icon_pixmap(&self) -> Vec<ksni::Icon> {
        vec![disc_icon(self.controller.menu().fallback_color)]
    }

    fn tool_tip(&self) -> ksni::ToolTip {
        let menu = self.controller.menu();
        ksni::ToolTip {
            title: menu.tooltip_title,
            description: menu.tooltip_description,
            icon_name: String::new(),
            icon_pixmap: vec![],
        }
    }

    fn activate(&mut self, _x: i32, _y: i32) {
        debug!("Tray: activated (left-click)");
        self.dispatch(MenuAction::Toggle);
    }

    fn watcher_online(&self) {
        info!("StatusNotifierWatcher available, tray icon registered");
    }

    fn watcher_offline(&self, reason: OfflineReason) -> bool {
        warn!("StatusNotifierWatcher offline ({:?}), waiting for a tray host", reason);
        true
    }

    fn menu(&self) -> Vec<MenuItem<Self>> {
        self.controller
            .menu()
            .entries
            .into_iter()
            .map(to_ksni_item)
            .collect()
    }
}

/// Register the tray on the session bus.
///
/// Succeeds without a running tray host; only a missing session bus is an
/// error. The returned handle must be kept alive for the icon to stay visible.
pub fn spawn_tray<D>(
    controller: TrayController<D>,
    events: mpsc::Sender<TrayEvent>,
) -> Result<ksni::blocking::Handle<SunsetTray<D>>>
where
    D: DaemonClient + Send + 'static,
{
    let handle = SunsetTray::new(controller, events)
        .assume_sni_available(true)
        .spawn()
        .map_err(|e| TrayError::TrayServiceError(StringError::new(e.to_string())))?;
    info!("System tray icon registered");
    Ok(handle)
}

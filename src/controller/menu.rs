//! Toolkit-independent menu model
//!
//! [`build_menu`] turns a [`TrayState`] into the icon, tooltip and entries
//! the tray shows. The tray adapter maps this one-to-one onto `ksni` items,
//! so everything visible can be tested without a D-Bus session.

use crate::controller::state::{Kelvin, PowerState, TrayState};

/// Theme icon shown while the filter is on
pub const ICON_ON: &str = "weather-clear-night";
/// Theme icon shown while the filter is off
pub const ICON_OFF: &str = "weather-clear";
/// Theme icon shown after a failed command
pub const ICON_FAILURE: &str = "dialog-warning";

/// Fallback disc color (RGB) while the filter is on, for themes without
/// the named icons
pub const FALLBACK_COLOR_ON: [u8; 3] = [0xFF, 0xCC, 0x00];
/// Fallback disc color (RGB) while the filter is off
pub const FALLBACK_COLOR_OFF: [u8; 3] = [0xFF, 0xFF, 0xFF];

/// What selecting an entry does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Flip the power state
    Toggle,
    /// Apply a temperature preset
    SetTemperature(Kelvin),
    /// Exit the tray
    Quit,
}

/// One row of the tray menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    /// Disabled informational line
    Status {
        /// Text shown
        label: String,
    },
    /// Clickable entry
    Action {
        /// Text shown
        label: String,
        /// Triggered on click
        action: MenuAction,
    },
    /// Check item; `checked` marks the active temperature
    Choice {
        /// Text shown
        label: String,
        /// Whether the item shows a check mark
        checked: bool,
        /// Triggered on click
        action: MenuAction,
    },
    /// Submenu
    Submenu {
        /// Text shown
        label: String,
        /// Nested rows
        entries: Vec<MenuEntry>,
    },
    /// Separator line
    Separator,
}

/// Complete tray appearance for one state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuModel {
    /// Theme icon name
    pub icon_name: String,
    /// Color of the drawn icon used when the theme lacks `icon_name`
    pub fallback_color: [u8; 3],
    /// Tooltip heading
    pub tooltip_title: String,
    /// Tooltip body
    pub tooltip_description: String,
    /// Menu rows, top to bottom
    pub entries: Vec<MenuEntry>,
}

/// Label of the toggle entry for the given state
pub fn toggle_label(power: PowerState) -> &'static str {
    match power {
        PowerState::On => "Disable Hyprsunset",
        PowerState::Off => "Enable Hyprsunset",
    }
}

/// Build the menu for `state`. Pure and idempotent.
pub fn build_menu(state: &TrayState, presets: &[Kelvin]) -> MenuModel {
    let icon_name = if state.last_failure.is_some() {
        ICON_FAILURE
    } else if state.power.is_on() {
        ICON_ON
    } else {
        ICON_OFF
    };

    let tooltip_description = match &state.last_failure {
        Some(failure) => format!("{}\n{failure}", state.power),
        None => state.power.to_string(),
    };

    let mut entries = Vec::with_capacity(7);

    if let Some(failure) = &state.last_failure {
        entries.push(MenuEntry::Status {
            label: format!("⚠ {failure}"),
        });
        entries.push(MenuEntry::Separator);
    }

    entries.push(MenuEntry::Action {
        label: toggle_label(state.power).to_string(),
        action: MenuAction::Toggle,
    });
    entries.push(MenuEntry::Separator);
    entries.push(MenuEntry::Submenu {
        label: format!("Temperature ({})", state.temperature),
        entries: presets
            .iter()
            .map(|&kelvin| MenuEntry::Choice {
                label: kelvin.to_string(),
                checked: kelvin == state.temperature,
                action: MenuAction::SetTemperature(kelvin),
            })
            .collect(),
    });
    entries.push(MenuEntry::Separator);
    entries.push(MenuEntry::Action {
        label: "Exit".to_string(),
        action: MenuAction::Quit,
    });

    MenuModel {
        icon_name: icon_name.to_string(),
        fallback_color: if state.power.is_on() {
            FALLBACK_COLOR_ON
        } else {
            FALLBACK_COLOR_OFF
        },
        tooltip_title: format!("Hyprsunset: {}", state.temperature),
        tooltip_description,
        entries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn presets() -> Vec<Kelvin> {
        [6500, 4500, 2500]
            .into_iter()
            .map(|value| Kelvin::new(value).unwrap())
            .collect()
    }

    fn actions(entries: &[MenuEntry]) -> Vec<MenuAction> {
        let mut found = Vec::new();
        for entry in entries {
            match entry {
                MenuEntry::Action { action, .. } | MenuEntry::Choice { action, .. } => {
                    found.push(*action);
                }
                MenuEntry::Submenu { entries, .. } => found.extend(actions(entries)),
                MenuEntry::Status { .. } | MenuEntry::Separator => {}
            }
        }
        found
    }

    #[test]
    fn test_build_menu_is_idempotent() {
        let state = TrayState::default();
        assert_eq!(build_menu(&state, &presets()), build_menu(&state, &presets()));
    }

    #[test]
    fn test_menu_reflects_power_state() {
        let mut state = TrayState::default();
        let menu = build_menu(&state, &presets());
        assert_eq!(menu.icon_name, ICON_ON);
        assert_eq!(menu.fallback_color, FALLBACK_COLOR_ON);
        assert!(matches!(
            &menu.entries[0],
            MenuEntry::Action { label, action: MenuAction::Toggle } if label == "Disable Hyprsunset"
        ));

        state.power = PowerState::Off;
        let menu = build_menu(&state, &presets());
        assert_eq!(menu.icon_name, ICON_OFF);
        assert_eq!(menu.fallback_color, FALLBACK_COLOR_OFF);
        assert!(matches!(
            &menu.entries[0],
            MenuEntry::Action { label, .. } if label == "Enable Hyprsunset"
        ));
    }

    #[test]
    fn test_menu_contains_toggle_presets_and_quit() {
        let menu = build_menu(&TrayState::default(), &presets());
        let found = actions(&menu.entries);

        assert_eq!(found.first(), Some(&MenuAction::Toggle));
        assert_eq!(found.last(), Some(&MenuAction::Quit));
        let temperatures: Vec<u32> = found
            .iter()
            .filter_map(|action| match action {
                MenuAction::SetTemperature(kelvin) => Some(kelvin.get()),
                _ => None,
            })
            .collect();
        assert_eq!(temperatures, vec![6500, 4500, 2500]);
    }

    #[test]
    fn test_current_temperature_is_checked() {
        let state = TrayState::new(Kelvin::new(4500).unwrap());
        let menu = build_menu(&state, &presets());

        let Some(MenuEntry::Submenu { label, entries }) = menu
            .entries
            .iter()
            .find(|entry| matches!(entry, MenuEntry::Submenu { .. }))
        else {
            panic!("temperature submenu missing");
        };
        assert_eq!(label, "Temperature (4500K)");
        let checked: Vec<&str> = entries
            .iter()
            .filter_map(|entry| match entry {
                MenuEntry::Choice {
                    label,
                    checked: true,
                    ..
                } => Some(label.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(checked, vec!["4500K"]);
        assert_eq!(menu.tooltip_title, "Hyprsunset: 4500K");
    }

    #[test]
    fn test_failure_indicator() {
        let mut state = TrayState::default();
        state.power = PowerState::Off;
        state.last_failure = Some("Could not enable hyprsunset".to_string());

        let menu = build_menu(&state, &presets());
        assert_eq!(menu.icon_name, ICON_FAILURE);
        assert_eq!(
            menu.entries[0],
            MenuEntry::Status {
                label: "⚠ Could not enable hyprsunset".to_string()
            }
        );
        assert!(menu.tooltip_description.contains("Could not enable hyprsunset"));
    }
}

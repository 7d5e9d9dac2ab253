//! XDG base directory lookup
//!
//! Each directory comes from its XDG variable when set and non-empty, then
//! from `$HOME`, then from the current directory.

use std::path::PathBuf;

/// Application directory name used under the XDG base directories
pub const APP_DIR_NAME: &str = "hyprsunset-tray";

fn env_dir(var: &str) -> Option<PathBuf> {
    std::env::var_os(var)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

fn home_relative(relative: &str) -> PathBuf {
    env_dir("HOME").map_or_else(|| PathBuf::from("."), |home| home.join(relative))
}

/// `$XDG_CONFIG_HOME`, defaulting to `~/.config`
pub fn config_home() -> PathBuf {
    env_dir("XDG_CONFIG_HOME").unwrap_or_else(|| home_relative(".config"))
}

/// `$XDG_DATA_HOME`, defaulting to `~/.local/share`
pub fn data_home() -> PathBuf {
    env_dir("XDG_DATA_HOME").unwrap_or_else(|| home_relative(".local/share"))
}

/// `$XDG_RUNTIME_DIR`, defaulting to the system temp dir
pub fn runtime_dir() -> PathBuf {
    env_dir("XDG_RUNTIME_DIR").unwrap_or_else(std::env::temp_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{EnvGuard, create_test_dir};

    #[test]
    fn test_config_home_prefers_xdg_variable() {
        let temp_dir = create_test_dir();
        let _guard = EnvGuard::set("XDG_CONFIG_HOME", temp_dir.path());

        assert_eq!(config_home(), temp_dir.path());
    }

    #[test]
    fn test_data_home_falls_back_to_home() {
        let temp_dir = create_test_dir();
        let _guard = EnvGuard::set_many(&[
            ("XDG_DATA_HOME", None),
            ("HOME", Some(temp_dir.path())),
        ]);

        assert_eq!(data_home(), temp_dir.path().join(".local/share"));
    }
}

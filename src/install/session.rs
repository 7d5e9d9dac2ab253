//! Session display protocol detection

use std::fmt;

/// Display protocol reported by the login session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionProtocol {
    /// Wayland session (the only supported one)
    Wayland,
    /// X11 session
    X11,
    /// Text console
    Tty,
    /// Anything else, with the raw value (empty when nothing was reported)
    Unknown(String),
}

impl fmt::Display for SessionProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wayland => f.write_str("wayland"),
            Self::X11 => f.write_str("x11"),
            Self::Tty => f.write_str("tty"),
            Self::Unknown(raw) if raw.is_empty() => f.write_str("unknown"),
            Self::Unknown(raw) => f.write_str(raw),
        }
    }
}

/// Snapshot of the environment variables describing the session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionEnv {
    /// `XDG_SESSION_TYPE`
    pub session_type: Option<String>,
    /// `WAYLAND_DISPLAY`
    pub wayland_display: Option<String>,
    /// `DISPLAY`
    pub display: Option<String>,
}

impl SessionEnv {
    /// Read the current process environment
    pub fn from_env() -> Self {
        let read = |var: &str| std::env::var(var).ok().filter(|value| !value.is_empty());
        Self {
            session_type: read("XDG_SESSION_TYPE"),
            wayland_display: read("WAYLAND_DISPLAY"),
            display: read("DISPLAY"),
        }
    }

    /// Determine the protocol.
    ///
    /// `XDG_SESSION_TYPE` wins when set; otherwise the presence of
    /// `WAYLAND_DISPLAY` or `DISPLAY` decides.
    pub fn protocol(&self) -> SessionProtocol {
        if let Some(session_type) = &self.session_type {
            return match session_type.to_ascii_lowercase().as_str() {
                "wayland" => SessionProtocol::Wayland,
                "x11" => SessionProtocol::X11,
                "tty" => SessionProtocol::Tty,
                _ => SessionProtocol::Unknown(session_type.clone()),
            };
        }

        if self.wayland_display.is_some() {
            SessionProtocol::Wayland
        } else if self.display.is_some() {
            SessionProtocol::X11
        } else {
            SessionProtocol::Unknown(String::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(session_type: Option<&str>, wayland: Option<&str>, display: Option<&str>) -> SessionEnv {
        SessionEnv {
            session_type: session_type.map(str::to_string),
            wayland_display: wayland.map(str::to_string),
            display: display.map(str::to_string),
        }
    }

    #[test]
    fn test_session_type_wins() {
        assert_eq!(
            env(Some("wayland"), None, None).protocol(),
            SessionProtocol::Wayland
        );
        assert_eq!(
            env(Some("x11"), Some("wayland-1"), None).protocol(),
            SessionProtocol::X11
        );
        assert_eq!(env(Some("TTY"), None, None).protocol(), SessionProtocol::Tty);
        assert_eq!(
            env(Some("mir"), None, None).protocol(),
            SessionProtocol::Unknown("mir".to_string())
        );
    }

    #[test]
    fn test_display_variables_fallback() {
        assert_eq!(
            env(None, Some("wayland-1"), Some(":0")).protocol(),
            SessionProtocol::Wayland
        );
        assert_eq!(env(None, None, Some(":0")).protocol(), SessionProtocol::X11);
        assert_eq!(
            env(None, None, None).protocol().to_string(),
            "unknown"
        );
    }
}

#![expect(
    clippy::unwrap_used,
    reason = "Test utilities use .unwrap() for brevity"
)]

//! Shared test utilities for `hyprsunset-tray` unit tests.
//!
//! This module provides common test infrastructure used across multiple test modules.
//! It is only compiled during testing (`#[cfg(test)]`).

use std::ffi::OsString;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use tempfile::TempDir;

/// Global mutex to serialize tests that modify XDG/HOME environment variables.
static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Helper function to create a temporary test directory using tempfile.
/// Returns a `TempDir` that automatically cleans up when dropped.
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// RAII guard that overrides environment variables for a test scope
/// and restores the original values when dropped.
///
/// # Safety Considerations
///
/// `std::env::set_var` and `std::env::remove_var` are unsafe because other
/// threads may read the environment concurrently. Every test that touches
/// these variables goes through this guard, which holds `ENV_LOCK` for its
/// whole lifetime, so modifications never overlap.
pub struct EnvGuard {
    originals: Vec<(&'static str, Option<OsString>)>,
    // Held for the lifetime of the guard
    _lock: MutexGuard<'static, ()>,
}

#[expect(
    unsafe_code,
    reason = "Test-only code that modifies environment variables while holding ENV_LOCK"
)]
impl EnvGuard {
    /// Set a single variable to the given path.
    pub fn set(var: &'static str, value: &Path) -> Self {
        Self::set_many(&[(var, Some(value))])
    }

    /// Set (`Some`) or remove (`None`) several variables at once.
    pub fn set_many(vars: &[(&'static str, Option<&Path>)]) -> Self {
        // A panicking test poisons the lock; the environment is still restored by Drop
        let lock = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);

        let mut originals = Vec::with_capacity(vars.len());
        for (var, value) in vars {
            originals.push((*var, std::env::var_os(var)));
            // SAFETY: ENV_LOCK serializes every environment mutation made by tests
            unsafe {
                match value {
                    Some(value) => std::env::set_var(var, value),
                    None => std::env::remove_var(var),
                }
            }
        }

        Self {
            originals,
            _lock: lock,
        }
    }
}

#[expect(
    unsafe_code,
    reason = "Test-only code that restores environment variables while holding ENV_LOCK"
)]
impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (var, original) in self.originals.drain(..).rev() {
            // SAFETY: the lock guard field is dropped after this body runs
            unsafe {
                match original {
                    Some(value) => std::env::set_var(var, value),
                    None => std::env::remove_var(var),
                }
            }
        }
    }
}

/// Write `content` to `path`, creating parent directories.
pub fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, content).unwrap();
}

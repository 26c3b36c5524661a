//! XDG-style path utilities for configuration, cache, and data directories.
//!
//! This module provides consistent path resolution across platforms,
//! preferring XDG Base Directory Specification conventions over
//! OS-specific locations.

use std::path::PathBuf;

/// Returns the configuration directory for folio.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/folio` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/folio` otherwise
///
/// # Panics
///
/// Panics if the home directory cannot be determined.
pub fn config_dir() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME").map_or_else(
        |_| home_dir().join(".config").join("folio"),
        |xdg| PathBuf::from(xdg).join("folio"),
    )
}

/// Returns the cache directory for folio.
///
/// Resolution order:
/// 1. `$XDG_CACHE_HOME/folio` if `XDG_CACHE_HOME` is set
/// 2. `~/.cache/folio` otherwise
///
/// # Panics
///
/// Panics if the home directory cannot be determined.
pub fn cache_dir() -> PathBuf {
    std::env::var("XDG_CACHE_HOME").map_or_else(
        |_| home_dir().join(".cache").join("folio"),
        |xdg| PathBuf::from(xdg).join("folio"),
    )
}

/// Returns the data directory for folio (the document library lives here).
///
/// Resolution order:
/// 1. `$XDG_DATA_HOME/folio` if `XDG_DATA_HOME` is set
/// 2. `~/.local/share/folio` otherwise
///
/// # Panics
///
/// Panics if the home directory cannot be determined.
pub fn data_dir() -> PathBuf {
    std::env::var("XDG_DATA_HOME").map_or_else(
        |_| home_dir().join(".local").join("share").join("folio"),
        |xdg| PathBuf::from(xdg).join("folio"),
    )
}

/// Returns the user's home directory.
///
/// # Panics
///
/// Panics if the home directory cannot be determined.
#[allow(clippy::expect_used)]
fn home_dir() -> PathBuf {
    dirs::home_dir().expect("Failed to determine home directory")
}

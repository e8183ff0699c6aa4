//! Configuration and output paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations of the global config file:
//! - Linux: `~/.config/gh-release-notes/config.toml`
//! - macOS: `~/Library/Application Support/gh-release-notes/config.toml`
//! - Windows: `%APPDATA%\gh-release-notes\config.toml`

use std::path::PathBuf;

const APP_NAME: &str = "gh-release-notes";

/// Config file looked up in the current working directory
pub const LOCAL_CONFIG_FILE: &str = ".gh-release-notes.toml";

/// Where release notes are written unless configured otherwise
pub const DEFAULT_OUTPUT: &str = "target/github/release-notes.md";

/// Get the application config directory, if the platform has one
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join(APP_NAME))
}

/// Get path to the global config file
pub fn global_config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

/// Get path to the local config file (in CWD)
pub fn local_config_path() -> PathBuf {
    PathBuf::from(LOCAL_CONFIG_FILE)
}

pub fn default_output_path() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

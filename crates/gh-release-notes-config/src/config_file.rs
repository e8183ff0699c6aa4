use crate::paths;
use std::path::PathBuf;

/// Locate the config file: CWD first, then the global config directory
///
/// Searches for:
/// 1. `.gh-release-notes.toml` in the current working directory
/// 2. `config.toml` in the user's `gh-release-notes` config directory
///
/// Returns the path of the first file that exists, None otherwise.
pub fn find_config_file() -> Option<PathBuf> {
    let local = paths::local_config_path();
    if local.is_file() {
        log::debug!("Found config at {}", local.display());
        return Some(local);
    }

    if let Some(global) = paths::global_config_path() {
        if global.is_file() {
            log::debug!("Found config at {}", global.display());
            return Some(global);
        }
    }

    None
}

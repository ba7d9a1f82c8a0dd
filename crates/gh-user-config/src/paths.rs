//! Configuration and data directory paths
//!
//! Uses XDG directories via the `dirs` crate with fallbacks.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/gh-user-tui/`, `~/.cache/gh-user-tui/`
//! - macOS: `~/Library/Application Support/gh-user-tui/`, `~/Library/Caches/gh-user-tui/`
//! - Windows: `%APPDATA%\gh-user-tui\`, `%LOCALAPPDATA%\gh-user-tui\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "gh-user-tui";

/// Name of the config file looked up in the CWD and the config directory
pub const CONFIG_FILE_NAME: &str = "gh-user-tui.toml";

/// Get the application config directory, creating it if needed
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the application cache directory, creating it if needed
///
/// Release builds write their log files here.
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the path to the app config file in the config directory
pub fn app_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

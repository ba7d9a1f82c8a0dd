//! Config file discovery
//!
//! The config file is looked up in the current working directory first
//! (developer convenience), then in the platform config directory.

use crate::paths::{app_config_path, CONFIG_FILE_NAME};
use std::path::PathBuf;

/// Load the raw config file contents, if a config file exists
pub fn load_config_file() -> Option<String> {
    for path in candidate_paths() {
        if let Ok(content) = std::fs::read_to_string(&path) {
            log::debug!("Read config file from {}", path.display());
            return Some(content);
        }
    }
    None
}

fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE_NAME)];
    if let Ok(path) = app_config_path() {
        paths.push(path);
    }
    paths
}

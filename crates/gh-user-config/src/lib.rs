//! Configuration and file management for gh-user-tui
//!
//! This crate provides:
//! - File path utilities for config and cache files
//! - Configuration file loading (TOML)
//! - Application configuration (AppConfig) with query policy knobs
//! - Bearer-token resolution from config and environment

pub mod app_config;
pub mod config_file;
pub mod paths;

pub use app_config::{AppConfig, GitHubSettings, QuerySettings};
pub use config_file::load_config_file;
pub use paths::{cache_dir, config_dir};

/// Default GitHub REST API base URL (public GitHub)
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

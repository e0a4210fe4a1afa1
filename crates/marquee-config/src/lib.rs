//! Configuration and file management for marquee
//!
//! This crate provides:
//! - File path utilities for config and cache files
//! - Configuration file loading (TOML)
//! - Application configuration (AppConfig)

pub mod app_config;
pub mod config_file;
pub mod paths;

pub use app_config::{ApiBackend, ApiConfig, AppConfig, ProfileConfig, ServerConfig};
pub use config_file::{load_config_file, load_config_file_from};
pub use paths::{app_config_path, cache_dir, config_dir};

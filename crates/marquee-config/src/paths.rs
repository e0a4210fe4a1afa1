//! Configuration and cache directory paths
//!
//! Platform-specific locations come from the `dirs` crate:
//! - Linux: `~/.config/marquee/`, `~/.cache/marquee/`
//! - macOS: `~/Library/Application Support/marquee/`, `~/Library/Caches/marquee/`
//! - Windows: `%APPDATA%\marquee\`, `%LOCALAPPDATA%\marquee\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "marquee";

/// Application config directory; not created, the config file is optional
pub fn config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|base| base.join(APP_NAME))
        .context("Could not determine config directory")
}

/// Application cache directory, created on first use
///
/// Release builds write their log files here.
pub fn cache_dir() -> Result<PathBuf> {
    let dir = dirs::cache_dir()
        .map(|base| base.join(APP_NAME))
        .context("Could not determine cache directory")?;
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create cache directory {}", dir.display()))?;
    Ok(dir)
}

/// `config.toml` inside [`config_dir`]
pub fn app_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_path() {
        // No config directory in some sandboxes (no HOME)
        if let Ok(path) = app_config_path() {
            assert!(path.ends_with("marquee/config.toml"));
        }
    }
}

use crate::paths::app_config_path;
use std::{
    env,
    path::{Path, PathBuf},
};

const CONFIG_FILE: &str = ".marquee.toml";

/// Load config file content
///
/// Searches, in order:
/// 1. `.marquee.toml` in the current working directory
/// 2. `.marquee.toml` in the home directory
/// 3. `config.toml` in the platform config directory (see [`app_config_path`])
///
/// Returns the file content if found, None otherwise.
pub fn load_config_file() -> Option<String> {
    // Try current directory first
    if let Some(content) = load_config_file_from(Path::new(CONFIG_FILE)) {
        return Some(content);
    }

    if let Some(content) = get_home_config_path().and_then(|path| load_config_file_from(&path)) {
        return Some(content);
    }

    app_config_path()
        .ok()
        .and_then(|path| load_config_file_from(&path))
}

/// Load config file content from an explicit path
pub fn load_config_file_from(path: &Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            log::debug!("Loaded config from {}", path.display());
            Some(content)
        }
        Err(e) => {
            log::trace!("No config at {}: {}", path.display(), e);
            None
        }
    }
}

/// Get the path to the config file in the home directory
///
/// Returns ~/.marquee.toml if HOME environment variable is set.
fn get_home_config_path() -> Option<PathBuf> {
    env::var_os("HOME").map(|home| PathBuf::from(home).join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_from_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nport = 4000").unwrap();

        let content = load_config_file_from(file.path()).unwrap();
        assert!(content.contains("port = 4000"));
    }

    #[test]
    fn test_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config_file_from(&dir.path().join("absent.toml")).is_none());
    }
}

//! Application configuration
//!
//! Configuration loaded from .marquee.toml file.

use serde::{Deserialize, Serialize};

/// Application configuration loaded from .marquee.toml
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    /// Data access settings for the client
    #[serde(default)]
    pub api: ApiConfig,

    /// Routing server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Signed-in user for the client session (anonymous when absent)
    #[serde(default)]
    pub user: Option<ProfileConfig>,
}

/// Which data source backs the movie API
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ApiBackend {
    /// Seeded in-memory catalog
    #[default]
    InMemory,
    /// The marquee routing server
    Http,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    #[serde(default)]
    pub backend: ApiBackend,

    /// Base URL of the routing server API, used by the `http` backend
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Delay in-memory calls the way a network round trip would
    #[serde(default = "default_simulate_latency")]
    pub simulate_latency: bool,

    /// Upper bound for every API call, in milliseconds
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,

    /// Bearer token sent with write calls to the routing server
    #[serde(default)]
    pub access_token: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

/// Profile of the user the client acts as
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ProfileConfig {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
}

fn default_base_url() -> String {
    "http://localhost:3000/api".to_string()
}

fn default_simulate_latency() -> bool {
    true
}

fn default_request_timeout_ms() -> u64 {
    10_000
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            backend: ApiBackend::default(),
            base_url: default_base_url(),
            simulate_latency: default_simulate_latency(),
            request_timeout_ms: default_request_timeout_ms(),
            access_token: None,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        Self::parse_or_default(crate::load_config_file())
    }

    /// Load config from an explicit file, or use defaults
    pub fn load_from(path: &std::path::Path) -> Self {
        Self::parse_or_default(crate::load_config_file_from(path))
    }

    /// Parse a TOML document
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    fn parse_or_default(content: Option<String>) -> Self {
        if let Some(content) = content {
            match Self::from_toml_str(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }
}

impl ServerConfig {
    /// `host:port` string suitable for binding a listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

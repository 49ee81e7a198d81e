//! Dashboard configuration file support.
//!
//! Reads server and data-source settings from an optional
//! `dashboard.toml`. Environment variables take precedence over the
//! file, and built-in defaults apply when neither is present, so the
//! server starts with no flags and no mandatory environment.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_HOST: &str = "0.0.0.0";
/// Default serving port; the port the original dashboard served on.
const DEFAULT_PORT: u16 = 8050;
const DEFAULT_CSV_PATH: &str = "data/spacex_launch_dash.csv";

/// Dashboard configuration from file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub data: DataSettings,
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Data source settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSettings {
    #[serde(default = "default_csv_path")]
    pub csv_path: PathBuf,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            csv_path: default_csv_path(),
        }
    }
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_csv_path() -> PathBuf {
    PathBuf::from(DEFAULT_CSV_PATH)
}

impl DashboardConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).with_context(|| {
            format!("Failed to read config file '{}'", path.as_ref().display())
        })?;

        let config: DashboardConfig = toml::from_str(&content).with_context(|| {
            format!("Failed to parse config file '{}'", path.as_ref().display())
        })?;

        Ok(config)
    }

    /// Load configuration from the default locations.
    ///
    /// Searches for `dashboard.toml` in the current directory, then
    /// `backend/`, then the parent directory. Falls back to defaults when
    /// no file is found; a file that exists but does not parse is still
    /// an error.
    pub fn from_default_location() -> Result<Self> {
        let search_paths = [
            PathBuf::from("dashboard.toml"),
            PathBuf::from("backend/dashboard.toml"),
            PathBuf::from("../dashboard.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Apply `HOST`, `PORT` and `DATA_FILE` environment overrides.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(host) = env::var("HOST") {
            self.server.host = host;
        }
        if let Some(port) = env::var("PORT").ok().and_then(|s| s.parse().ok()) {
            self.server.port = port;
        }
        if let Ok(path) = env::var("DATA_FILE") {
            self.data.csv_path = PathBuf::from(path);
        }
        self
    }

    /// Bind address string for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

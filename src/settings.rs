use std::fs;
use std::path::PathBuf;

use dirs_next as dirs;
use serde::Deserialize;
use tracing::debug;

use crate::error::AppError;

pub const DEFAULT_RUNTIME: &str = "docker";
pub const DEFAULT_SOCKET: &str = "/var/run/docker.sock";
pub const DEFAULT_API_VERSION: &str = "1.37";

/// Runner-level knobs. Every field falls back to the stock Docker setup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub runtime: String,
    pub socket: String,
    pub api_version: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            runtime: DEFAULT_RUNTIME.to_string(),
            socket: DEFAULT_SOCKET.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self, AppError> {
        let path = settings_file_path()?;
        if path.exists() {
            debug!(path = %path.display(), "loading settings");
            let contents = fs::read_to_string(&path)?;
            Settings::parse(&contents)
        } else {
            debug!(path = %path.display(), "no settings file, using defaults");
            Ok(Settings::default())
        }
    }

    pub fn parse(contents: &str) -> Result<Self, AppError> {
        let settings: Settings = toml::from_str(contents)?;
        if settings.runtime.trim().is_empty() {
            return Err(AppError::settings("'runtime' must not be empty"));
        }
        Ok(settings)
    }
}

pub fn settings_file_path() -> Result<PathBuf, AppError> {
    let config_root = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
        .ok_or_else(|| {
            AppError::settings("Unable to determine configuration directory for this platform")
        })?;
    Ok(config_root.join("dive-action").join("settings.toml"))
}


use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Application-wide error type for the dive-action runner.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Dive configuration file {} doesn't exist!", .0.display())]
    MissingConfig(PathBuf),

    #[error("Dive configuration file {} could not be checked: {source}", .path.display())]
    ConfigCheck {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Dive configuration file path {} is not valid UTF-8", .0.display())]
    NonUtf8Config(PathBuf),

    #[error("Failed to pull {image} (exit code: {code})")]
    PullFailed { image: String, code: i32 },

    #[error("Scan failed (exit code: {0})")]
    ScanFailed(i32),

    #[error("{0} failed (terminated by signal)")]
    Terminated(String),

    #[error("Failed to launch {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("{0}")]
    Usage(String),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("Failed to parse settings: {0}")]
    SettingsParse(#[from] toml::de::Error),
}

impl AppError {
    pub fn settings<S: Into<String>>(msg: S) -> Self {
        AppError::Settings(msg.into())
    }
}

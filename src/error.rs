use crate::config::ConfigError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrainerError {
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Could not open log file {path}: {source}")]
    LogFile {
        path: String,
        source: std::io::Error,
    },

    #[error("Logging already initialised: {0}")]
    Logging(String),

    #[error("Summary serialization failed: {0}")]
    Summary(#[from] serde_json::Error),
}

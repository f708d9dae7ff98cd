use std::io;

use thiserror::Error;

/// Failure while writing solve history to disk
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("history file i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("could not encode history: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Why a config file could not be used as-is
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no config file yet")]
    Missing,
    #[error("config file i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
}

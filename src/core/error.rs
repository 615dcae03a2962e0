//! Error types for the application

use thiserror::Error;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Unknown device: {0}")]
    UnknownDevice(String),

    #[error("Unknown tariff preset: {0}")]
    UnknownPreset(String),

    #[error("Unknown period: {0}")]
    UnknownPeriod(String),

    #[error("Invalid command: {0}")]
    InvalidCommand(String),
}

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;

//! Unified error types for the API.

use thiserror::Error;

/// Process-level error type.
///
/// Only startup can fail this way; request handling never does.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration loaded but rejected by validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Prometheus exporter could not be installed.
    #[error("metrics exporter error: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    /// IO error (binding the listener, serving).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Dice rolling errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RollError {
    /// The requested die label is not in the die type table.
    #[error("Dice type {label} is not supported")]
    UnknownDieType {
        /// Label as submitted by the client.
        label: String,
    },
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, AppError>;

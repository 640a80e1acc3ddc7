use thiserror::Error;

/// Errors that can occur while setting up a category normalizer.
///
/// Normalizing labels never fails; malformed input is cleaned up locally.
/// Only loading and validating configuration can go wrong.
#[derive(Error, Debug)]
pub enum NormalizeError {
    /// Configuration could not be loaded or deserialized
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// Configuration loaded but contains values the pipeline cannot use
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

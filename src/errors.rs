/*!
 * Error types for the intuitus application.
 *
 * Parsing a script never fails; these types cover the fallible edges
 * around it (marker names given explicitly and configuration files), using
 * the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors raised when a marker name is given explicitly
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarkerError {
    /// The name is not one of the recognized kinds
    #[error("Unknown marker: {0}")]
    UnknownMarker(String),
}

/// Errors that can occur when loading or validating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read or written
    #[error("Config file error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid JSON for `Config`
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A setting is outside its allowed range
    #[error("Invalid config value for {field}: {message}")]
    Invalid {
        /// Setting name
        field: &'static str,
        /// What is wrong with it
        message: String,
    },
}

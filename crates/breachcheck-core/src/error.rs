//! Core error types for BreachCheck.
//!
//! Every failure is terminal for an invocation, so the taxonomy is small:
//! a missing credential, malformed input, configuration problems and
//! failures reported by the breach API.

use thiserror::Error;

/// Central error type for all BreachCheck operations.
#[derive(Error, Debug)]
pub enum BreachCheckError {
    /// No usable API key in the environment or config file
    #[error("{hint}")]
    MissingCredential {
        /// Remediation hint telling the user where to obtain and put a key
        hint: String,
    },

    /// Validation errors (malformed email address)
    #[error("{0}")]
    Validation(String),

    /// Configuration errors (file loading, parsing, template writing)
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Failure reported by the breach API or the transport underneath it
    #[error("API Error: {0}")]
    Api(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to parse TOML
    #[error("failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    /// I/O error reading/writing config
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using `BreachCheckError`.
pub type Result<T> = std::result::Result<T, BreachCheckError>;

/// Result type alias for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

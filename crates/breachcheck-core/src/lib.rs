//! BreachCheck Core - Foundation crate for the BreachCheck CLI.
//!
//! This crate provides the error taxonomy, the configuration/credential
//! loader and email validation that the other BreachCheck crates depend on.
//!
//! # Modules
//!
//! - [`error`] - Central error types using thiserror
//! - [`config`] - TOML-based configuration and API key resolution
//! - [`types`] - Validated newtypes (`EmailAddress`)
//!
//! # Example
//!
//! ```rust
//! use breachcheck_core::EmailAddress;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let email = EmailAddress::parse("  user@example.com ")?;
//! assert_eq!(email.as_str(), "user@example.com");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use config::{
    load_dotenv, resolve_api_key, AppConfig, GeneralConfig, HibpConfig, OutputFormat,
    API_KEY_ENV_VAR, API_KEY_PLACEHOLDER, DEFAULT_CONFIG_PATH,
};
pub use error::{BreachCheckError, ConfigError, ConfigResult, Result};
pub use types::EmailAddress;

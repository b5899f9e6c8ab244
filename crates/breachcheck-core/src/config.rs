//! Configuration management for BreachCheck.
//!
//! Provides TOML-based configuration read from a fixed relative path and
//! API key resolution with an environment variable override.

use crate::error::{BreachCheckError, ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Environment variable holding the HaveIBeenPwned API key.
pub const API_KEY_ENV_VAR: &str = "HIBP_API_KEY";

/// Placeholder written into fresh config templates. Never accepted as a key.
pub const API_KEY_PLACEHOLDER: &str = "your_api_key_here";

/// Default location of the config file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config/config.toml";

const API_KEY_URL: &str = "https://haveibeenpwned.com/API/Key";

const CONFIG_TEMPLATE: &str = r#"# BreachCheck configuration

[hibp]
# Get your API key from: https://haveibeenpwned.com/API/Key
api_key = "your_api_key_here"

[general]
default_truncate = false
output_format = "table"
"#;

/// Main application configuration.
///
/// Loaded from `config/config.toml`. If the file doesn't exist, default
/// values are used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Credential section
    pub hibp: HibpConfig,
    /// Display defaults
    pub general: GeneralConfig,
}

/// Credential section (`[hibp]`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HibpConfig {
    /// HaveIBeenPwned API key
    pub api_key: Option<String>,
}

/// Display defaults (`[general]`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Request truncated responses unless `--truncate` is given explicitly
    pub default_truncate: bool,
    /// Report format used when `--json` is not given
    pub output_format: OutputFormat,
}

/// Report output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

impl AppConfig {
    /// Load configuration from `path`, falling back to defaults if the file
    /// does not exist.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or is not valid TOML.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        if path.exists() {
            tracing::debug!("Loading config from {}", path.display());
            let contents = fs::read_to_string(path)?;
            let config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            tracing::debug!("Config file not found at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Write a template config with placeholder values to `path`.
    ///
    /// An existing file is left untouched. Returns `true` when the template
    /// was written.
    pub fn write_template(path: &Path) -> ConfigResult<bool> {
        if path.exists() {
            return Ok(false);
        }

        if let Some(dir) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        tracing::debug!("Writing config template to {}", path.display());
        fs::write(path, CONFIG_TEMPLATE)?;
        Ok(true)
    }

    /// API key from the config file, if it holds a real value.
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.hibp.api_key.as_deref().filter(|key| is_usable_key(key))
    }
}

/// Resolve the API key: the `HIBP_API_KEY` environment variable wins over
/// the config file.
///
/// # Errors
/// Returns [`BreachCheckError::MissingCredential`] with a remediation hint
/// if neither source yields a usable key.
pub fn resolve_api_key(config: &AppConfig) -> Result<String, BreachCheckError> {
    resolve_api_key_from(std::env::var(API_KEY_ENV_VAR).ok(), config)
}

fn resolve_api_key_from(
    env_value: Option<String>,
    config: &AppConfig,
) -> Result<String, BreachCheckError> {
    if let Some(key) = env_value.filter(|key| is_usable_key(key)) {
        tracing::debug!("Using API key from {API_KEY_ENV_VAR}");
        return Ok(key.trim().to_string());
    }

    if let Some(key) = config.api_key() {
        tracing::debug!("Using API key from config file");
        return Ok(key.trim().to_string());
    }

    Err(BreachCheckError::MissingCredential {
        hint: format!(
            "No API key found. Please set {API_KEY_ENV_VAR} environment variable \
             or add api_key to the [hibp] section of {DEFAULT_CONFIG_PATH}.\n\
             Get your API key from: {API_KEY_URL}"
        ),
    })
}

fn is_usable_key(key: &str) -> bool {
    let key = key.trim();
    !key.is_empty() && key != API_KEY_PLACEHOLDER
}

/// Load variables from a `.env` file in the working directory, if present.
///
/// Returns `true` when a file was loaded.
pub fn load_dotenv() -> bool {
    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::debug!("Loaded environment from {}", path.display());
            true
        }
        Err(_) => false,
    }
}

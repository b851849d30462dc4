//! Configuration system for Kbase.
//!
//! Configuration is layered: built-in defaults, then an optional file
//! (TOML, YAML or JSON), then `KBASE_`-prefixed environment variables.
//! Nested keys use a double underscore, e.g. `KBASE_SEARCH__DEFAULT_LIMIT=5`.

mod builder;
mod loader;
mod models;
mod validation;

pub use builder::ConfigBuilder;
pub use loader::{ConfigFormat, ConfigLoader};
pub use models::*;
pub use validation::validate_config;

/// Default configuration file names that the system will look for
pub const DEFAULT_CONFIG_FILES: &[&str] = &["kbase.toml", "kbase.yaml", "kbase.yml", "kbase.json"];

/// Environment variable prefix for Kbase configuration
pub const ENV_PREFIX: &str = "KBASE_";

/// Configuration error type
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Error occurred during file loading
    #[error("Failed to load configuration file: {0}")]
    FileLoadError(String),

    /// Error occurred during validation
    #[error("Configuration validation error: {0}")]
    ValidationError(String),

    /// Error occurred during parsing
    #[error("Configuration parsing error: {0}")]
    ParseError(String),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

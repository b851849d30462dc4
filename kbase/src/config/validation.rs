//! Configuration validation utilities.

use super::ConfigError;
use super::models::*;

/// Validate the entire configuration.
pub fn validate_config(config: &KbConfig) -> Result<(), ConfigError> {
    validate_data_config(&config.data)?;
    validate_search_config(&config.search)?;
    Ok(())
}

fn validate_data_config(config: &DataConfig) -> Result<(), ConfigError> {
    if config.dir.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "Data directory cannot be empty".to_string(),
        ));
    }

    if config.extension.is_empty() || config.extension.starts_with('.') {
        return Err(ConfigError::ValidationError(
            "Document extension must be non-empty and given without a leading dot".to_string(),
        ));
    }

    Ok(())
}

fn validate_search_config(config: &SearchConfig) -> Result<(), ConfigError> {
    if config.default_limit == 0 {
        return Err(ConfigError::ValidationError(
            "Default search limit must be at least 1".to_string(),
        ));
    }

    if config.default_limit > config.max_limit {
        return Err(ConfigError::ValidationError(format!(
            "Default search limit ({}) cannot exceed the maximum ({})",
            config.default_limit, config.max_limit
        )));
    }

    // room for at least one character besides the "..." marker
    if config.summary_max_chars < 4 {
        return Err(ConfigError::ValidationError(
            "Summary length must be at least 4 characters".to_string(),
        ));
    }

    config
        .scoring
        .validate()
        .map_err(ConfigError::ValidationError)
}

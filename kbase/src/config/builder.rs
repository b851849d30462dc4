//! Configuration builder.
//!
//! This module provides a builder pattern API for creating configurations.

use super::{Result, models::*, validation};
use crate::search::ScoringConfig;
use std::path::Path;

/// Builder for creating KbConfig instances.
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config: KbConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the document root directory.
    pub fn with_data_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config.data.dir = path.as_ref().to_path_buf();
        self
    }

    /// Set the document file extension (without the dot).
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.config.data.extension = extension.into();
        self
    }

    /// Set the default and maximum number of search results.
    pub fn with_limits(mut self, default_limit: usize, max_limit: usize) -> Self {
        self.config.search.default_limit = default_limit;
        self.config.search.max_limit = max_limit;
        self
    }

    /// Set the summary length in characters.
    pub fn with_summary_max_chars(mut self, max_chars: usize) -> Self {
        self.config.search.summary_max_chars = max_chars;
        self
    }

    /// Replace the ranking weights.
    pub fn with_scoring(mut self, scoring: ScoringConfig) -> Self {
        self.config.search.scoring = scoring;
        self
    }

    /// Set the log level.
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.config.logging.level = level;
        self
    }

    /// Set the log format.
    pub fn with_log_format(mut self, format: LogFormat) -> Self {
        self.config.logging.format = format;
        self
    }

    /// Build and validate the configuration.
    pub fn build(self) -> Result<KbConfig> {
        validation::validate_config(&self.config)?;
        Ok(self.config)
    }
}

//! Layered loading of [`KbConfig`].
//!
//! Layers merge in call order, later layers winning: built-in defaults,
//! one configuration file, `KBASE_` environment variables, then explicit
//! overrides such as a data directory given on the command line.

use super::{ConfigError, DEFAULT_CONFIG_FILES, ENV_PREFIX, Result, models::*, validation};
use figment::{
    Figment, Provider,
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
};
use std::path::{Path, PathBuf};

/// File formats a configuration file may use, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Yaml,
    Json,
}

impl ConfigFormat {
    /// Format for `path`, or `None` for an unrecognised extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Builds a [`KbConfig`] from defaults, at most one file, the environment
/// and overrides.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    figment: Figment,
    source: Option<PathBuf>,
}

impl ConfigLoader {
    /// Start from the built-in defaults.
    pub fn new() -> Self {
        Self {
            figment: Figment::from(Serialized::defaults(KbConfig::default())),
            source: None,
        }
    }

    /// Merge a configuration file. Missing files and unknown extensions are
    /// errors; a later call replaces the recorded [`source`](Self::source).
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<&mut Self> {
        let path = path.as_ref();

        if !path.is_file() {
            return Err(ConfigError::FileLoadError(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let format = ConfigFormat::from_path(path).ok_or_else(|| {
            ConfigError::FileLoadError(format!(
                "Unsupported file format (expected toml, yaml, yml or json): {}",
                path.display()
            ))
        })?;

        match format {
            ConfigFormat::Toml => self.merge(Toml::file(path)),
            ConfigFormat::Yaml => self.merge(Yaml::file(path)),
            ConfigFormat::Json => self.merge(Json::file(path)),
        };
        self.source = Some(path.to_path_buf());
        Ok(self)
    }

    /// Merge the first of `kbase.{toml,yaml,yml,json}` found in `dir`.
    /// Finding none leaves the loader unchanged.
    pub fn load_default_files_in<P: AsRef<Path>>(&mut self, dir: P) -> &mut Self {
        let dir = dir.as_ref();
        if let Some(path) = DEFAULT_CONFIG_FILES
            .iter()
            .map(|file| dir.join(file))
            .find(|path| path.is_file())
        {
            // The candidate exists and has a known extension.
            let _ = self.load_file(path);
        }
        self
    }

    /// Merge the first default configuration file in the working directory.
    pub fn load_default_files(&mut self) -> &mut Self {
        self.load_default_files_in(".")
    }

    /// Merge `KBASE_`-prefixed environment variables, nesting on `__`.
    pub fn load_env(&mut self) -> &mut Self {
        self.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Override the knowledge directory. `None` keeps the layered value.
    pub fn with_data_dir<P: AsRef<Path>>(&mut self, dir: Option<P>) -> &mut Self {
        if let Some(dir) = dir {
            let dir = dir.as_ref().to_path_buf();
            self.merge(Serialized::default("data.dir", dir));
        }
        self
    }

    /// Merge an arbitrary provider on top of the current layers.
    pub fn merge<T: Provider>(&mut self, provider: T) -> &mut Self {
        let figment = std::mem::replace(&mut self.figment, Figment::new());
        self.figment = figment.merge(provider);
        self
    }

    /// The configuration file merged so far, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Extract the merged configuration and validate it.
    pub fn extract(&self) -> Result<KbConfig> {
        let config: KbConfig = self
            .figment
            .extract()
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        validation::validate_config(&config)?;

        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

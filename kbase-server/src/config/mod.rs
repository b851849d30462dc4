//! Server configuration module

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

use crate::cli::CliArgs;

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    /// Port to listen on
    pub port: u16,

    /// Address to bind to
    pub host: String,

    /// Overrides the knowledge base data directory when set
    pub data_dir: Option<PathBuf>,

    /// Knowledge base configuration file
    pub config_file: Option<PathBuf>,

    /// Maximum request body size in bytes
    pub max_request_size: usize,

    /// Log level requested on the command line
    pub log_level: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: "0.0.0.0".to_string(),
            data_dir: None,
            config_file: None,
            max_request_size: 1024 * 1024, // 1MB
            log_level: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from CLI arguments and environment variables
    /// CLI arguments take precedence over environment variables
    pub fn from_cli_and_env(cli_args: CliArgs) -> Result<Self> {
        Self::from_cli_and_lookup(cli_args, |key| env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_cli_and_env`] with a custom variable lookup
    pub fn from_cli_and_lookup<F>(cli_args: CliArgs, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(port) = cli_args.port {
            config.port = port;
        } else if let Some(port) = lookup("KBASE_PORT").or_else(|| lookup("PORT")) {
            config.port = port
                .parse()
                .with_context(|| format!("Invalid port: {port}"))?;
        }

        if let Some(host) = cli_args.host {
            config.host = host;
        } else if let Some(host) = lookup("KBASE_HOST") {
            config.host = host;
        }

        if let Some(data_dir) = cli_args.data_dir {
            config.data_dir = Some(data_dir);
        } else if let Some(data_dir) = lookup("KBASE_DATA_DIR") {
            config.data_dir = Some(PathBuf::from(data_dir));
        }

        if let Some(max_size) = cli_args.max_request_size {
            config.max_request_size = max_size;
        } else if let Some(max_size) = lookup("KBASE_MAX_REQUEST_SIZE") {
            config.max_request_size = max_size
                .parse()
                .with_context(|| format!("Invalid max request size: {max_size}"))?;
        }

        config.config_file = cli_args.config_file;
        config.log_level = cli_args.log_level;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(cli_args: CliArgs, vars: &[(&str, &str)]) -> Result<ServerConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        ServerConfig::from_cli_and_lookup(cli_args, |key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(CliArgs::default(), &[]).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.max_request_size, 1024 * 1024);
    }

    #[test]
    fn test_env_overrides_defaults() {
        let config = load(
            CliArgs::default(),
            &[
                ("KBASE_PORT", "9000"),
                ("KBASE_HOST", "127.0.0.1"),
                ("KBASE_DATA_DIR", "/srv/kb"),
                ("KBASE_MAX_REQUEST_SIZE", "4096"),
            ],
        )
        .unwrap();

        assert_eq!(config.port, 9000);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.data_dir, Some(PathBuf::from("/srv/kb")));
        assert_eq!(config.max_request_size, 4096);
    }

    #[test]
    fn test_plain_port_variable() {
        let config = load(CliArgs::default(), &[("PORT", "3000")]).unwrap();
        assert_eq!(config.port, 3000);

        let config = load(
            CliArgs::default(),
            &[("PORT", "3000"), ("KBASE_PORT", "4000")],
        )
        .unwrap();
        assert_eq!(config.port, 4000);
    }

    #[test]
    fn test_cli_beats_env() {
        let cli_args = CliArgs {
            port: Some(7000),
            data_dir: Some(PathBuf::from("./docs")),
            log_level: Some("debug".to_string()),
            ..Default::default()
        };
        let config = load(
            cli_args,
            &[("KBASE_PORT", "9000"), ("KBASE_DATA_DIR", "/srv/kb")],
        )
        .unwrap();

        assert_eq!(config.port, 7000);
        assert_eq!(config.data_dir, Some(PathBuf::from("./docs")));
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_invalid_env_values() {
        assert!(load(CliArgs::default(), &[("KBASE_PORT", "eighty")]).is_err());
        assert!(load(CliArgs::default(), &[("KBASE_MAX_REQUEST_SIZE", "-1")]).is_err());
    }
}

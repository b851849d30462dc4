use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use std::path::PathBuf;

/// CLI arguments for kbase-server
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub port: Option<u16>,
    pub host: Option<String>,
    pub data_dir: Option<PathBuf>,
    pub config_file: Option<PathBuf>,
    pub max_request_size: Option<usize>,
    pub log_level: Option<String>,
}

impl CliArgs {
    /// Parse command line arguments
    pub fn parse() -> Self {
        let matches = command().get_matches();

        if matches.get_flag("help_env") {
            Self::print_env_help();
            std::process::exit(0);
        }

        Self::from_matches(&matches)
    }

    fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            port: matches.get_one::<u16>("port").copied(),
            host: matches.get_one::<String>("host").cloned(),
            data_dir: matches.get_one::<PathBuf>("data_dir").cloned(),
            config_file: matches.get_one::<PathBuf>("config").cloned(),
            max_request_size: matches.get_one::<usize>("max_request_size").copied(),
            log_level: matches.get_one::<String>("log_level").cloned(),
        }
    }

    /// Print comprehensive environment variable help
    fn print_env_help() {
        println!("Kbase Server Environment Variables");
        println!("==================================");
        println!();
        println!("Server Configuration:");
        println!("  KBASE_PORT                    - Server port (default: 8080)");
        println!("  PORT                          - Server port, used when KBASE_PORT is unset");
        println!("  KBASE_HOST                    - Bind address (default: 0.0.0.0)");
        println!("  KBASE_DATA_DIR                - Knowledge document directory");
        println!(
            "  KBASE_MAX_REQUEST_SIZE        - Max request body size in bytes (default: 1MB)"
        );
        println!();
        println!("Knowledge Base (nested keys use a double underscore):");
        println!("  KBASE_DATA__EXTENSION         - Document file extension (default: json)");
        println!("  KBASE_SEARCH__DEFAULT_LIMIT   - Results per search (default: 10)");
        println!("  KBASE_SEARCH__MAX_LIMIT       - Largest accepted limit (default: 20)");
        println!("  KBASE_SEARCH__SCORING__*      - Ranking weights, e.g. ..._NAME_BONUS");
        println!("  KBASE_LOGGING__FORMAT         - default, json, compact or pretty");
        println!();
        println!("Logging:");
        println!(
            "  RUST_LOG                      - Logging filter (error, warn, info, debug, trace)"
        );
        println!();
        println!("Note: Command line arguments take precedence over environment variables.");
        println!("Use --help for CLI argument documentation.");
    }
}

/// Build the clap command
fn command() -> Command {
    Command::new("kbase-server")
        .version(kbase::VERSION)
        .about("HTTP API server for the Kbase knowledge base")
        .long_about(
            r#"Kbase Server indexes a directory of JSON knowledge documents at start-up
and serves keyword search and lookup by semantic identifier ({type}/{name}).

The server can be configured through command line arguments, a configuration
file or environment variables. Command line arguments take precedence over
environment variables.

Examples:
  kbase-server --port 8080 --data-dir ./knowledge/data
  kbase-server --config kbase.toml --log-level debug"#,
        )
        .arg(
            Arg::new("port")
                .short('p')
                .long("port")
                .value_name("PORT")
                .help("Port to listen on")
                .long_help(
                    "Port number for the HTTP server to listen on.
Environment variables: KBASE_PORT, PORT",
                )
                .value_hint(ValueHint::Other)
                .value_parser(clap::value_parser!(u16)),
        )
        .arg(
            Arg::new("host")
                .long("host")
                .value_name("ADDRESS")
                .help("Address to bind to")
                .long_help(
                    "Interface address for the HTTP server.
Environment variable: KBASE_HOST",
                )
                .value_hint(ValueHint::Hostname),
        )
        .arg(
            Arg::new("data_dir")
                .short('d')
                .long("data-dir")
                .value_name("DIR")
                .help("Knowledge document directory")
                .long_help(
                    "Root directory of the knowledge documents. Each subdirectory
name is a document type. Overrides data.dir from the configuration file.
Environment variable: KBASE_DATA_DIR",
                )
                .value_hint(ValueHint::DirPath)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file path")
                .long_help(
                    "Path to a TOML, YAML or JSON configuration file. Without it,
kbase.toml, kbase.yaml, kbase.yml or kbase.json in the working directory is used
when present.",
                )
                .value_hint(ValueHint::FilePath)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("max_request_size")
                .long("max-request-size")
                .value_name("BYTES")
                .help("Maximum request body size in bytes")
                .long_help(
                    "Maximum size allowed for HTTP request bodies.
Larger requests will be rejected.
Environment variable: KBASE_MAX_REQUEST_SIZE",
                )
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("log_level")
                .long("log-level")
                .value_name("LEVEL")
                .help("Logging level")
                .long_help(
                    "Set the logging level. Valid values: error, warn, info, debug, trace
RUST_LOG takes precedence when set.",
                )
                .value_parser(["error", "warn", "info", "debug", "trace"]),
        )
        .arg(
            Arg::new("help_env")
                .long("help-env")
                .help("Show all environment variables")
                .long_help(
                    "Display a list of all environment variables that can be used
to configure the server.",
                )
                .action(ArgAction::SetTrue),
        )
}

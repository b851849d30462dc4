use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use kbase::{
    config::{ConfigLoader, KbConfig},
    core::KnowledgeBase,
    logging,
};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use kbase_server::cli::CliArgs;
use kbase_server::config::ServerConfig;
use kbase_server::{AppState, create_router};

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();
    let server_config = ServerConfig::from_cli_and_env(cli_args)?;

    let (kb_config, config_source) = load_kb_config(&server_config)?;
    let _log_guard = logging::init(&kb_config.logging)?;

    info!("Starting Kbase server v{}", kbase::VERSION);
    if let Some(config_file) = &config_source {
        info!("Loaded configuration from {}", config_file.display());
    }

    let knowledge = KnowledgeBase::from_config(&kb_config).with_context(|| {
        format!(
            "Failed to index knowledge documents in {}",
            kb_config.data.dir.display()
        )
    })?;
    info!("Loaded {} knowledge items", knowledge.len());

    let app_state = Arc::new(AppState::new(knowledge, server_config.clone()));

    let app = create_router(app_state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind((server_config.host.as_str(), server_config.port))
        .await
        .with_context(|| {
            format!(
                "Failed to bind {}:{}",
                server_config.host, server_config.port
            )
        })?;

    let addr = listener.local_addr()?;
    info!("Server listening on {}", addr);
    info!("API documentation available at http://{}/api-docs/openapi.json", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Layer defaults, configuration file, environment and command line overrides
fn load_kb_config(server_config: &ServerConfig) -> Result<(KbConfig, Option<PathBuf>)> {
    let mut loader = ConfigLoader::new();
    match &server_config.config_file {
        Some(config_file) => {
            loader.load_file(config_file)?;
        }
        None => {
            loader.load_default_files();
        }
    }

    let mut config = loader
        .load_env()
        .with_data_dir(server_config.data_dir.as_ref())
        .extract()?;

    if let Some(level) = &server_config.log_level {
        config.logging.level = logging::parse_log_level(level)?;
    }

    Ok((config, loader.source().map(PathBuf::from)))
}

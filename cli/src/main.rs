//! CLI entrypoint for munch
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use munch_application::{CreateGameUseCase, GameDispatcher, GameHub, RestaurantProvider};
use munch_domain::SessionRegistry;
use munch_infrastructure::{ConfigLoader, FileConfig, YelpRestaurantProvider};
use munch_presentation::{AppState, Cli, build_router, serve};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting munch");

    let config: FileConfig = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")?
    };
    config.validate().context("Invalid configuration")?;

    let params = config.game_params();
    let yelp = config.provider.to_yelp_config();

    // === Dependency Injection ===
    let provider: Arc<dyn RestaurantProvider> = Arc::new(YelpRestaurantProvider::new(&yelp)?);
    let registry = SessionRegistry::new().with_code_length(params.join_code_length);
    let dispatcher = GameDispatcher::new(provider.clone(), registry);

    let cancel = CancellationToken::new();
    let (hub, hub_task) = GameHub::spawn(dispatcher, &params, cancel.clone());
    let create_game =
        CreateGameUseCase::new(provider.clone(), hub.clone()).with_search_limit(params.search_limit);
    let router = build_router(AppState::new(hub, create_game, provider));

    let addr = SocketAddr::new(
        cli.bind.unwrap_or(config.server.bind),
        cli.port.unwrap_or(config.server.port),
    );
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    let shutdown = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Shutting down");
        }
        shutdown.cancel();
    });

    serve(listener, router, cancel).await?;
    hub_task.await?;

    Ok(())
}

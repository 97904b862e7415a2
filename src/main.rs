//! Intent router binary.
//!
//! # Architecture Overview
//!
//! ```text
//!                       ┌───────────────────────────────────────────────┐
//!                       │                 INTENT ROUTER                  │
//!                       │                                                │
//!   Client Request      │  ┌─────────┐   ┌───────────┐   ┌────────────┐ │
//!   ────────────────────┼─▶│  http   │──▶│  tenant   │──▶│  routing   │ │
//!                       │  │ server  │   │ resolver  │   │ classifier │ │
//!                       │  └─────────┘   └───────────┘   └─────┬──────┘ │
//!                       │                                      │        │
//!                       │                                      ▼        │
//!   Client Response     │                              ┌────────────┐  │
//!   ◀───────────────────┼──────────────────────────────│ RouteInfo  │  │
//!                       │                              │ consumers  │  │
//!                       │                              └────────────┘  │
//!                       │                                                │
//!                       │  ┌──────────────────────────────────────────┐ │
//!                       │  │          Cross-Cutting Concerns           │ │
//!                       │  │  ┌────────┐ ┌─────────────┐ ┌──────────┐ │ │
//!                       │  │  │ config │ │observability│ │lifecycle │ │ │
//!                       │  │  └────────┘ └─────────────┘ └──────────┘ │ │
//!                       │  └──────────────────────────────────────────┘ │
//!                       └───────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use arc_swap::ArcSwap;
use clap::Parser;
use tokio::net::TcpListener;
use tokio::sync::mpsc;

use intent_router::config::loader::load_config;
use intent_router::config::watcher::ConfigWatcher;
use intent_router::config::RouterConfig;
use intent_router::http::{ActiveState, HttpServer};
use intent_router::lifecycle::signals::spawn_signal_listener;
use intent_router::lifecycle::Shutdown;
use intent_router::observability::{logging, metrics};

/// Route classification front for a multi-tenant structured API.
#[derive(Debug, Parser)]
#[command(name = "intent-router", version)]
struct Args {
    /// Path to the TOML configuration file. Defaults apply when absent.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit.
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => RouterConfig::default(),
    };

    if args.print_config {
        println!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    logging::init_logging(&config.observability);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        collections = config.routing.collections.len(),
        entity_types = config
            .routing
            .entity_types
            .as_ref()
            .map(|t| t.len())
            .unwrap_or(0),
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => {
                tracing::error!(
                    metrics_address = %config.observability.metrics_address,
                    "Failed to parse metrics address"
                );
            }
        }
    }

    let active = Arc::new(ArcSwap::from_pointee(ActiveState::from_config(&config)));
    let shutdown = Arc::new(Shutdown::new());

    let (reload_tx, mut reload_rx) = mpsc::unbounded_channel();
    spawn_signal_listener(shutdown.clone(), reload_tx);

    // Keep the watcher guard alive for the process lifetime.
    let mut _watcher_guard = None;
    if let Some(path) = args.config.clone() {
        let (watcher, mut update_rx) = ConfigWatcher::new(&path);
        _watcher_guard = Some(watcher.run()?);

        let watched = active.clone();
        tokio::spawn(async move {
            while let Some(new_config) = update_rx.recv().await {
                watched.store(Arc::new(ActiveState::from_config(&new_config)));
                tracing::info!("Configuration reloaded");
            }
        });

        let reloaded = active.clone();
        tokio::spawn(async move {
            while reload_rx.recv().await.is_some() {
                match load_config(&path) {
                    Ok(new_config) => {
                        reloaded.store(Arc::new(ActiveState::from_config(&new_config)));
                        tracing::info!("Configuration reloaded on SIGHUP");
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to reload config: {}. Keeping current configuration.",
                            e
                        );
                    }
                }
            }
        });
    } else {
        tokio::spawn(async move {
            while reload_rx.recv().await.is_some() {
                tracing::warn!("Reload requested but no config file is in use");
            }
        });
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let server = HttpServer::new(&config, active);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

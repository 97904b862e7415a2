//! OS signal handling.
//!
//! # Responsibilities
//! - Register signal handlers (SIGTERM, SIGINT, SIGHUP)
//! - Translate signals to internal events (shutdown, reload)
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)
//! - SIGHUP triggers config reload, not shutdown
//! - On non-unix targets only Ctrl-C is wired

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::lifecycle::Shutdown;

/// Spawn the signal listener task. Shutdown signals trigger the coordinator;
/// SIGHUP sends a reload event.
pub fn spawn_signal_listener(shutdown: Arc<Shutdown>, reload_tx: mpsc::UnboundedSender<()>) {
    tokio::spawn(async move {
        #[cfg(unix)]
        {
            use tokio::signal::unix::{signal, SignalKind};

            let mut sigterm = match signal(SignalKind::terminate()) {
                Ok(s) => s,
                Err(e) => {
                    tracing::error!(error = %e, "Failed to register SIGTERM handler");
                    return;
                }
            };
            let mut sighup = match signal(SignalKind::hangup()) {
                Ok(s) => s,
                Err(e) => {
                    tracing::error!(error = %e, "Failed to register SIGHUP handler");
                    return;
                }
            };

            loop {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {
                        tracing::info!("SIGINT received, shutting down");
                        shutdown.trigger();
                        break;
                    }
                    _ = sigterm.recv() => {
                        tracing::info!("SIGTERM received, shutting down");
                        shutdown.trigger();
                        break;
                    }
                    _ = sighup.recv() => {
                        tracing::info!("SIGHUP received, reloading configuration");
                        let _ = reload_tx.send(());
                    }
                }
            }
        }

        #[cfg(not(unix))]
        {
            let _ = reload_tx;
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("Ctrl-C received, shutting down");
                shutdown.trigger();
            }
        }
    });
}

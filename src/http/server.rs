//! HTTP server setup.
//!
//! # Responsibilities
//! - Create Axum Router with the catch-all classification handler
//! - Wire up middleware (tracing, timeout, body limit, request ID, route info)
//! - Serve with graceful shutdown
//!
//! # Design Decisions
//! - A single catch-all route: URL interpretation belongs to the classifier,
//!   not to the framework's route table
//! - The demo handler is the reference downstream consumer: it reads
//!   RouteInfo from extensions and never re-parses the raw path
//! - Compiled resolver + table live behind one ArcSwap so a reload swaps
//!   both atomically

use std::sync::Arc;
use std::time::Duration;

use arc_swap::ArcSwap;
use axum::{
    extract::Extension,
    http::StatusCode,
    middleware,
    response::{IntoResponse, Json},
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{limit::RequestBodyLimitLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::RouterConfig;
use crate::http::middleware::route_info_middleware;
use crate::http::request::uuid_request_id_layers;
use crate::routing::{Route, RouteInfo, RoutingTable};
use crate::tenant::TenantResolver;

/// The compiled, immutable classification state: everything a request needs
/// that can change on config reload.
#[derive(Debug)]
pub struct ActiveState {
    pub resolver: TenantResolver,
    pub table: RoutingTable,
}

impl ActiveState {
    pub fn from_config(config: &RouterConfig) -> Self {
        Self {
            resolver: TenantResolver::from_config(&config.tenancy),
            table: RoutingTable::compile(&config.routing),
        }
    }
}

/// Application state injected into handlers and middleware.
#[derive(Clone)]
pub struct AppState {
    /// Swapped wholesale on config reload, never mutated in place.
    pub active: Arc<ArcSwap<ActiveState>>,
}

/// HTTP server for the intent router.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration and compiled
    /// state handle.
    pub fn new(config: &RouterConfig, active: Arc<ArcSwap<ActiveState>>) -> Self {
        let state = AppState { active };
        let router = Self::build_router(config, state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &RouterConfig, state: AppState) -> Router {
        let (set_request_id, propagate_request_id) = uuid_request_id_layers();

        Router::new()
            .route("/{*path}", any(describe_route))
            .route("/", any(describe_route))
            .layer(middleware::from_fn_with_state(
                state.clone(),
                route_info_middleware,
            ))
            .with_state(state)
            .layer(
                // Outermost first: the request ID exists before the trace
                // span opens, and propagates back out on the response.
                ServiceBuilder::new()
                    .layer(set_request_id)
                    .layer(TraceLayer::new_for_http())
                    .layer(propagate_request_id)
                    .layer(RequestBodyLimitLayer::new(config.listener.max_body_bytes))
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.listener.request_timeout_secs,
                    ))),
            )
    }

    /// Run the server, accepting connections on the given listener until
    /// the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// The router, for driving the stack in tests without a socket.
    pub fn into_router(self) -> Router {
        self.router
    }
}

/// Reference downstream consumer: renders the classification as JSON.
///
/// `Unknown` maps to 404 here because nothing downstream can bind it; every
/// other kind answers 200. Real handlers dispatch on the same value.
async fn describe_route(Extension(info): Extension<Arc<RouteInfo>>) -> impl IntoResponse {
    let status = match info.route {
        Route::Unknown { .. } => StatusCode::NOT_FOUND,
        _ => StatusCode::OK,
    };
    (status, Json((*info).clone()))
}

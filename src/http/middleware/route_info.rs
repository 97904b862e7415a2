//! Route classification middleware.
//!
//! # Responsibilities
//! - Run the tenant resolver, strip the tenant prefix from the path
//! - Run the route classifier on what remains
//! - Publish the resulting RouteInfo into request extensions
//!
//! # Design Decisions
//! - Pure enrichment: produces no response of its own and always continues
//!   to the next stage of the pipeline
//! - Runs exactly once, before any handler that inspects the route kind
//! - Loads one snapshot of the compiled state per request; a concurrent
//!   config swap never changes classification mid-request

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};

use crate::http::server::AppState;
use crate::observability::metrics;
use crate::routing::RouteInfo;

pub async fn route_info_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let snapshot = state.active.load_full();
    let raw_path = req.uri().path().to_string();

    let (tenant, remaining) = snapshot.resolver.resolve(req.headers(), &raw_path);
    let route = snapshot.table.classify(&remaining);

    metrics::record_classification(route.kind_label(), tenant.source.label());
    tracing::debug!(
        path = %raw_path,
        stripped = %remaining,
        kind = route.kind_label(),
        tenant = tenant.tenant.as_deref().unwrap_or("-"),
        tenant_source = tenant.source.label(),
        "request classified"
    );

    req.extensions_mut().insert(Arc::new(RouteInfo {
        tenant,
        route,
        path: remaining,
    }));

    next.run(req).await
}

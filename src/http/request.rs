//! Request identity.
//!
//! # Responsibilities
//! - Generate a unique request ID as early as possible
//! - Propagate the ID onto the response for client-side correlation
//!
//! # Design Decisions
//! - Incoming x-request-id headers are trusted and preserved; an ID is only
//!   generated when the client sent none

use axum::http::{HeaderName, HeaderValue, Request};
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use uuid::Uuid;

/// Header carrying the request correlation ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Generates UUIDv4 request IDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidRequestId;

impl MakeRequestId for UuidRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// The set/propagate layer pair for the server's layer stack.
pub fn uuid_request_id_layers() -> (
    SetRequestIdLayer<UuidRequestId>,
    PropagateRequestIdLayer,
) {
    let header = HeaderName::from_static(X_REQUEST_ID);
    (
        SetRequestIdLayer::new(header.clone(), UuidRequestId),
        PropagateRequestIdLayer::new(header),
    )
}

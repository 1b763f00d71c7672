//! Correlation header propagation.
//!
//! # Responsibilities
//! - Copy the caller's `RequestUuid` header onto the response before any
//!   forwarding work happens
//! - Let a downstream-provided `RequestUuid` win over the copied value
//!
//! # Design Decisions
//! - Applied per-route, so rejected and failed requests carry the id too;
//!   the router fallback (unmatched path) stays bare
//! - The value is copied even when absent: callers then see an empty header

use axum::body::Body;
use axum::http::{HeaderName, HeaderValue, Request};
use axum::middleware::Next;
use axum::response::Response;

/// Correlation header relayed between caller and downstream.
pub static REQUEST_UUID: HeaderName = HeaderName::from_static("requestuuid");

/// Stage the inbound `RequestUuid` on the response, unless the handler
/// already produced one (i.e. the downstream answered with its own).
pub async fn propagate_request_uuid(request: Request<Body>, next: Next) -> Response {
    let inbound = request
        .headers()
        .get(&REQUEST_UUID)
        .cloned()
        .unwrap_or_else(|| HeaderValue::from_static(""));

    let mut response = next.run(request).await;
    if !response.headers().contains_key(&REQUEST_UUID) {
        response.headers_mut().insert(&REQUEST_UUID, inbound);
    }
    response
}

//! Request forwarding.
//!
//! # Responsibilities
//! - Turn a matched inbound request into the downstream call
//! - Relay downstream status, headers, and body back verbatim
//! - Surface downstream failures as 502 instead of swallowing them
//!
//! # Design Decisions
//! - One handler serves every route; the table supplies what varies
//!   (downstream path template, Accept header)
//! - The inbound body is moved across unbuffered
//! - Inbound headers stay behind; only `Accept` is set on the wire out

use axum::body::Body;
use axum::extract::{MatchedPath, RawPathParams, State};
use axum::http::{header, Method, Request, StatusCode, Uri};
use axum::response::{IntoResponse, Response};

use crate::error::GatewayError;
use crate::http::server::AppState;
use crate::routing::table::{self, RouteSpec, CUSTOMER_ID};

/// Shared handler for every route in the table.
///
/// Customer ids must be decimal-digit sequences; the route patterns cannot
/// express that constraint, so violations are rejected here with the same
/// bare 404 an unmatched path gets, before any downstream work.
pub async fn forward_handler(
    State(state): State<AppState>,
    matched: MatchedPath,
    params: RawPathParams,
    request: Request<Body>,
) -> Result<Response, GatewayError> {
    let spec = table::route_for_pattern(matched.as_str()).ok_or_else(|| {
        GatewayError::Internal(format!("no route spec for pattern {}", matched.as_str()))
    })?;

    for (name, value) in params.iter() {
        if name == CUSTOMER_ID && !table::is_valid_customer_id(value) {
            tracing::debug!(
                route = spec.name,
                customer_id = value,
                "rejecting non-numeric customer id"
            );
            return Ok(StatusCode::NOT_FOUND.into_response());
        }
    }

    let path = table::downstream_path(spec, params.iter());
    forward(&state, spec, &path, request).await
}

/// Execute the downstream call and relay its response verbatim.
async fn forward(
    state: &AppState,
    spec: &RouteSpec,
    path: &str,
    request: Request<Body>,
) -> Result<Response, GatewayError> {
    let url = format!("http://{}{}", state.config.service.authority(), path);
    let uri: Uri = url.parse().map_err(|err: axum::http::uri::InvalidUri| {
        GatewayError::InvalidDownstreamUrl {
            url: url.clone(),
            reason: err.to_string(),
        }
    })?;

    let mut builder = Request::builder().method(Method::POST).uri(uri);
    if spec.accept_json {
        builder = builder.header(header::ACCEPT, "application/json");
    }
    let outbound = builder
        .body(request.into_body())
        .map_err(|err| GatewayError::Internal(err.to_string()))?;

    tracing::debug!(route = spec.name, url = %url, "forwarding request");

    let downstream = state.client.request(outbound).await.map_err(|err| {
        tracing::warn!(route = spec.name, url = %url, error = %err, "downstream call failed");
        GatewayError::Downstream(err.to_string())
    })?;

    let (parts, body) = downstream.into_parts();
    tracing::debug!(route = spec.name, status = %parts.status, "relaying downstream response");

    Ok(Response::from_parts(parts, Body::new(body)))
}

//! Gateway error type and the uniform error-to-JSON translation.
//!
//! # Responsibilities
//! - Represent every failure a forwarding handler can report
//! - Convert a failure into the wire format: matching status code,
//!   `Content-Type: application/json`, body = JSON-encoded message string
//!
//! # Design Decisions
//! - The `IntoResponse` impl is the terminal error sink; nothing propagates
//!   past it
//! - Downstream construction and transport failures map to 502 Bad Gateway
//! - Unclassified failures collapse to 500 with their description

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Failure reported by a forwarding handler. Terminal for the request.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The downstream URL could not be assembled into a valid URI.
    /// Happens when a path parameter carries characters the URI grammar
    /// rejects; parameters are substituted verbatim.
    #[error("invalid downstream url {url}: {reason}")]
    InvalidDownstreamUrl { url: String, reason: String },

    /// The downstream call failed at the transport level.
    #[error("downstream call failed: {0}")]
    Downstream(String),

    /// A failure with an explicit status code and message.
    #[error("http error {code}: {message}")]
    Http { code: StatusCode, message: String },

    /// Anything else, reported as an internal error.
    #[error("{0}")]
    Internal(String),
}

impl GatewayError {
    /// Status code written for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::InvalidDownstreamUrl { .. } | GatewayError::Downstream(_) => {
                StatusCode::BAD_GATEWAY
            }
            GatewayError::Http { code, .. } => *code,
            GatewayError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message carried in the JSON body.
    fn message(&self) -> String {
        match self {
            GatewayError::Http { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::error!(status = %status, error = %self, "request failed");
        (status, Json(self.message())).into_response()
    }
}

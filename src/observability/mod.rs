//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via `tracing`; the request id and route name flow
//!   through every forwarding event
//! - Log level configurable via environment (`RUST_LOG`) or config

pub mod logging;

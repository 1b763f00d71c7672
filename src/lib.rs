//! FRX Forwarding Gateway
//!
//! A thin HTTP gateway in front of the FRX fraud-detection service, built
//! with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌────────────────────────────────────────────────┐
//!                      │               FORWARDING GATEWAY               │
//!                      │                                                │
//!     Client Request   │  ┌─────────┐    ┌──────────┐    ┌──────────┐  │
//!     ─────────────────┼─▶│  http   │───▶│ routing  │───▶│ forward  │──┼──▶ FRX service
//!                      │  │ server  │    │  table   │    │ handler  │  │    (host:port)
//!                      │  └─────────┘    └──────────┘    └────┬─────┘  │
//!                      │                                      │        │
//!     Client Response  │  ┌─────────────┐                     │        │
//!     ◀────────────────┼──│ correlation │◀────────────────────┘        │
//!                      │  │  + errors   │   verbatim status/headers/   │
//!                      │  └─────────────┘   body relay                  │
//!                      │                                                │
//!                      │  ┌──────────────────────────────────────────┐ │
//!                      │  │           Cross-Cutting Concerns          │ │
//!                      │  │  ┌────────┐ ┌─────────────┐ ┌──────────┐ │ │
//!                      │  │  │ config │ │observability│ │lifecycle │ │ │
//!                      │  │  └────────┘ └─────────────┘ └──────────┘ │ │
//!                      │  └──────────────────────────────────────────┘ │
//!                      └────────────────────────────────────────────────┘
//! ```
//!
//! Every route is POST and maps one-to-one onto the same path on the
//! downstream service. The gateway keeps no state between requests.

// Core subsystems
pub mod config;
pub mod error;
pub mod http;
pub mod routing;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::GatewayConfig;
pub use error::GatewayError;
pub use http::GatewayServer;
pub use lifecycle::Shutdown;

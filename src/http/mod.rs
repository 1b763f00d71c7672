//! HTTP subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, dispatch)
//!     → correlation.rs (stage caller's RequestUuid on the response)
//!     → forward.rs (build downstream call, relay status/headers/body)
//!     → Send to client
//! ```

pub mod correlation;
pub mod forward;
pub mod server;

pub use correlation::REQUEST_UUID;
pub use server::{AppState, GatewayServer};

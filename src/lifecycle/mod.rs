//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Validate → Init tracing → Bind listener → Serve
//!
//! Shutdown:
//!     SIGTERM/SIGINT (signals.rs)
//!     → Shutdown coordinator (shutdown.rs)
//!     → serve loop stops accepting and drains
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - One broadcast channel carries the shutdown event to the serve loop

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;

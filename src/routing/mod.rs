//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route Table (compile time):
//!     RouteSpec[] — inbound pattern, downstream template, Accept flag
//!     → registered on the Axum router at startup
//!
//! Incoming Request:
//!     matched pattern → RouteSpec lookup
//!     → path parameters substituted into the template
//!     → forwarding handler
//! ```
//!
//! # Design Decisions
//! - One static table drives both router construction and forwarding; the
//!   five routes share a single parameterized handler
//! - Immutable after construction (thread-safe without locks)
//! - No regex in the hot path; the digit constraint is a plain byte scan

pub mod table;

pub use table::{RouteSpec, ROUTES};

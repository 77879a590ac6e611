//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     RouteBinding[] (declared order)
//!     → RouteTable::new (name uniqueness check)
//!     → Freeze as immutable RouteTable
//!     → http/server.rs derives the axum Router from it
//!
//! Per request:
//!     path → table.lookup → first matching binding or explicit NoMatch (404)
//! ```
//!
//! # Design Decisions
//! - Table built once at startup, immutable at runtime
//! - No regex, only exact and prefix patterns (O(n) scan)
//! - Deterministic: same path always resolves to the same binding
//! - First match wins, in declared order

pub mod matcher;
pub mod table;

pub use matcher::RoutePattern;
pub use table::{RouteAction, RouteBinding, RouteTable, RouteTableError};

//! In-memory data store.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     Store::new → empty concurrent maps → shared via Arc in AppState
//!
//! Request handling:
//!     api/admin handlers → typed reads/writes on the maps
//! ```
//!
//! # Design Decisions
//! - DashMap per entity: lock-free reads, sharded writes
//! - Snapshot reads (`all_*`) clone out sorted vectors so handlers never
//!   hold map guards across awaits
//! - Ids are UUID v4 strings assigned by the store

pub mod memory;
pub mod models;

pub use memory::Store;
pub use models::{GameJam, Profile, User};

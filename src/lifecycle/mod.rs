//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Validate → Build route table → Bind listener → Serve
//!
//! Shutdown (shutdown.rs):
//!     Ctrl+C or internal trigger → Stop accepting → Drain → Exit
//! ```
//!
//! # Design Decisions
//! - The route table and config are built once, before serving, and
//!   never change for the process lifetime
//! - Shutdown is a broadcast: every long-running task subscribes

pub mod shutdown;

pub use shutdown::Shutdown;

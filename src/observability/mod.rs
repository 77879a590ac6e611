//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Structured logging via tracing, level from config, RUST_LOG wins
//! - Request ID flows through all subsystems
//! - Metrics are cheap (atomic increments), labeled by route binding

pub mod logging;
pub mod metrics;

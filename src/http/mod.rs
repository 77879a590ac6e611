//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, router derived from the route table)
//!     → request.rs (request ID layer)
//!     → admin / api mounts, /api/ redirect
//!     → response.rs (404 fallback)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{propagate_request_id_layer, set_request_id_layer, X_REQUEST_ID};
pub use server::{AppState, HttpServer};

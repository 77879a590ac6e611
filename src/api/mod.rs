//! API v1 route module, mounted at `/api/v1/` by the route table.
//!
//! # Data Flow
//! ```text
//! /api/v1/gamejams[...]  → gamejams.rs (list / get / upsert)
//! /api/v1/users[...]     → users.rs (list / detail / by-username)
//!     → store reads/writes
//!     → Json responses, ApiError on failure
//! ```
//!
//! # Design Decisions
//! - Cursor pagination: fetch limit+1 rows, the extra row's id becomes
//!   the next cursor and is not returned
//! - Time-frame filtering is evaluated against "now" at request time
//! - Errors are typed and map themselves onto HTTP responses

pub mod error;
pub mod gamejams;
pub mod users;

use axum::routing::get;
use axum::Router;

use crate::http::server::AppState;

pub use error::ApiError;

/// Assemble the v1 router. Paths are relative to the `/api/v1` mount.
pub fn v1_router(state: AppState) -> Router {
    Router::new()
        .route("/gamejams", get(gamejams::list).post(gamejams::upsert))
        .route("/gamejams/{id}", get(gamejams::get_by_id))
        .route("/users", get(users::list))
        .route("/users/{id}", get(users::get_by_id))
        .route("/users/by-username/{username}", get(users::get_by_username))
        .with_state(state)
}

//! Response helpers.
//!
//! # Responsibilities
//! - Turn "no binding matched" into the not-found response
//!
//! # Design Decisions
//! - Plain-text body; unmatched paths carry no API error envelope

use axum::http::StatusCode;
use axum::response::IntoResponse;

/// Fallback handler for paths no route table binding matches.
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "No matching route found")
}

//! Admin site, mounted at `/admin/` by the route table.
//!
//! Opaque to the routing layer: the table only knows the mount point.
//! Bearer-token auth guards every route. A disabled admin site keeps the
//! mount registered (table order stays deterministic) but serves 404s.

pub mod auth;
pub mod handlers;

use axum::http::StatusCode;
use axum::routing::{any, delete, get};
use axum::{middleware, Router};

use self::auth::admin_auth_middleware;
use self::handlers::*;
use crate::http::server::AppState;

async fn disabled() -> StatusCode {
    StatusCode::NOT_FOUND
}

/// Assemble the admin router. Paths are relative to the `/admin` mount.
pub fn admin_router(state: AppState) -> Router {
    if !state.config.admin.enabled {
        return Router::new()
            .route("/", any(disabled))
            .route("/{*path}", any(disabled));
    }

    Router::new()
        .route("/status", get(get_status))
        .route("/gamejams", get(list_game_jams))
        .route("/gamejams/{id}", delete(delete_game_jam))
        .route("/users", get(list_users))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            admin_auth_middleware,
        ))
        .with_state(state)
}

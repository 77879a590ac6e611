use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::http::server::AppState;
use crate::store::{GameJam, User};

#[derive(Serialize)]
pub struct SystemStatus {
    pub version: &'static str,
    pub status: &'static str,
    pub game_jams: usize,
    pub users: usize,
}

pub async fn get_status(State(state): State<AppState>) -> Json<SystemStatus> {
    Json(SystemStatus {
        version: env!("CARGO_PKG_VERSION"),
        status: "operational",
        game_jams: state.store.all_game_jams().len(),
        users: state.store.all_users().len(),
    })
}

/// Full unpaginated listing for data management.
pub async fn list_game_jams(State(state): State<AppState>) -> Json<Vec<GameJam>> {
    Json(state.store.all_game_jams())
}

/// Full unpaginated listing, including profile-less users the public
/// API hides.
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.store.all_users())
}

pub async fn delete_game_jam(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> StatusCode {
    if state.store.remove_game_jam(&id) {
        tracing::info!(game_jam_id = %id, "Game jam deleted via admin site");
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}

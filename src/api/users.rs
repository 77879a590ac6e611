//! User endpoints.
//!
//! # Responsibilities
//! - List users that have a profile, with search and cursor pagination
//! - User detail by id or by profile username
//! - Derive the `@handle` and bucket a user's jams by time frame

use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::gamejams::TimeFrame;
use crate::http::server::AppState;
use crate::store::{GameJam, User};

const DEFAULT_LIMIT: usize = 50;
const MAX_LIMIT: usize = 100;

/// Listing view of a user: the record plus its derived handle.
#[derive(Debug, Serialize)]
pub struct UserSummary {
    #[serde(flatten)]
    pub user: User,
    pub username: String,
    pub handle: String,
}

impl UserSummary {
    /// Build the summary. Returns `None` for profile-less users, which
    /// are hidden from public listings.
    fn from_user(user: User) -> Option<Self> {
        let username = user.profile.as_ref()?.username.clone();
        let handle = format!("@{username}");
        Some(Self {
            user,
            username,
            handle,
        })
    }
}

/// Detail view: summary plus the user's jams split by time frame.
#[derive(Debug, Serialize)]
pub struct UserDetail {
    #[serde(flatten)]
    pub summary: UserSummary,
    pub current_game_jams: Vec<GameJam>,
    pub previous_game_jams: Vec<GameJam>,
    pub upcoming_game_jams: Vec<GameJam>,
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub limit: Option<usize>,
    pub cursor: Option<String>,
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub users: Vec<UserSummary>,
    pub next_cursor: Option<String>,
    pub count: usize,
}

/// `GET /api/v1/users`
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ListResponse>, ApiError> {
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT);
    if limit == 0 || limit > MAX_LIMIT {
        return Err(ApiError::InvalidQuery(format!(
            "limit must be between 1 and {MAX_LIMIT}"
        )));
    }

    let q = query.q.unwrap_or_default().to_lowercase();
    let matching: Vec<User> = state
        .store
        .all_users()
        .into_iter()
        .filter(|user| user.profile.is_some())
        .filter(|user| user.name.to_lowercase().contains(&q))
        .collect();
    let count = matching.len();

    let start = match query.cursor.as_deref() {
        Some(cursor) => match matching.iter().position(|u| u.id == cursor) {
            Some(pos) => pos,
            None => matching.len(),
        },
        None => 0,
    };

    let mut page: Vec<User> = matching.into_iter().skip(start).take(limit + 1).collect();
    let next_cursor = if page.len() > limit {
        page.pop().map(|user| user.id)
    } else {
        None
    };

    let users = page.into_iter().filter_map(UserSummary::from_user).collect();
    Ok(Json(ListResponse {
        users,
        next_cursor,
        count,
    }))
}

/// `GET /api/v1/users/{id}`
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UserDetail>, ApiError> {
    let user = state.store.user(&id).ok_or(ApiError::NotFound("user"))?;
    detail(&state, user).map(Json)
}

/// `GET /api/v1/users/by-username/{username}`
pub async fn get_by_username(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<UserDetail>, ApiError> {
    let user = state
        .store
        .user_by_username(&username)
        .ok_or(ApiError::NotFound("user"))?;
    detail(&state, user).map(Json)
}

fn detail(state: &AppState, user: User) -> Result<UserDetail, ApiError> {
    let jams: Vec<GameJam> = user
        .jam_ids
        .iter()
        .filter_map(|id| state.store.game_jam(id))
        .collect();

    let now = Utc::now();
    let in_frame = |frame: TimeFrame| -> Vec<GameJam> {
        jams.iter()
            .filter(|jam| frame.contains(jam.start_date, jam.end_date, now))
            .cloned()
            .collect()
    };

    let summary = UserSummary::from_user(user).ok_or(ApiError::NotFound("user"))?;
    Ok(UserDetail {
        summary,
        current_game_jams: in_frame(TimeFrame::Current),
        previous_game_jams: in_frame(TimeFrame::Previous),
        upcoming_game_jams: in_frame(TimeFrame::Upcoming),
    })
}

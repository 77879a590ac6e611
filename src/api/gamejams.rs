//! Game jam endpoints.
//!
//! # Responsibilities
//! - List jams with search, time-frame filter and cursor pagination
//! - Fetch a single jam by id
//! - Create-or-update a jam on behalf of a host user

use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::http::server::AppState;
use crate::store::{GameJam, Store};

const DEFAULT_LIMIT: usize = 50;
const MAX_LIMIT: usize = 1000;

/// Which jams to include relative to the current moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeFrame {
    #[default]
    All,
    Current,
    Previous,
    Upcoming,
}

impl TimeFrame {
    /// Whether a jam with the given window falls into this frame at `now`.
    pub fn contains(&self, start: DateTime<Utc>, end: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        match self {
            TimeFrame::All => true,
            TimeFrame::Current => start <= now && end >= now,
            TimeFrame::Previous => start <= now && end <= now,
            TimeFrame::Upcoming => start >= now && end >= now,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub limit: Option<usize>,
    pub cursor: Option<String>,
    pub q: Option<String>,
    #[serde(default)]
    pub time_frame: TimeFrame,
}

#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub game_jams: Vec<GameJam>,
    pub next_cursor: Option<String>,
    pub count: usize,
}

/// `GET /api/v1/gamejams`
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

    let now = Utc::now();
    let q = query.q.unwrap_or_default();
    let filtered: Vec<GameJam> = state
        .store
        .all_game_jams()
        .into_iter()
        .filter(|jam| jam.name.contains(&q))
        .filter(|jam| query.time_frame.contains(jam.start_date, jam.end_date, now))
        .collect();
    let count = filtered.len();

    let (game_jams, next_cursor) = paginate(filtered, query.cursor.as_deref(), limit);
    Ok(Json(ListResponse {
        game_jams,
        next_cursor,
        count,
    }))
}

/// `GET /api/v1/gamejams/{id}`
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<GameJam>, ApiError> {
    state
        .store
        .game_jam(&id)
        .map(Json)
        .ok_or(ApiError::NotFound("game jam"))
}

#[derive(Debug, Deserialize)]
pub struct UpsertGameJam {
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub host_user_id: String,
}

/// `POST /api/v1/gamejams`
///
/// Creates the jam when `id` is absent or unknown, updates it otherwise.
/// The host user is connected to the jam in both cases.
pub async fn upsert(
    State(state): State<AppState>,
    Json(input): Json<UpsertGameJam>,
) -> Result<Json<GameJam>, ApiError> {
    let existing = input.id.as_deref().and_then(|id| state.store.game_jam(id));

    let mut jam = match existing {
        Some(jam) => jam,
        None => GameJam {
            id: input.id.unwrap_or_else(Store::new_id),
            name: String::new(),
            description: String::new(),
            start_date: input.start_date,
            end_date: input.end_date,
            host_user_ids: vec![],
        },
    };

    jam.name = input.name;
    jam.description = input.description.unwrap_or_default();
    jam.start_date = input.start_date;
    jam.end_date = input.end_date;
    if !jam.host_user_ids.contains(&input.host_user_id) {
        jam.host_user_ids.push(input.host_user_id);
    }

    state.store.put_game_jam(jam.clone());
    Ok(Json(jam))
}

/// Cursor pagination over an already-ordered listing.
///
/// The cursor is the id of the first row of the page. One extra row is
/// taken; its id becomes the next cursor and the row itself is dropped.
pub(crate) fn paginate(
    jams: Vec<GameJam>,
    cursor: Option<&str>,
    limit: usize,
) -> (Vec<GameJam>, Option<String>) {
    let start = match cursor {
        Some(cursor) => match jams.iter().position(|j| j.id == cursor) {
            Some(pos) => pos,
            // Unknown cursor yields an empty page rather than restarting.
            None => jams.len(),
        },
        None => 0,
    };

    let mut page: Vec<GameJam> = jams.into_iter().skip(start).take(limit + 1).collect();
    let next_cursor = if page.len() > limit {
        page.pop().map(|jam| jam.id)
    } else {
        None
    };
    (page, next_cursor)
}

//! Entity definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A game jam event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameJam {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name.
    pub name: String,

    /// Free-form description, may be empty.
    pub description: String,

    /// When the jam opens.
    pub start_date: DateTime<Utc>,

    /// When the jam closes.
    pub end_date: DateTime<Utc>,

    /// Users hosting the jam.
    pub host_user_ids: Vec<String>,
}

/// Public profile attached to a user account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Unique username, the basis of the `@handle`.
    pub username: String,

    /// Short bio, may be empty.
    #[serde(default)]
    pub bio: String,
}

/// A platform user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name.
    pub name: String,

    /// Self-reported skill level.
    #[serde(default)]
    pub skill_level: Option<String>,

    /// Profile; users without one are hidden from public listings.
    #[serde(default)]
    pub profile: Option<Profile>,

    /// Jams this user participates in.
    #[serde(default)]
    pub jam_ids: Vec<String>,
}

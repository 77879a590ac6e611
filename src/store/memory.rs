//! Concurrent in-memory store backing the API and admin handlers.

use dashmap::DashMap;
use uuid::Uuid;

use crate::store::models::{GameJam, User};

/// Process-wide entity store. Cheap to share behind an `Arc`.
#[derive(Debug, Default)]
pub struct Store {
    game_jams: DashMap<String, GameJam>,
    users: DashMap<String, User>,
}

impl Store {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a fresh entity id.
    pub fn new_id() -> String {
        Uuid::new_v4().to_string()
    }

    /// Insert or replace a game jam.
    pub fn put_game_jam(&self, jam: GameJam) {
        self.game_jams.insert(jam.id.clone(), jam);
    }

    /// Fetch a game jam by id.
    pub fn game_jam(&self, id: &str) -> Option<GameJam> {
        self.game_jams.get(id).map(|j| j.value().clone())
    }

    /// Remove a game jam; returns true if it existed.
    pub fn remove_game_jam(&self, id: &str) -> bool {
        self.game_jams.remove(id).is_some()
    }

    /// Snapshot of all jams, ordered by start date descending then id
    /// ascending. This is the canonical listing order.
    pub fn all_game_jams(&self) -> Vec<GameJam> {
        let mut jams: Vec<GameJam> = self.game_jams.iter().map(|j| j.value().clone()).collect();
        jams.sort_by(|a, b| {
            b.start_date
                .cmp(&a.start_date)
                .then_with(|| a.id.cmp(&b.id))
        });
        jams
    }

    /// Insert or replace a user.
    pub fn put_user(&self, user: User) {
        self.users.insert(user.id.clone(), user);
    }

    /// Fetch a user by id.
    pub fn user(&self, id: &str) -> Option<User> {
        self.users.get(id).map(|u| u.value().clone())
    }

    /// Fetch a user by profile username.
    pub fn user_by_username(&self, username: &str) -> Option<User> {
        self.users
            .iter()
            .find(|u| {
                u.profile
                    .as_ref()
                    .map(|p| p.username == username)
                    .unwrap_or(false)
            })
            .map(|u| u.value().clone())
    }

    /// Snapshot of all users, ordered by id ascending.
    pub fn all_users(&self) -> Vec<User> {
        let mut users: Vec<User> = self.users.iter().map(|u| u.value().clone()).collect();
        users.sort_by(|a, b| a.id.cmp(&b.id));
        users
    }
}

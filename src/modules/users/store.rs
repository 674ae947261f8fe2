use std::collections::HashMap;
use std::collections::hash_map::Entry;

use tokio::sync::RwLock;

use super::model::User;

/// Concurrent in-memory user store keyed by user id.
///
/// Updates go through a compare-and-swap: the caller passes back the record
/// it read, and the write only lands if the stored record still matches.
#[derive(Debug, Default)]
pub struct UserStore {
    users: RwLock<HashMap<u32, User>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            users: RwLock::new(users.into_iter().map(|user| (user.id, user)).collect()),
        }
    }

    /// Inserts `user` unless a record with the same id already exists.
    /// Returns whether the insert happened.
    pub async fn try_insert(&self, user: User) -> bool {
        let mut users = self.users.write().await;
        match users.entry(user.id) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(user);
                true
            }
        }
    }

    pub async fn get(&self, id: u32) -> Option<User> {
        self.users.read().await.get(&id).cloned()
    }

    /// All users ordered by id.
    pub async fn list(&self) -> Vec<User> {
        let mut users: Vec<User> = self.users.read().await.values().cloned().collect();
        users.sort_unstable_by_key(|user| user.id);
        users
    }

    /// Replaces the record at `id` only if it still equals `expected`.
    /// Returns whether the swap happened.
    pub async fn try_update(&self, id: u32, expected: &User, updated: User) -> bool {
        let mut users = self.users.write().await;
        match users.get(&id) {
            Some(current) if current == expected => {
                users.insert(id, updated);
                true
            }
            _ => false,
        }
    }

    pub async fn remove(&self, id: u32) -> Option<User> {
        self.users.write().await.remove(&id)
    }
}

//! In-process user store.
//!
//! Records live in an ordered map keyed by id. Ids come from a dedicated
//! monotonic sequence, so they grow with insertion order and are never
//! reused after a delete.

use std::collections::BTreeMap;

use crate::models::{User, UserId};

#[derive(Debug, Clone)]
pub struct UserStore {
    users: BTreeMap<UserId, User>,
    next_id: UserId,
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStore {
    /// Empty store; the first id handed out is 1.
    pub fn new() -> Self {
        Self {
            users: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Store holding the three records a fresh process starts with.
    pub fn seeded() -> Self {
        Self::from_users([
            User::new(1, "Jorge", Some(true)),
            User::new(2, "Alberto", Some(false)),
            User::new(3, "Juan", Some(false)),
        ])
    }

    /// Build a store from existing records. The sequence resumes after the
    /// largest id.
    pub fn from_users(users: impl IntoIterator<Item = User>) -> Self {
        let users: BTreeMap<UserId, User> = users.into_iter().map(|u| (u.id, u)).collect();
        let next_id = users.keys().next_back().map_or(1, |max| max + 1);
        Self { users, next_id }
    }

    /// Records in id (and therefore insertion) order.
    pub fn iter(&self) -> impl Iterator<Item = &User> {
        self.users.values()
    }

    pub fn get(&self, id: UserId) -> Option<&User> {
        self.users.get(&id)
    }

    pub fn get_mut(&mut self, id: UserId) -> Option<&mut User> {
        self.users.get_mut(&id)
    }

    /// Allocate the next id and append a record.
    pub fn insert_new(&mut self, name: String, is_admin: Option<bool>) -> User {
        let id = self.next_id;
        self.next_id += 1;

        let user = User::new(id, name, is_admin);
        self.users.insert(id, user.clone());
        user
    }

    pub fn remove(&mut self, id: UserId) -> Option<User> {
        self.users.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

// In-memory storage
// Test double honoring the whole-collection load/save contract

use std::sync::Mutex;

use crate::model::User;

use super::Storage;

/// Keeps the collection in a mutex-guarded vector. Substituted for the file
/// store in handler tests.
#[derive(Default)]
pub struct MemoryStore {
    users: Mutex<Vec<User>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStore {
    fn load(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }

    fn save(&self, users: &[User]) {
        *self.users.lock().unwrap() = users.to_vec();
    }
}

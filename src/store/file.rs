// File-backed storage
// One pretty-printed JSON array in a single file, read and rewritten in full

use std::fs;
use std::path::PathBuf;

use crate::logger;
use crate::model::User;

use super::Storage;

/// Stores the collection in one JSON file.
///
/// No locking and no atomic rename: a crash mid-write can corrupt the file,
/// and concurrent writers can race.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Storage for FileStore {
    fn load(&self) -> Vec<User> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                logger::log_storage_read_error(&format!("{}: {e}", self.path.display()));
                return Vec::new();
            }
        };

        match serde_json::from_str(&content) {
            Ok(users) => users,
            Err(e) => {
                logger::log_storage_read_error(&format!("{}: {e}", self.path.display()));
                Vec::new()
            }
        }
    }

    fn save(&self, users: &[User]) {
        let content = match serde_json::to_string_pretty(users) {
            Ok(content) => content,
            Err(e) => {
                logger::log_storage_write_error(&e.to_string());
                return;
            }
        };

        if let Err(e) = fs::write(&self.path, content) {
            logger::log_storage_write_error(&format!("{}: {e}", self.path.display()));
        }
    }
}

// Storage module entry point
// Whole-collection persistence over a single backing file

mod file;
#[cfg(test)]
mod memory;

pub use file::FileStore;
#[cfg(test)]
pub use memory::MemoryStore;

use std::sync::Arc;

use crate::model::User;

/// Whole-collection persistence contract.
///
/// Implementations read the entire collection and rewrite it in full; there
/// is no per-record access and no locking across the read-modify-write
/// cycle, so concurrent mutations can lose updates (last writer wins).
pub trait Storage: Send + Sync {
    /// Read the entire collection. Any failure degrades to an empty
    /// collection; no error reaches the caller.
    fn load(&self) -> Vec<User>;

    /// Overwrite the entire collection. Failures are logged and dropped; the
    /// caller never sees them.
    fn save(&self, users: &[User]);
}

pub type SharedStorage = Arc<dyn Storage>;

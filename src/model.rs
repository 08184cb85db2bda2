// User entity module
// The sole persisted record type

use serde::{Deserialize, Serialize};
use serde_json::Number;
use uuid::Uuid;

/// A stored user record.
///
/// `age` is kept as a raw JSON number so that an integer written by a client
/// round-trips as an integer on disk and on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub age: Number,
    pub hobbies: Vec<String>,
}

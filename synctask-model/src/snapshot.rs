//! Snapshot codec for the two persisted board records.
//!
//! The board persists as two independent JSON documents: the signed-in user
//! and the full task collection. Encoding is pretty-printed so the records
//! stay hand-inspectable; decoding accepts compact and pretty forms alike.

use crate::task::Task;
use crate::user::User;

/// Error type for snapshot encode/decode operations.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// Serialization or deserialization failed.
    #[error("snapshot serialization error: {0}")]
    Serialization(String),
}

/// Encodes the user record as pretty-printed JSON.
///
/// # Errors
///
/// Returns `SnapshotError::Serialization` if the user cannot be serialized.
pub fn encode_user(user: &User) -> Result<String, SnapshotError> {
    serde_json::to_string_pretty(user).map_err(|e| SnapshotError::Serialization(e.to_string()))
}

/// Decodes a user record from JSON.
///
/// # Errors
///
/// Returns `SnapshotError::Serialization` if the text is not a valid user record.
pub fn decode_user(json: &str) -> Result<User, SnapshotError> {
    serde_json::from_str(json).map_err(|e| SnapshotError::Serialization(e.to_string()))
}

/// Encodes the task collection record as pretty-printed JSON.
///
/// The collection order is meaningful (newest-created first) and is
/// preserved verbatim.
///
/// # Errors
///
/// Returns `SnapshotError::Serialization` if the tasks cannot be serialized.
pub fn encode_tasks(tasks: &[Task]) -> Result<String, SnapshotError> {
    serde_json::to_string_pretty(tasks).map_err(|e| SnapshotError::Serialization(e.to_string()))
}

/// Decodes a task collection record from JSON.
///
/// # Errors
///
/// Returns `SnapshotError::Serialization` if the text is not a valid task array.
pub fn decode_tasks(json: &str) -> Result<Vec<Task>, SnapshotError> {
    serde_json::from_str(json).map_err(|e| SnapshotError::Serialization(e.to_string()))
}

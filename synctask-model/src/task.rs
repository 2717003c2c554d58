//! Task types and lifecycle states for the shared board.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::user::UserId;

/// Unique identifier for a task.
///
/// Opaque string for snapshot compatibility; the two board-seeded tasks use
/// the fixed ids `"1"` and `"2"`, user-created tasks get UUID v7 ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Creates a new time-ordered task identifier (UUID v7).
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TaskId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for TaskId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle state of a task in the shared pool.
///
/// The only transitions are `Available -> Claimed` (claim),
/// `Claimed -> Available` (release), and `Claimed -> Completed` (complete).
/// `Completed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    /// In the shared pool, free to claim.
    Available,
    /// Claimed by a user and in progress.
    Claimed,
    /// Finished.
    Completed,
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Available => write!(f, "available"),
            Self::Claimed => write!(f, "claimed"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

/// A task on the shared board.
///
/// `claimed_by` and `claimed_by_name` are set together while the task is
/// claimed and absent otherwise. `claimed_by_name` caches the claimer's
/// display name at the moment of the claim and is never refreshed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique task identifier.
    pub id: TaskId,
    /// Title as entered, no normalization applied.
    pub title: String,
    /// Free-text detail, may be empty.
    pub description: String,
    /// Current lifecycle state.
    pub status: TaskStatus,
    /// Creator's user id, or the system sentinel for seeded tasks.
    pub created_by: UserId,
    /// Id of the claiming user while the task is claimed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claimed_by: Option<UserId>,
    /// Display name of the claiming user at claim time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claimed_by_name: Option<String>,
    /// Creation time in milliseconds since the Unix epoch.
    pub created_at: u64,
}

impl Task {
    /// Creates an available task with a fresh id and no claimer.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        created_by: UserId,
        created_at: u64,
    ) -> Self {
        Self {
            id: TaskId::generate(),
            title: title.into(),
            description: description.into(),
            status: TaskStatus::Available,
            created_by,
            claimed_by: None,
            claimed_by_name: None,
            created_at,
        }
    }

    /// Whether this task is currently claimed by the given user.
    #[must_use]
    pub fn is_claimed_by(&self, user: &UserId) -> bool {
        self.status == TaskStatus::Claimed && self.claimed_by.as_ref() == Some(user)
    }
}

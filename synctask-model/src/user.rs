//! User identity types for the `SyncTask` board.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Sentinel id recorded as the creator of board-seeded tasks.
const SYSTEM_ID: &str = "system";

/// Unique identifier for a user.
///
/// Stored as an opaque string so snapshots written by earlier deployments
/// (which used plain counter ids) keep loading; fresh ids are UUID v7 for
/// time-ordering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Creates a new time-ordered user identifier (UUID v7).
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// The sentinel identity recorded as creator of seeded tasks.
    #[must_use]
    pub fn system() -> Self {
        Self(SYSTEM_ID.to_string())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The signed-in user of the board.
///
/// Created at sign-in, mutated only by point awards on task completion,
/// discarded at sign-out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Opaque unique identifier, generated at sign-in.
    pub id: UserId,
    /// Full display name as entered on the sign-in form.
    pub name: String,
    /// Email address as entered on the sign-in form.
    pub email: String,
    /// Points earned by completing tasks.
    pub points: u32,
    /// Whether the create-task affordance is offered to this user.
    pub can_create_tasks: bool,
}

impl User {
    /// Creates a user with a fresh id, zero points, and task creation enabled.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: UserId::generate(),
            name: name.into(),
            email: email.into(),
            points: 0,
            can_create_tasks: true,
        }
    }

    /// First word of the display name, used in the header greeting.
    #[must_use]
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

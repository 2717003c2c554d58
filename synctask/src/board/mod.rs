//! Board state and mutation operations for the `SyncTask` client.
//!
//! [`TaskBoard`] owns the signed-in user, the ordered task collection, and
//! the active tab; every state change goes through a method on it. Read-side
//! projections (tab filters, the leaderboard) live in [`views`].

pub mod manager;
pub mod views;

pub use manager::{TaskBoard, seed_tasks};
pub use views::{LeaderboardEntry, ViewTab, filter_tasks, leaderboard};

use thiserror::Error;

/// Errors that can occur during board operations.
///
/// The interactive shell treats all of these as no-ops and only logs them;
/// they exist so the board can enforce its own preconditions and tests can
/// assert on the exact refusal.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    /// No user is signed in.
    #[error("no user is signed in")]
    NotSignedIn,
    /// Task title is empty or whitespace-only.
    #[error("task title cannot be empty")]
    TitleEmpty,
    /// The signed-in user lacks the task creation capability.
    #[error("user is not allowed to create tasks")]
    CreateNotAllowed,
    /// Task with the given ID was not found.
    #[error("task not found: {0}")]
    TaskNotFound(String),
    /// The task is already claimed.
    #[error("task is already claimed: {0}")]
    AlreadyClaimed(String),
    /// The task has already been completed.
    #[error("task is already completed: {0}")]
    AlreadyCompleted(String),
    /// The task is not currently claimed.
    #[error("task is not claimed: {0}")]
    NotClaimed(String),
    /// The task is claimed by a different user.
    #[error("task is claimed by another user: {0}")]
    NotClaimant(String),
}

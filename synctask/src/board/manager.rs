//! The task board: session state, task collection, and mutations.
//!
//! `TaskBoard` is the single owner of mutable application state. All
//! mutations run synchronously on the caller's thread; after a successful
//! mutation the caller persists the board through a
//! [`SnapshotStore`](crate::store::SnapshotStore).

use std::time::{SystemTime, UNIX_EPOCH};

use synctask_model::task::{Task, TaskId, TaskStatus};
use synctask_model::user::{User, UserId};

use super::BoardError;
use super::views::{self, LeaderboardEntry, ViewTab};
use crate::store::SnapshotStore;

/// Age of the coffee-station seed task at first run (one hour, in ms).
const SEED_COFFEE_AGE_MS: u64 = 3_600_000;
/// Age of the roadmap seed task at first run (two hours, in ms).
const SEED_ROADMAP_AGE_MS: u64 = 7_200_000;

/// Builds the two starter tasks shown on a fresh board.
///
/// Their ids are fixed so a reseeded board looks identical, and their
/// timestamps are backdated relative to `now_ms` so the list reads as an
/// already-active board.
#[must_use]
pub fn seed_tasks(now_ms: u64) -> Vec<Task> {
    vec![
        Task {
            id: TaskId::from("1"),
            title: "Restock the coffee station".to_string(),
            description: "Make sure there are enough beans and milk.".to_string(),
            status: TaskStatus::Available,
            created_by: UserId::system(),
            claimed_by: None,
            claimed_by_name: None,
            created_at: now_ms.saturating_sub(SEED_COFFEE_AGE_MS),
        },
        Task {
            id: TaskId::from("2"),
            title: "Update project roadmap".to_string(),
            description: "Review Q4 goals and adjust timelines.".to_string(),
            status: TaskStatus::Available,
            created_by: UserId::system(),
            claimed_by: None,
            claimed_by_name: None,
            created_at: now_ms.saturating_sub(SEED_ROADMAP_AGE_MS),
        },
    ]
}

/// The board's mutable state: current user, task collection, active tab.
///
/// The task collection keeps insertion order, newest-created first; views
/// never reorder it.
pub struct TaskBoard {
    current_user: Option<User>,
    tasks: Vec<Task>,
    active_tab: ViewTab,
}

impl TaskBoard {
    /// Creates an empty board with nobody signed in.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current_user: None,
            tasks: Vec::new(),
            active_tab: ViewTab::Available,
        }
    }

    /// Creates a signed-out board holding the given tasks.
    #[must_use]
    pub const fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            current_user: None,
            tasks,
            active_tab: ViewTab::Available,
        }
    }

    /// Rebuilds a board from the persisted snapshot records.
    ///
    /// An unreadable user record starts the session signed out; a missing
    /// or unreadable task record seeds the starter tasks. Either way the
    /// session comes up usable.
    pub fn restore(store: &dyn SnapshotStore) -> Self {
        let current_user = match store.load_user() {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!(error = %e, "user record unreadable, starting signed out");
                None
            }
        };
        let tasks = match store.load_tasks() {
            Ok(Some(tasks)) => tasks,
            Ok(None) => {
                tracing::info!("no task record found, seeding the board");
                seed_tasks(Self::now_ms())
            }
            Err(e) => {
                tracing::warn!(error = %e, "task record unreadable, seeding the board");
                seed_tasks(Self::now_ms())
            }
        };
        Self {
            current_user,
            tasks,
            active_tab: ViewTab::Available,
        }
    }

    /// Returns the current timestamp in milliseconds since epoch.
    fn now_ms() -> u64 {
        u64::try_from(
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_millis(),
        )
        .unwrap_or(u64::MAX)
    }

    /// The signed-in user, if any.
    #[must_use]
    pub const fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    /// The full task collection in board order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// The active view tab.
    #[must_use]
    pub const fn active_tab(&self) -> ViewTab {
        self.active_tab
    }

    /// Switches the active view tab.
    pub const fn set_active_tab(&mut self, tab: ViewTab) {
        self.active_tab = tab;
    }

    /// Tasks visible on the active tab, in board order.
    #[must_use]
    pub fn visible_tasks(&self) -> Vec<&Task> {
        views::filter_tasks(&self.tasks, self.active_tab, self.current_user.as_ref())
    }

    /// Leaderboard standings including the current user, sorted by points.
    #[must_use]
    pub fn leaderboard(&self) -> Vec<LeaderboardEntry> {
        views::leaderboard(self.current_user.as_ref())
    }

    /// Signs in a new user, replacing any previous session.
    ///
    /// Always mints a fresh identity with zero points; the task collection
    /// is untouched, so claims recorded under an earlier identity survive
    /// as claimed-by-someone-else.
    pub fn sign_in(&mut self, name: &str, email: &str) -> &User {
        self.current_user.insert(User::new(name, email))
    }

    /// Signs out, discarding the current user. Tasks are kept.
    pub fn sign_out(&mut self) {
        self.current_user = None;
    }

    /// Creates a new available task at the front of the collection.
    ///
    /// The title is stored as entered; only the emptiness check trims.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NotSignedIn`] with nobody signed in,
    /// [`BoardError::CreateNotAllowed`] if the user lacks the capability,
    /// or [`BoardError::TitleEmpty`] for an empty or whitespace-only title.
    pub fn create_task(&mut self, title: &str) -> Result<&Task, BoardError> {
        let creator = self.signed_in()?;
        if !creator.can_create_tasks {
            return Err(BoardError::CreateNotAllowed);
        }
        if title.trim().is_empty() {
            return Err(BoardError::TitleEmpty);
        }

        let task = Task::new(title, "", creator.id.clone(), Self::now_ms());
        self.tasks.insert(0, task);
        Ok(&self.tasks[0])
    }

    /// Claims an available task for the signed-in user.
    ///
    /// On success the task records the claimer's id and display name, and
    /// the active tab switches to [`ViewTab::MyTasks`] so the task stays
    /// on screen.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NotSignedIn`], [`BoardError::TaskNotFound`],
    /// [`BoardError::AlreadyClaimed`], or [`BoardError::AlreadyCompleted`].
    pub fn claim_task(&mut self, id: &TaskId) -> Result<(), BoardError> {
        let claimer = self.signed_in()?.clone();
        let task = self.task_mut(id)?;
        match task.status {
            TaskStatus::Claimed => return Err(BoardError::AlreadyClaimed(id.to_string())),
            TaskStatus::Completed => return Err(BoardError::AlreadyCompleted(id.to_string())),
            TaskStatus::Available => {}
        }

        task.status = TaskStatus::Claimed;
        task.claimed_by = Some(claimer.id);
        task.claimed_by_name = Some(claimer.name);
        self.active_tab = ViewTab::MyTasks;
        Ok(())
    }

    /// Releases a task claimed by the signed-in user back to the pool.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NotSignedIn`], [`BoardError::TaskNotFound`],
    /// [`BoardError::NotClaimed`], [`BoardError::AlreadyCompleted`], or
    /// [`BoardError::NotClaimant`] if someone else holds the claim.
    pub fn release_task(&mut self, id: &TaskId) -> Result<(), BoardError> {
        let claimer_id = self.signed_in()?.id.clone();
        let task = self.task_mut(id)?;
        match task.status {
            TaskStatus::Available => return Err(BoardError::NotClaimed(id.to_string())),
            TaskStatus::Completed => return Err(BoardError::AlreadyCompleted(id.to_string())),
            TaskStatus::Claimed => {}
        }
        if task.claimed_by.as_ref() != Some(&claimer_id) {
            return Err(BoardError::NotClaimant(id.to_string()));
        }

        task.status = TaskStatus::Available;
        task.claimed_by = None;
        task.claimed_by_name = None;
        Ok(())
    }

    /// Completes a task claimed by the signed-in user and awards one point.
    ///
    /// The claim fields are cleared on completion; a completed task records
    /// no claimer and can never be claimed again.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NotSignedIn`], [`BoardError::TaskNotFound`],
    /// [`BoardError::NotClaimed`], [`BoardError::AlreadyCompleted`], or
    /// [`BoardError::NotClaimant`] if someone else holds the claim.
    pub fn complete_task(&mut self, id: &TaskId) -> Result<(), BoardError> {
        let claimer_id = self.signed_in()?.id.clone();
        let task = self.task_mut(id)?;
        match task.status {
            TaskStatus::Available => return Err(BoardError::NotClaimed(id.to_string())),
            TaskStatus::Completed => return Err(BoardError::AlreadyCompleted(id.to_string())),
            TaskStatus::Claimed => {}
        }
        if task.claimed_by.as_ref() != Some(&claimer_id) {
            return Err(BoardError::NotClaimant(id.to_string()));
        }

        task.status = TaskStatus::Completed;
        task.claimed_by = None;
        task.claimed_by_name = None;
        if let Some(user) = self.current_user.as_mut() {
            user.points += 1;
        }
        Ok(())
    }

    /// Returns a mutable reference to a task, or an error if not found.
    fn task_mut(&mut self, id: &TaskId) -> Result<&mut Task, BoardError> {
        self.tasks
            .iter_mut()
            .find(|t| &t.id == id)
            .ok_or_else(|| BoardError::TaskNotFound(id.to_string()))
    }

    /// The signed-in user, or [`BoardError::NotSignedIn`].
    fn signed_in(&self) -> Result<&User, BoardError> {
        self.current_user.as_ref().ok_or(BoardError::NotSignedIn)
    }
}

impl Default for TaskBoard {
    fn default() -> Self {
        Self::new()
    }
}

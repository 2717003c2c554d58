//! Read-side projections over the board: tab filters and the leaderboard.

use synctask_model::task::{Task, TaskStatus};
use synctask_model::user::User;

/// Fixed demo standings shown on the leaderboard alongside the current user.
const MOCK_LEADERBOARD: [(&str, u32); 3] = [("Alex Rivera", 12), ("Sam Chen", 8), ("Jordan Smith", 5)];

/// Which tab-scoped slice of the board is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewTab {
    /// The shared pool: every task not yet completed.
    #[default]
    Available,
    /// Tasks claimed by the current user.
    MyTasks,
    /// Finished tasks.
    Completed,
}

impl ViewTab {
    /// All tabs in display order.
    pub const ALL: [Self; 3] = [Self::Available, Self::MyTasks, Self::Completed];

    /// Tab caption as shown in the tab bar.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Available => "Tasks",
            Self::MyTasks => "My Tasks",
            Self::Completed => "Completed",
        }
    }

    /// The tab to the right, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Available => Self::MyTasks,
            Self::MyTasks => Self::Completed,
            Self::Completed => Self::Available,
        }
    }

    /// The tab to the left, wrapping around.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Available => Self::Completed,
            Self::MyTasks => Self::Available,
            Self::Completed => Self::MyTasks,
        }
    }
}

/// Selects the tasks visible on a tab, preserving board order.
///
/// The `Available` tab shows claimed tasks too, so the whole active pool
/// stays visible to everyone; `MyTasks` is empty while signed out.
#[must_use]
pub fn filter_tasks<'a>(
    tasks: &'a [Task],
    tab: ViewTab,
    current_user: Option<&User>,
) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|task| match tab {
            ViewTab::Available => {
                matches!(task.status, TaskStatus::Available | TaskStatus::Claimed)
            }
            ViewTab::MyTasks => current_user.is_some_and(|user| task.is_claimed_by(&user.id)),
            ViewTab::Completed => task.status == TaskStatus::Completed,
        })
        .collect()
}

/// One row of the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    /// Display name; the current user's row carries a `(You)` suffix.
    pub name: String,
    /// Points total.
    pub points: u32,
}

/// Builds the leaderboard standings, sorted by points descending.
///
/// The fixed demo entries always appear; the current user is appended with
/// a `(You)` marker before sorting. The sort is stable, so a points tie
/// places the user below the demo entry it ties with.
#[must_use]
pub fn leaderboard(current_user: Option<&User>) -> Vec<LeaderboardEntry> {
    let mut entries: Vec<LeaderboardEntry> = MOCK_LEADERBOARD
        .iter()
        .map(|&(name, points)| LeaderboardEntry {
            name: name.to_string(),
            points,
        })
        .collect();
    if let Some(user) = current_user {
        entries.push(LeaderboardEntry {
            name: format!("{} (You)", user.name),
            points: user.points,
        });
    }
    entries.sort_by(|a, b| b.points.cmp(&a.points));
    entries
}

//! Terminal UI rendering.

pub mod create_modal;
pub mod header;
pub mod leaderboard;
pub mod signin;
pub mod status_bar;
pub mod tabs;
pub mod task_list;
pub mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::app::{App, Overlay};

/// Main draw function for the entire UI.
pub fn draw(frame: &mut Frame, app: &App) {
    // The sign-in gate replaces the whole screen until a session starts.
    if app.is_signin_open() {
        signin::render(frame, frame.area(), app);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Length(2), // Tabs
            Constraint::Min(3),    // Task list
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    header::render(frame, chunks[0], app);
    tabs::render(frame, chunks[1], app);
    task_list::render(frame, chunks[2], app);
    status_bar::render(frame, chunks[3], app);

    match app.overlay {
        Overlay::CreateTask => create_modal::render(frame, app),
        Overlay::Leaderboard => leaderboard::render(frame, app),
        Overlay::None => {}
    }
}

/// Centered rectangle of at most `width` x `height` within `area`.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

/// Input text with a block cursor inserted at the cursor position.
///
/// The cursor index counts characters, so the insert point is mapped back
/// to a byte offset before splicing.
fn input_text(value: &str, cursor: usize, show_cursor: bool) -> String {
    let mut text = value.to_string();
    if show_cursor {
        let index = value
            .char_indices()
            .map(|(i, _)| i)
            .nth(cursor)
            .unwrap_or(value.len());
        text.insert(index, '█');
    }
    text
}

//! Status bar rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::theme;
use crate::app::{App, Overlay};

/// Render the status bar at the bottom of the screen.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let help_text = match app.overlay {
        Overlay::CreateTask => "Enter: create | Esc: cancel | ←→: move cursor",
        Overlay::Leaderboard => "Esc: close",
        Overlay::None => {
            "1-3: tabs | ↑↓/jk: navigate | c: claim | r: release | Space: complete | \
             n: new | l: leaderboard | s: sign out | q: quit"
        }
    };

    let status_line = Line::from(vec![
        Span::styled("SyncTask v0.1.0", theme::bold()),
        Span::raw(" | "),
        Span::styled(help_text, theme::dimmed()),
    ]);

    let paragraph = Paragraph::new(status_line).style(theme::status_bar_bg());
    frame.render_widget(paragraph, area);
}

//! Header rendering: app title, greeting, and points badge.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::theme;
use crate::app::App;

/// Render the header bar.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::normal());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(user) = app.board.current_user() else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(14)])
        .split(inner);

    let left = Paragraph::new(vec![
        Line::from(Span::styled(
            "SyncTask",
            theme::panel_title(theme::HEADER_TITLE),
        )),
        Line::from(Span::styled(
            format!("Hey, {}", user.first_name()),
            theme::normal(),
        )),
    ]);
    frame.render_widget(left, chunks[0]);

    let points = Paragraph::new(Line::from(Span::styled(
        format!("★ {} pts", user.points),
        theme::points_badge(),
    )))
    .alignment(Alignment::Right);
    frame.render_widget(points, chunks[1]);
}

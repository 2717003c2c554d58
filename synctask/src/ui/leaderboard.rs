//! Leaderboard modal rendering.

use ratatui::{
    Frame,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem},
};

use super::{centered_rect, theme};
use crate::app::App;

/// Render the leaderboard modal over the board.
pub fn render(frame: &mut Frame, app: &App) {
    let entries = app.board.leaderboard();

    let height = u16::try_from(entries.len())
        .unwrap_or(u16::MAX)
        .saturating_add(2);
    let area = centered_rect(40, height, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title("Leaderboard")
        .borders(Borders::ALL)
        .border_style(theme::panel_title(theme::LEADERBOARD_TITLE));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let items: Vec<ListItem> = entries
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            let is_you = entry.name.ends_with("(You)");
            let name_style = if is_you {
                theme::highlighted()
            } else {
                theme::normal()
            };

            let line = Line::from(vec![
                Span::styled(format!("{:>2}. ", idx + 1), theme::dimmed()),
                Span::styled(format!("{:<24}", entry.name), name_style),
                Span::styled(format!("{:>4} pts", entry.points), theme::points_badge()),
            ]);
            ListItem::new(line)
        })
        .collect();

    frame.render_widget(List::new(items), inner);
}

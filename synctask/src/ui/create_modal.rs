//! Create-task modal rendering.

use ratatui::{
    Frame,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::{centered_rect, input_text, theme};
use crate::app::App;

/// Render the create-task modal over the board.
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect(48, 5, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title("Create new task")
        .borders(Borders::ALL)
        .border_style(theme::panel_title(theme::CREATE_TITLE));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let input_line = if app.title_input.value().is_empty() {
        Line::from(vec![
            Span::styled("█", theme::normal()),
            Span::styled(" What needs to be done?", theme::dimmed()),
        ])
    } else {
        Line::from(Span::styled(
            input_text(app.title_input.value(), app.title_input.cursor(), true),
            theme::normal(),
        ))
    };

    let help_line = Line::from(Span::styled(
        "Enter: create | Esc: cancel",
        theme::dimmed(),
    ));

    let paragraph = Paragraph::new(vec![input_line, Line::default(), help_line]);
    frame.render_widget(paragraph, inner);
}

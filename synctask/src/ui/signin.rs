//! Sign-in gate rendering.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::{centered_rect, input_text, theme};
use crate::app::{App, InputField, SignInField};

/// Render the sign-in gate over the whole screen.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let box_area = centered_rect(46, 12, area);

    let block = Block::default()
        .title("SyncTask")
        .borders(Borders::ALL)
        .border_style(theme::panel_title(theme::HEADER_TITLE));
    let inner = block.inner(box_area);
    frame.render_widget(block, box_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Tagline
            Constraint::Length(3), // Name field
            Constraint::Length(3), // Email field
            Constraint::Min(1),    // Help
        ])
        .split(inner);

    let tagline = Paragraph::new(Line::from(Span::styled(
        "Minimal group productivity",
        theme::dimmed(),
    )));
    frame.render_widget(tagline, chunks[0]);

    render_field(
        frame,
        chunks[1],
        "Full name",
        &app.name_input,
        app.signin_focus == SignInField::Name,
    );
    render_field(
        frame,
        chunks[2],
        "Email",
        &app.email_input,
        app.signin_focus == SignInField::Email,
    );

    let help = Paragraph::new(Line::from(Span::styled(
        "Tab: switch field | Enter: sign in | Esc: quit",
        theme::dimmed(),
    )));
    frame.render_widget(help, chunks[3]);
}

/// Render one labelled input field of the form.
fn render_field(frame: &mut Frame, area: Rect, title: &str, input: &InputField, is_focused: bool) {
    let display_text = input_text(input.value(), input.cursor(), is_focused);

    let line = if display_text.is_empty() {
        Line::from(Span::styled("...", theme::dimmed()))
    } else {
        Line::from(Span::styled(display_text, theme::normal()))
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(if is_focused {
            theme::highlighted()
        } else {
            theme::normal()
        });

    let paragraph = Paragraph::new(line).block(block);
    frame.render_widget(paragraph, area);
}

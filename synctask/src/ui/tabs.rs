//! Tab strip rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Tabs,
};

use super::theme;
use crate::app::App;
use crate::board::ViewTab;

/// Render the tab strip under the header.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<Line> = ViewTab::ALL
        .iter()
        .map(|tab| Line::from(Span::styled(tab.label(), theme::normal())))
        .collect();

    let selected = ViewTab::ALL
        .iter()
        .position(|tab| *tab == app.board.active_tab())
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .highlight_style(theme::active_tab())
        .divider(Span::styled("|", theme::dimmed()));
    frame.render_widget(tabs, area);
}

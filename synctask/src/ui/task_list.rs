//! Task list rendering.

use std::fmt::Write as _;

use chrono::{Local, TimeZone};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use synctask_model::task::{Task, TaskStatus};
use synctask_model::user::User;

use super::theme;
use crate::app::{App, Overlay};

/// Render the task list for the active tab.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let tasks = app.board.visible_tasks();

    let block = Block::default()
        .title(app.board.active_tab().label())
        .borders(Borders::ALL)
        .border_style(theme::normal());

    if tasks.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No tasks here yet.",
            theme::dimmed(),
        )))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let list_has_focus = app.overlay == Overlay::None;
    let items: Vec<ListItem> = tasks
        .iter()
        .enumerate()
        .map(|(idx, task)| {
            let is_selected = idx == app.selected;

            let title_line = title_line(task, app.timestamp_format());
            let status_line = status_line(task, app.board.current_user());

            let style = if is_selected && list_has_focus {
                theme::selected()
            } else if is_selected {
                theme::highlighted()
            } else {
                theme::normal()
            };

            ListItem::new(vec![title_line, status_line]).style(style)
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}

/// First row of a task entry: checkbox, title, creation time.
fn title_line(task: &Task, timestamp_format: &str) -> Line<'static> {
    let checkbox = if task.status == TaskStatus::Completed {
        "[✓]"
    } else {
        "[ ]"
    };
    let title_style = if task.status == TaskStatus::Completed {
        theme::completed_title()
    } else {
        theme::normal()
    };

    Line::from(vec![
        Span::styled(checkbox.to_string(), theme::normal()),
        Span::raw(" "),
        Span::styled(task.title.clone(), title_style),
        Span::raw("  "),
        Span::styled(
            format_timestamp_ms(task.created_at, timestamp_format),
            theme::timestamp(),
        ),
    ])
}

/// Second row of a task entry: claim status.
fn status_line(task: &Task, current_user: Option<&User>) -> Line<'static> {
    let (text, style) = match task.status {
        TaskStatus::Available => ("Available to claim".to_string(), theme::dimmed()),
        TaskStatus::Claimed => {
            let mine = current_user.is_some_and(|user| task.is_claimed_by(&user.id));
            if mine {
                (
                    "You are working on this".to_string(),
                    theme::normal().fg(theme::CLAIMED),
                )
            } else {
                let name = task.claimed_by_name.as_deref().unwrap_or("someone");
                (format!("Claimed by {name}"), theme::dimmed())
            }
        }
        TaskStatus::Completed => ("Finished".to_string(), theme::normal().fg(theme::DONE)),
    };

    Line::from(vec![Span::raw("    "), Span::styled(text, style)])
}

/// Format an epoch-millisecond timestamp for display.
///
/// The format string comes from user configuration, so a bad specifier
/// falls back to a placeholder instead of failing the render.
fn format_timestamp_ms(ms: u64, format: &str) -> String {
    let secs = (ms / 1000).cast_signed();
    let nsecs = u32::try_from((ms % 1000) * 1_000_000).unwrap_or(0);
    let chrono::LocalResult::Single(dt) = Local.timestamp_opt(secs, nsecs) else {
        return "??:??".to_string();
    };
    let mut out = String::new();
    if write!(out, "{}", dt.format(format)).is_err() {
        return "??:??".to_string();
    }
    out
}

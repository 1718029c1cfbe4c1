//! Status bar component.

use std::time::Duration;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::controller::DisplayMode;
use crate::tui::app::SyncStatus;

/// Everything the status bar shows.
#[derive(Clone, Copy, Debug)]
pub struct Status {
    pub mode: DisplayMode,
    pub sync: SyncStatus,
    pub last_fetch_age: Option<Duration>,
    pub scene_version: u64,
}

/// Renders the status bar.
pub fn render(frame: &mut Frame, area: Rect, status: &Status) {
    let mode_color = match status.mode {
        DisplayMode::Open => Color::Green,
        DisplayMode::Closed => Color::Cyan,
    };

    let sync_color = match status.sync {
        SyncStatus::Synced => Color::Green,
        SyncStatus::Skipped => Color::Yellow,
    };

    let fetch_label = match (status.mode, status.last_fetch_age) {
        (DisplayMode::Closed, _) => " idle ".to_string(),
        (DisplayMode::Open, None) => " no quotes ".to_string(),
        (DisplayMode::Open, Some(age)) => format!(" quotes {}s ago ", age.as_secs()),
    };

    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", status.mode.label()),
            Style::default().fg(mode_color),
        ),
        Span::raw("│"),
        Span::styled(
            format!(" {} ", status.sync.label()),
            Style::default().fg(sync_color),
        ),
        Span::raw("│"),
        Span::styled(fetch_label, Style::default().fg(Color::White)),
        Span::raw("│"),
        Span::raw(format!(" v{} ", status.scene_version)),
    ]);

    let para = Paragraph::new(line).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(para, area);
}

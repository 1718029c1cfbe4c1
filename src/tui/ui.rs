//! Main UI rendering coordinator.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
};

use crate::clock::ClockSource;
use crate::controller::DisplayController;
use crate::quotes::QuoteProvider;
use crate::ticker::{DisplaySegment, SegmentColor};

use super::app::SyncStatus;
use super::components::{matrix, status_bar};

/// Rows taken by the bordered matrix panel.
const MATRIX_HEIGHT: u16 = 4;

/// Renders the matrix, status bar, and key help.
pub fn render<Q, C>(frame: &mut Frame, controller: &DisplayController<Q, C>, sync: SyncStatus)
where
    Q: QuoteProvider,
    C: ClockSource,
{
    let display_width = controller.config().display_width;
    let [matrix_area, status_area, help_area] = split(frame.area(), display_width);

    matrix::render(
        frame,
        matrix_area,
        controller.scene().segments(),
        display_width,
    );

    let status = status_bar::Status {
        mode: controller.mode(),
        sync,
        last_fetch_age: controller.last_fetch_age(),
        scene_version: controller.scene().version(),
    };
    status_bar::render(frame, status_area, &status);

    let help = Paragraph::new(Line::raw(" q quit")).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, help_area);
}

/// Renders a single static message on the matrix, used before the
/// controller exists.
pub fn render_splash(frame: &mut Frame, text: &str, color: SegmentColor, display_width: i32) {
    let [matrix_area, _, _] = split(frame.area(), display_width);
    let segment = DisplaySegment::new(text, color, 0);
    matrix::render(frame, matrix_area, &[segment], display_width);
}

/// Matrix panel on top, then one status row and one help row.
fn split(area: Rect, display_width: i32) -> [Rect; 3] {
    // Panel is as wide as the matrix plus its border.
    let panel_width = matrix::columns(display_width) as u16 + 2;

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(MATRIX_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    let panel = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(panel_width), Constraint::Min(0)])
        .split(rows[0]);

    [panel[0], rows[1], rows[2]]
}

//! The LED matrix row.
//!
//! Segments live in pixel space; the terminal has one cell per glyph. A
//! glyph starting at pixel `x` lands in cell `x.div_euclid(GLYPH_WIDTH)`, and
//! anything outside `0..display_width` is clipped.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthChar;

use crate::ticker::{DisplaySegment, GLYPH_WIDTH, SegmentColor};

/// One lit glyph on the matrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub color: SegmentColor,
}

/// Number of glyph cells needed to cover `display_width` pixels.
pub fn columns(display_width: i32) -> usize {
    (display_width.max(0) + GLYPH_WIDTH - 1).div_euclid(GLYPH_WIDTH) as usize
}

/// Rasterizes `segments` into a row of glyph cells. Later segments win
/// where segments overlap.
pub fn paint(segments: &[DisplaySegment], display_width: i32) -> Vec<Option<Cell>> {
    let mut row = vec![None; columns(display_width)];

    for segment in segments {
        let mut px = segment.x;
        for ch in segment.text.chars() {
            if px >= display_width {
                break;
            }
            let col = px.div_euclid(GLYPH_WIDTH);
            if col >= 0
                && let Some(slot) = row.get_mut(col as usize)
            {
                *slot = Some(Cell {
                    ch,
                    color: segment.color,
                });
            }
            px += ch.width().unwrap_or(0) as i32 * GLYPH_WIDTH;
        }
    }

    row
}

/// Terminal color for a matrix color.
pub fn terminal_color(color: SegmentColor) -> Color {
    let rgb = color.rgb();
    Color::Rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}

/// Renders the matrix panel.
pub fn render(frame: &mut Frame, area: Rect, segments: &[DisplaySegment], display_width: i32) {
    let cells = paint(segments, display_width);

    // Group runs of equal color into spans.
    let mut spans: Vec<Span> = Vec::new();
    let mut run = String::new();
    let mut run_color: Option<SegmentColor> = None;
    for cell in &cells {
        let (ch, color) = match cell {
            Some(cell) => (cell.ch, Some(cell.color)),
            None => (' ', None),
        };
        if color != run_color && !run.is_empty() {
            spans.push(styled_run(std::mem::take(&mut run), run_color));
        }
        run_color = color;
        run.push(ch);
    }
    if !run.is_empty() {
        spans.push(styled_run(run, run_color));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .style(Style::default().bg(Color::Black));
    let para = Paragraph::new(vec![Line::raw(""), Line::from(spans)]).block(block);
    frame.render_widget(para, area);
}

fn styled_run(text: String, color: Option<SegmentColor>) -> Span<'static> {
    match color {
        Some(color) => Span::styled(text, Style::default().fg(terminal_color(color))),
        None => Span::raw(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(row: &[Option<Cell>]) -> String {
        row.iter().map(|c| c.map_or(' ', |c| c.ch)).collect()
    }

    #[test]
    fn column_count_rounds_up() {
        assert_eq!(columns(64), 11);
        assert_eq!(columns(60), 10);
        assert_eq!(columns(0), 0);
    }

    #[test]
    fn segment_at_origin_is_invisible() {
        let segment = DisplaySegment::new("AAPL", SegmentColor::Green, 64);
        assert!(paint(&[segment], 64).iter().all(Option::is_none));
    }

    #[test]
    fn clips_left_edge() {
        // Two glyphs scrolled off the left border.
        let segment = DisplaySegment::new("ABCD", SegmentColor::Gray, -2 * GLYPH_WIDTH);
        let row = paint(&[segment], 64);
        assert_eq!(text_of(&row).trim_end(), "CD");
    }

    #[test]
    fn partial_pixel_offsets_snap_to_cells() {
        let segment = DisplaySegment::new("AB", SegmentColor::Red, 7);
        let row = paint(&[segment], 64);
        assert_eq!(text_of(&row), " AB        ");
        assert_eq!(row[1].map(|c| c.color), Some(SegmentColor::Red));
    }

    #[test]
    fn colors_map_to_rgb() {
        assert_eq!(terminal_color(SegmentColor::Blue), Color::Rgb(0x00, 0xA0, 0xFF));
        assert_eq!(terminal_color(SegmentColor::Gray), Color::Rgb(0x88, 0x88, 0x88));
    }
}

//! Drawable text segments.

use unicode_width::UnicodeWidthStr;

/// Pixel width of one glyph in the matrix font.
pub const GLYPH_WIDTH: i32 = 6;

/// Blank glyphs trailing every segment so neighbours never touch.
pub const SEGMENT_GAP_GLYPHS: i32 = 3;

/// The matrix palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SegmentColor {
    Green,
    Red,
    Gray,
    Blue,
}

impl SegmentColor {
    /// `0xRRGGBB` value sent to the panel.
    pub fn rgb(self) -> u32 {
        match self {
            SegmentColor::Green => 0x00FF00,
            SegmentColor::Red => 0xFF0000,
            SegmentColor::Gray => 0x888888,
            SegmentColor::Blue => 0x00A0FF,
        }
    }
}

/// One run of same-colored text on the strip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplaySegment {
    pub text: String,
    pub color: SegmentColor,
    /// Left edge in pixels; negative once scrolled past the left border.
    pub x: i32,
    /// Rendered width in pixels, including the trailing gap.
    pub width: i32,
}

impl DisplaySegment {
    /// A segment at `x` whose width is measured from `text`.
    pub fn new(text: impl Into<String>, color: SegmentColor, x: i32) -> Self {
        let text = text.into();
        let width = rendered_width(&text);
        Self {
            text,
            color,
            x,
            width,
        }
    }

    /// Right edge in pixels (exclusive).
    pub fn right(&self) -> i32 {
        self.x + self.width
    }
}

/// Pixel width of `text` followed by the segment gap.
pub fn rendered_width(text: &str) -> i32 {
    (text.width() as i32 + SEGMENT_GAP_GLYPHS) * GLYPH_WIDTH
}

/// Places `segments` edge to edge starting at `origin`, keeping their order.
pub fn layout(segments: &mut [DisplaySegment], origin: i32) {
    let mut x = origin;
    for segment in segments {
        segment.x = x;
        x += segment.width;
    }
}

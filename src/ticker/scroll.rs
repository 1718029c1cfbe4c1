//! Horizontal scrolling with seamless wraparound.

use super::segment::{DisplaySegment, layout};

/// Scrolls a strip of segments leftwards and restarts it once the trailing
/// segment has fully left the display.
#[derive(Clone, Copy, Debug)]
pub struct ScrollAnimator {
    origin: i32,
}

impl ScrollAnimator {
    /// `origin` is where the strip restarts, normally the display width.
    pub fn new(origin: i32) -> Self {
        Self { origin }
    }

    /// Advances every segment by `speed` pixels. Returns `true` if the strip
    /// wrapped back to the origin during this tick.
    pub fn tick(&self, segments: &mut [DisplaySegment], speed: i32) -> bool {
        for segment in segments.iter_mut() {
            segment.x -= speed;
        }

        match segments.last() {
            Some(last) if last.right() < 0 => {
                layout(segments, self.origin);
                true
            }
            _ => false,
        }
    }
}

//! Ticker strip building blocks.
//!
//! [`PriceHistory`] turns successive observations into [`Trend`]s,
//! [`TickerRenderModel`] lays those out as [`DisplaySegment`]s, and
//! [`ScrollAnimator`] moves the segments across the matrix.

pub mod history;
pub mod render;
pub mod scroll;
pub mod segment;

pub use history::{PriceHistory, Trend};
pub use render::TickerRenderModel;
pub use scroll::ScrollAnimator;
pub use segment::{DisplaySegment, GLYPH_WIDTH, SegmentColor};

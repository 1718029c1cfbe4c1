//! Turns a price snapshot into the ordered segments of the ticker strip.

use crate::models::{PriceSnapshot, Symbol};

use super::history::{PriceHistory, Trend};
use super::segment::{DisplaySegment, SegmentColor, layout};

/// Text shown when there is nothing else to draw.
pub const NO_DATA_TEXT: &str = "NO DATA";

/// Builds ticker segments in the configured symbol order.
#[derive(Clone, Debug)]
pub struct TickerRenderModel {
    symbols: Vec<Symbol>,
    origin: i32,
}

impl TickerRenderModel {
    /// `origin` is the x of the first segment, normally the display width
    /// so the strip enters from the right edge.
    ///
    /// Repeated symbols are kept once, at their first position; each symbol
    /// updates `history` once per build.
    pub fn new(symbols: Vec<Symbol>, origin: i32) -> Self {
        let mut unique: Vec<Symbol> = Vec::with_capacity(symbols.len());
        for symbol in symbols {
            if !unique.contains(&symbol) {
                unique.push(symbol);
            }
        }
        Self {
            symbols: unique,
            origin,
        }
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Builds one segment per symbol, recording each observation in
    /// `history` along the way.
    ///
    /// Symbols missing from `snapshot` show their last known price. A
    /// symbol that has never been priced shows `--`.
    pub fn build(
        &self,
        snapshot: &PriceSnapshot,
        history: &mut PriceHistory,
    ) -> Vec<DisplaySegment> {
        let mut segments: Vec<DisplaySegment> = self
            .symbols
            .iter()
            .map(|symbol| {
                let observed = snapshot.get(symbol);
                let trend = history.update(symbol, observed);
                let price = observed.or_else(|| history.last_known(symbol));
                let (color, glyph) = trend_style(trend);

                let text = match price {
                    Some(price) => format!("{symbol} {price:.2} {glyph}"),
                    None => format!("{symbol} -- {glyph}"),
                };
                DisplaySegment::new(text, color, 0)
            })
            .collect();

        if segments.is_empty() {
            segments.push(DisplaySegment::new(NO_DATA_TEXT, SegmentColor::Red, 0));
        }

        layout(&mut segments, self.origin);
        segments
    }
}

/// Color and arrow glyph for a trend.
pub fn trend_style(trend: Trend) -> (SegmentColor, char) {
    match trend {
        Trend::Up => (SegmentColor::Green, '^'),
        Trend::Down => (SegmentColor::Red, 'v'),
        Trend::Flat | Trend::Unknown => (SegmentColor::Gray, '='),
    }
}

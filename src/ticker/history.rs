//! Last-known prices and trend detection.

use std::collections::HashMap;

use crate::models::Symbol;

/// Direction of the latest observation relative to the previous one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Flat,
    /// Either the new observation or the previous price is missing.
    Unknown,
}

/// Remembers the last price seen for each symbol.
///
/// A missing observation never erases what is already known, so a stale
/// price stays available until a fresh one replaces it.
#[derive(Clone, Debug, Default)]
pub struct PriceHistory {
    last: HashMap<Symbol, f64>,
}

impl PriceHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an observation and returns its trend.
    ///
    /// Comparison is exact: equal prices are [`Trend::Flat`] and any
    /// difference at all counts as a move.
    pub fn update(&mut self, symbol: &Symbol, observed: Option<f64>) -> Trend {
        let Some(price) = observed else {
            return Trend::Unknown;
        };

        let trend = match self.last.get(symbol) {
            None => Trend::Unknown,
            Some(&prev) if price > prev => Trend::Up,
            Some(&prev) if price < prev => Trend::Down,
            Some(_) => Trend::Flat,
        };
        self.last.insert(symbol.clone(), price);
        trend
    }

    pub fn last_known(&self, symbol: &Symbol) -> Option<f64> {
        self.last.get(symbol).copied()
    }
}

//! Shared models for symbols and price snapshots.
//!
//! Contains the [`Symbol`] newtype used across the crate and the immutable
//! [`PriceSnapshot`] produced by each successful quote fetch.

pub mod quote;

use std::collections::HashMap;
use std::fmt;

/// An exchange ticker code such as `AAPL`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Symbol {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

/// Prices observed in one fetch cycle. Symbols without a usable price are
/// simply not present.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PriceSnapshot {
    prices: HashMap<Symbol, f64>,
}

impl PriceSnapshot {
    /// A snapshot in which no symbol has a price.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Price observed for `symbol`, if any.
    pub fn get(&self, symbol: &Symbol) -> Option<f64> {
        self.prices.get(symbol).copied()
    }

    /// Number of symbols with a price.
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

impl FromIterator<(Symbol, f64)> for PriceSnapshot {
    fn from_iter<I: IntoIterator<Item = (Symbol, f64)>>(iter: I) -> Self {
        Self {
            prices: iter.into_iter().collect(),
        }
    }
}

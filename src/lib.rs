//! Market-hours aware stock ticker for small pixel-matrix displays.
//!
//! During trading hours a strip of `SYMBOL PRICE TREND` segments scrolls
//! across the matrix, refreshed from a REST quote API. Outside trading
//! hours a "market closed" banner scrolls instead.

pub mod clock;
pub mod config;
pub mod controller;
pub mod credentials;
pub mod error;
pub mod market;
pub mod models;
pub mod quotes;
pub mod ticker;
pub mod tui;

pub use error::{Result, TickertapeError};

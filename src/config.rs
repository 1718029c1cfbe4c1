//! Application configuration loaded from environment variables.
//!
//! The quote API key **must** be provided, either directly or through the
//! keychain (see [`crate::credentials`]):
//! - `TWELVEDATA_API_KEY` — API key for the Twelve Data quote endpoint
//!
//! Optional overrides:
//! - `TICKER_SYMBOLS` — comma-separated symbol list (`AAPL,MSFT,NVDA,TSLA`)
//! - `TICKER_TZ_OFFSET_HOURS` — exchange offset from UTC in hours (`-5`)
//! - `TICKER_REFRESH_SECS` — seconds between quote fetches (`120`)
//! - `TWELVEDATA_BASE_URL` — quote API base URL
//! - `TICKER_LOG_FILE` — log file path (`tickertape.log`)
//!
//! Everything else is a compiled constant on [`TickerConfig`].

use std::time::Duration;

use crate::market::{HourMinute, MarketHours};
use crate::models::Symbol;

/// Default public quote endpoint.
const DEFAULT_BASE_URL: &str = "https://api.twelvedata.com";

/// Symbols shown when `TICKER_SYMBOLS` is unset.
const DEFAULT_SYMBOLS: [&str; 4] = ["AAPL", "MSFT", "NVDA", "TSLA"];

/// US Eastern standard time. No DST adjustment is made.
const DEFAULT_TZ_OFFSET_HOURS: i32 = -5;

const DEFAULT_REFRESH_SECS: u64 = 120;

const DEFAULT_LOG_FILE: &str = "tickertape.log";

/// Top-level application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub ticker: TickerConfig,
    pub quotes: QuoteConfig,
}

/// Display and scheduling knobs consumed by the controller.
#[derive(Debug, Clone)]
pub struct TickerConfig {
    /// Symbols in left-to-right display order.
    pub symbols: Vec<Symbol>,
    /// Minimum time between quote fetches, successful or not.
    pub refresh_interval: Duration,
    /// Pixels per tick while the ticker scrolls.
    pub open_scroll_speed: i32,
    /// Pixels per tick while the closed banner scrolls.
    pub closed_scroll_speed: i32,
    /// Loop sleep while the market is open.
    pub open_tick: Duration,
    /// Loop sleep while the market is closed.
    pub closed_tick: Duration,
    pub hours: MarketHours,
    /// Exchange offset from UTC in whole hours.
    pub tz_offset_hours: i32,
    /// Matrix width in pixels; also the off-screen start x of every segment.
    pub display_width: i32,
}

impl Default for TickerConfig {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_SYMBOLS.iter().map(|s| Symbol::new(*s)).collect(),
            refresh_interval: Duration::from_secs(DEFAULT_REFRESH_SECS),
            open_scroll_speed: 2,
            closed_scroll_speed: 1,
            open_tick: Duration::from_millis(20),
            closed_tick: Duration::from_millis(30),
            hours: MarketHours {
                open: HourMinute::new(9, 30),
                close: HourMinute::new(16, 0),
            },
            tz_offset_hours: DEFAULT_TZ_OFFSET_HOURS,
            display_width: 64,
        }
    }
}

/// Quote API connection values.
#[derive(Debug, Clone)]
pub struct QuoteConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout: Duration,
}

/// Loads the application configuration from environment variables.
///
/// # Errors
///
/// Returns [`TickertapeError::Config`](crate::TickertapeError::Config) if the
/// API key is missing, a numeric override does not parse, or the symbol
/// list ends up empty.
pub fn fetch_config() -> crate::Result<AppConfig> {
    let api_key = non_empty_var("TWELVEDATA_API_KEY").ok_or_else(|| {
        crate::TickertapeError::Config("TWELVEDATA_API_KEY is not set".to_string())
    })?;

    let base_url =
        non_empty_var("TWELVEDATA_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let mut ticker = TickerConfig::default();

    if let Some(raw) = non_empty_var("TICKER_SYMBOLS") {
        ticker.symbols = parse_symbols(&raw)?;
    }
    if let Some(offset) = parse_var::<i32>("TICKER_TZ_OFFSET_HOURS")? {
        ticker.tz_offset_hours = offset;
    }
    if let Some(secs) = parse_var::<u64>("TICKER_REFRESH_SECS")? {
        ticker.refresh_interval = Duration::from_secs(secs);
    }

    Ok(AppConfig {
        ticker,
        quotes: QuoteConfig {
            base_url,
            api_key,
            timeout: Duration::from_secs(10),
        },
    })
}

/// Log file path from `TICKER_LOG_FILE`.
///
/// Readable on its own so logging can start before the rest of the
/// configuration, which may depend on the keychain.
pub fn log_file_path() -> String {
    non_empty_var("TICKER_LOG_FILE").unwrap_or_else(|| DEFAULT_LOG_FILE.to_string())
}

/// Splits a comma-separated symbol list, trimming and upper-casing entries.
///
/// Repeats are dropped; the first occurrence keeps its position.
fn parse_symbols(raw: &str) -> crate::Result<Vec<Symbol>> {
    let mut symbols: Vec<Symbol> = Vec::new();
    for code in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let symbol = Symbol::new(code.to_uppercase());
        if !symbols.contains(&symbol) {
            symbols.push(symbol);
        }
    }

    if symbols.is_empty() {
        return Err(crate::TickertapeError::Config(
            "TICKER_SYMBOLS contains no symbols".to_string(),
        ));
    }
    Ok(symbols)
}

/// Parses an optional environment variable, rejecting malformed values.
fn parse_var<T: std::str::FromStr>(name: &str) -> crate::Result<Option<T>> {
    match non_empty_var(name) {
        None => Ok(None),
        Some(raw) => raw.trim().parse().map(Some).map_err(|_| {
            crate::TickertapeError::Config(format!("{name} has an invalid value: {raw:?}"))
        }),
    }
}

/// Returns the value of an environment variable if it exists and is non-empty.
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

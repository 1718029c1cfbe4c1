//! Crate-level error types.
//!
//! [`TickertapeError`] unifies every error source (configuration, HTTP,
//! quote payloads, time sync, terminal I/O) behind a single enum so
//! callers can match on the variant they care about while still using the
//! `?` operator for easy propagation.

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TickertapeError>;

/// Top-level error type returned by all public APIs.
#[derive(Debug, thiserror::Error)]
pub enum TickertapeError {
    /// A configuration value was missing or could not be parsed.
    #[error("configuration error: {0}")]
    Config(String),

    /// An HTTP request failed or returned an error status.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The quote API answered, but not with usable quote data.
    #[error("quote error: {0}")]
    Quote(String),

    /// No time source produced a usable timestamp.
    #[error("time sync error: {0}")]
    TimeSync(String),

    /// Terminal setup, drawing, or teardown failed.
    #[error("io error: {0}")]
    Io(String),
}

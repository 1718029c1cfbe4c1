//! Twelve Data `/quote` response parsing.
//!
//! A multi-symbol request returns an object keyed by symbol, each value a
//! quote object. A single-symbol request returns the quote object itself.
//! Either shape may carry an error payload instead:
//! `{"code": 401, "message": "...", "status": "error"}`.

use serde::Deserialize;
use serde_json::Value;

use super::{PriceSnapshot, Symbol};

/// The subset of a quote object the ticker cares about.
///
/// Twelve Data sends numbers as strings (`"189.98000"`), but plain JSON
/// numbers are accepted as well.
#[derive(Debug, Default, Deserialize)]
pub struct QuoteData {
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub price: Option<Value>,
    #[serde(default)]
    pub close: Option<Value>,
}

impl QuoteData {
    /// Latest price, falling back to the last close.
    pub fn last_price(&self) -> Option<f64> {
        self.price
            .as_ref()
            .and_then(coerce_f64)
            .or_else(|| self.close.as_ref().and_then(coerce_f64))
    }
}

/// Error payload returned in place of quote data.
#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
    pub status: String,
}

/// Builds a snapshot for `symbols` from a decoded `/quote` body.
///
/// Symbols that are missing from the body or carry no numeric price are
/// left out of the snapshot.
///
/// # Errors
///
/// Returns [`TickertapeError::Quote`](crate::TickertapeError::Quote) if the
/// body is not an object or is a top-level error payload.
pub fn parse_quote_response(body: &Value, symbols: &[Symbol]) -> crate::Result<PriceSnapshot> {
    let Some(object) = body.as_object() else {
        return Err(crate::TickertapeError::Quote(format!(
            "expected a JSON object, got: {}",
            truncate(&body.to_string(), 120)
        )));
    };

    if let Ok(error) = ApiErrorResponse::deserialize(body)
        && error.status == "error"
    {
        return Err(crate::TickertapeError::Quote(format!(
            "api error {}: {}",
            error.code.unwrap_or_default(),
            error.message.unwrap_or_default()
        )));
    }

    // Single-symbol responses are not keyed by symbol.
    if let [only] = symbols
        && !object.contains_key(only.as_str())
    {
        let quote = QuoteData::deserialize(body).unwrap_or_default();
        let matches = quote
            .symbol
            .as_deref()
            .is_none_or(|s| s.eq_ignore_ascii_case(only.as_str()));
        return Ok(quote
            .last_price()
            .filter(|_| matches)
            .map(|p| (only.clone(), p))
            .into_iter()
            .collect());
    }

    Ok(symbols
        .iter()
        .filter_map(|symbol| {
            let quote = QuoteData::deserialize(object.get(symbol.as_str())?).ok()?;
            Some((symbol.clone(), quote.last_price()?))
        })
        .collect())
}

/// Converts a JSON number or numeric string to `f64`.
fn coerce_f64(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|p| p.is_finite())
}

fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

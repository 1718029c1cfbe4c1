//! One-shot HTTP time sync.
//!
//! Boards without a battery-backed RTC boot with a meaningless clock, so the
//! current UTC time is fetched from public time APIs once at startup. The
//! result is an offset to apply to the host clock rather than a change to
//! the host clock itself.

use std::time::Duration;

use chrono::{DateTime, NaiveDateTime, TimeDelta, Utc};
use serde_json::Value;
use tracing::{info, warn};

use crate::Result;

/// Public UTC time endpoints, tried in order on every attempt.
pub const DEFAULT_TIME_ENDPOINTS: [&str; 2] = [
    "https://worldtimeapi.org/api/timezone/Etc/UTC",
    "https://timeapi.io/api/Time/current/zone?timeZone=UTC",
];

/// Number of passes over the endpoint list.
pub const DEFAULT_ATTEMPTS: u32 = 3;

/// Delay after pass `n` is `n * DEFAULT_BASE_DELAY`.
pub const DEFAULT_BASE_DELAY: Duration = Duration::from_secs(2);

/// A successful sync.
#[derive(Clone, Debug)]
pub struct TimeSync {
    /// Remote time minus host time at the moment the response arrived.
    pub offset: TimeDelta,
    /// Endpoint that answered.
    pub source: String,
}

/// Fetches UTC time from `endpoints`, making up to `attempts` passes.
///
/// After each failed pass the loop sleeps `attempt * base_delay`. No sleep
/// follows the final pass.
///
/// # Errors
///
/// Returns [`TickertapeError::TimeSync`](crate::TickertapeError::TimeSync)
/// once every attempt against every endpoint has failed.
pub async fn sync_time(
    client: &reqwest::Client,
    endpoints: &[&str],
    attempts: u32,
    base_delay: Duration,
) -> Result<TimeSync> {
    for attempt in 1..=attempts {
        for url in endpoints {
            info!(attempt, url, "Requesting time");
            match fetch_remote_time(client, url).await {
                Ok(remote) => {
                    let offset = remote - Utc::now();
                    info!(
                        url,
                        offset_ms = offset.num_milliseconds(),
                        "Time sync succeeded"
                    );
                    return Ok(TimeSync {
                        offset,
                        source: (*url).to_string(),
                    });
                }
                Err(e) => warn!(attempt, url, error = %e, "Time sync request failed"),
            }
        }

        if attempt < attempts {
            tokio::time::sleep(base_delay * attempt).await;
        }
    }

    Err(crate::TickertapeError::TimeSync(format!(
        "no usable response after {attempts} attempts"
    )))
}

async fn fetch_remote_time(client: &reqwest::Client, url: &str) -> Result<DateTime<Utc>> {
    let response = client.get(url).send().await?.error_for_status()?;
    let body: Value = response.json().await?;

    parse_time_response(&body).ok_or_else(|| {
        crate::TickertapeError::TimeSync(format!(
            "unrecognized response: {}",
            body.to_string().chars().take(120).collect::<String>()
        ))
    })
}

/// Extracts UTC time from either supported response shape.
///
/// - worldtimeapi: `{"unixtime": 1704465012, ...}`
/// - timeapi.io: `{"dateTime": "2024-01-05T14:30:12.1234567", ...}`
pub fn parse_time_response(body: &Value) -> Option<DateTime<Utc>> {
    if let Some(unix) = body.get("unixtime").and_then(Value::as_i64) {
        return DateTime::from_timestamp(unix, 0);
    }

    let text = body.get("dateTime")?.as_str()?;
    // Fractional seconds vary in precision; whole seconds are enough.
    let whole_seconds = text.get(..19)?;
    NaiveDateTime::parse_from_str(whole_seconds, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|naive| naive.and_utc())
}

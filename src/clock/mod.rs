//! Wall-clock and monotonic time sources.
//!
//! The controller reads time exclusively through [`ClockSource`], which
//! lets tests script both the calendar date and the passage of time.

pub mod sync;

use std::time::{Duration, Instant};

use chrono::{DateTime, TimeDelta, Utc};

pub use sync::{TimeSync, sync_time};

/// Supplies calendar time for market hours and monotonic time for
/// scheduling.
pub trait ClockSource {
    /// Current UTC wall-clock time.
    fn now_utc(&self) -> DateTime<Utc>;

    /// Time since an arbitrary fixed epoch. Never decreases.
    fn monotonic(&self) -> Duration;
}

/// The host clock, corrected by an offset learned from time sync.
#[derive(Clone, Debug)]
pub struct SystemClock {
    offset: TimeDelta,
    started: Instant,
}

impl SystemClock {
    /// A clock that trusts the host time as-is.
    pub fn unsynced() -> Self {
        Self::with_offset(TimeDelta::zero())
    }

    /// A clock that adds `offset` to the host time.
    pub fn with_offset(offset: TimeDelta) -> Self {
        Self {
            offset,
            started: Instant::now(),
        }
    }
}

impl ClockSource for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now() + self.offset
    }

    fn monotonic(&self) -> Duration {
        self.started.elapsed()
    }
}

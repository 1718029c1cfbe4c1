//! Market-hours calendar.
//!
//! A fixed weekly schedule evaluated against UTC wall-clock time shifted by
//! a whole-hour offset. The offset is applied to the hour only: there is no
//! DST handling and the weekday is never rolled across midnight.

use std::fmt;

use chrono::{DateTime, Datelike, Timelike, Utc};

/// A local time of day at minute resolution, ordered as `(hour, minute)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct HourMinute {
    pub hour: u32,
    pub minute: u32,
}

impl HourMinute {
    pub const fn new(hour: u32, minute: u32) -> Self {
        Self { hour, minute }
    }
}

/// Renders as a 12-hour clock, e.g. `9:30AM` or `4:00PM`.
impl fmt::Display for HourMinute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = if self.hour < 12 { "AM" } else { "PM" };
        let hour = match self.hour % 12 {
            0 => 12,
            h => h,
        };
        write!(f, "{hour}:{:02}{suffix}", self.minute)
    }
}

/// Opening bell (inclusive) and closing bell (exclusive).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MarketHours {
    pub open: HourMinute,
    pub close: HourMinute,
}

/// Decides whether the market is open at a given instant.
#[derive(Clone, Copy, Debug)]
pub struct MarketCalendar {
    hours: MarketHours,
    tz_offset_hours: i32,
}

impl MarketCalendar {
    pub fn new(hours: MarketHours, tz_offset_hours: i32) -> Self {
        Self {
            hours,
            tz_offset_hours,
        }
    }

    pub fn hours(&self) -> MarketHours {
        self.hours
    }

    /// Exchange-local time of day for `now_utc`.
    pub fn local_time(&self, now_utc: DateTime<Utc>) -> HourMinute {
        let hour = (now_utc.hour() as i32 + self.tz_offset_hours).rem_euclid(24) as u32;
        HourMinute::new(hour, now_utc.minute())
    }

    /// Returns `true` on weekdays between the opening and closing bell.
    pub fn is_open(&self, now_utc: DateTime<Utc>) -> bool {
        // Monday = 0, so 5 and 6 are the weekend.
        if now_utc.weekday().num_days_from_monday() >= 5 {
            return false;
        }

        let local = self.local_time(now_utc);
        local >= self.hours.open && local < self.hours.close
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twelve_hour_rendering() {
        assert_eq!(HourMinute::new(9, 30).to_string(), "9:30AM");
        assert_eq!(HourMinute::new(16, 0).to_string(), "4:00PM");
        assert_eq!(HourMinute::new(0, 5).to_string(), "12:05AM");
        assert_eq!(HourMinute::new(12, 0).to_string(), "12:00PM");
    }

    #[test]
    fn ordering_compares_hour_first() {
        assert!(HourMinute::new(9, 59) < HourMinute::new(10, 0));
        assert!(HourMinute::new(9, 30) > HourMinute::new(9, 29));
    }
}

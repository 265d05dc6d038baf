//! Timestamp model.
//!
//! # Design
//!
//! Time is a plain Unix-seconds counter.  The learner and the predictive
//! analyzer only ever need three calendar views of a timestamp — hour of
//! day, day of week, and truncated hour/day deltas — all of which are
//! integer arithmetic on the epoch offset, so no datetime library is pulled
//! in.  All views are UTC.
//!
//! Delta helpers truncate toward zero rather than rounding.  Pattern
//! matching over historical observations ("within the last 24 hours",
//! "days since first record") is defined over truncated deltas throughout
//! the workspace.

use std::fmt;

pub const MINUTE_SECS: i64 = 60;
pub const HOUR_SECS: i64 = 3_600;
pub const DAY_SECS: i64 = 86_400;

/// A point in time as Unix seconds (UTC).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Timestamp(pub i64);

impl Timestamp {
    /// Hour of day, `0..=23`.
    #[inline]
    pub fn hour_of_day(self) -> u32 {
        (self.0.div_euclid(HOUR_SECS).rem_euclid(24)) as u32
    }

    /// Day of week, `0 = Monday … 6 = Sunday`.
    ///
    /// The Unix epoch (1970-01-01) was a Thursday, i.e. weekday index 3.
    #[inline]
    pub fn day_of_week(self) -> u32 {
        ((self.0.div_euclid(DAY_SECS) + 3).rem_euclid(7)) as u32
    }

    #[inline]
    pub fn plus_minutes(self, minutes: i64) -> Timestamp {
        Timestamp(self.0 + minutes * MINUTE_SECS)
    }

    #[inline]
    pub fn plus_hours(self, hours: i64) -> Timestamp {
        Timestamp(self.0 + hours * HOUR_SECS)
    }

    /// Whole hours elapsed from `earlier` to `self`, truncated toward zero.
    #[inline]
    pub fn hours_since(self, earlier: Timestamp) -> i64 {
        (self.0 - earlier.0) / HOUR_SECS
    }

    /// Whole days elapsed from `earlier` to `self`, truncated toward zero.
    #[inline]
    pub fn days_since(self, earlier: Timestamp) -> i64 {
        (self.0 - earlier.0) / DAY_SECS
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let day = self.0.div_euclid(DAY_SECS);
        let rem = self.0.rem_euclid(DAY_SECS);
        write!(
            f,
            "d{} {:02}:{:02}",
            day,
            rem / HOUR_SECS,
            (rem % HOUR_SECS) / MINUTE_SECS
        )
    }
}

//! Clock sources
//!
//! Anything that depends on "today" (chart windows, record timestamps, task
//! completion stamps) takes a [`Clock`] so tests can pin the date.

use chrono::{Local, NaiveDate, NaiveDateTime};

/// Source of the current local date and time
pub trait Clock {
    /// Current local date-time
    fn now(&self) -> NaiveDateTime;

    /// Current local date
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Wall clock in the local timezone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock frozen at a given instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(NaiveDateTime);

impl FixedClock {
    pub fn new(now: NaiveDateTime) -> Self {
        Self(now)
    }

    /// Frozen at midday on the given date
    pub fn on(date: NaiveDate) -> Self {
        Self(date.and_hms_opt(12, 0, 0).unwrap_or_default())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

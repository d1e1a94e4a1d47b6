//! Time source abstraction.
//!
//! # Responsibility
//! - Provide creation timestamps and the current calendar day.
//! - Allow tests to pin time with `FixedClock`.

use chrono::{DateTime, Local, NaiveDate, Utc};

/// Supplies the current instant and calendar day.
pub trait Clock {
    /// Current time in Unix epoch milliseconds.
    fn now_millis(&self) -> i64;

    /// Current calendar day used for due-date status.
    fn today(&self) -> NaiveDate;
}

/// Wall clock; `today` follows the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.now.timestamp_millis()
    }

    fn today(&self) -> NaiveDate {
        self.now.date_naive()
    }
}

#[cfg(test)]
mod tests {
    use super::{Clock, FixedClock, SystemClock};
    use chrono::{NaiveDate, TimeZone, Utc};

    #[test]
    fn fixed_clock_reports_pinned_instant() {
        let fixed = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
        let clock = FixedClock::new(fixed);

        assert_eq!(clock.now_millis(), fixed.timestamp_millis());
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
    }

    #[test]
    fn system_clock_is_after_epoch() {
        assert!(SystemClock.now_millis() > 0);
    }
}

//! Injectable time source.
//!
//! Everything date-dependent (season buckets, daily cache keys, flight price
//! seeds) reads the time through a [`Clock`] so tests can pin the date.

use chrono::{DateTime, Datelike, NaiveDate, Utc};

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }

    /// Calendar month, 1-12
    fn month(&self) -> u32 {
        self.now().month()
    }
}

/// Wall clock
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a single instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Midnight UTC of the given date. Returns `None` for invalid dates.
    #[must_use]
    pub fn on(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|dt| Self(dt.and_utc()))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_date_parts() {
        let clock = FixedClock::on(2024, 7, 15).unwrap();
        assert_eq!(clock.month(), 7);
        assert_eq!(clock.today().to_string(), "2024-07-15");
    }

    #[test]
    fn test_fixed_clock_rejects_invalid_date() {
        assert!(FixedClock::on(2024, 2, 30).is_none());
    }
}

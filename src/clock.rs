//! Time-of-day sources

use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, Local, NaiveTime};

use crate::error::{Error, Result};

const TIME_OF_DAY_FORMAT: &str = "%H:%M:%S";

/// Source of the current local time of day.
pub trait Clock: Send + Sync {
    fn now(&self) -> Result<NaiveTime>;
}

/// Reads the host clock in the host's configured time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Result<NaiveTime> {
        let now = SystemTime::now();

        // A reading before 1970 means the host clock is broken.
        if let Err(e) = now.duration_since(UNIX_EPOCH) {
            return Err(Error::clock_unavailable(e.to_string()));
        }

        Ok(DateTime::<Local>::from(now).time())
    }
}

/// Always reports the same time of day.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveTime);

impl FixedClock {
    /// Returns `None` when any component is out of range.
    pub fn from_hms(hour: u32, min: u32, sec: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, min, sec).map(Self)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Result<NaiveTime> {
        Ok(self.0)
    }
}

/// Render a time of day as zero-padded 24-hour `HH:MM:SS`.
///
/// Fractional seconds are dropped, not rounded.
pub fn format_time_of_day(time: NaiveTime) -> String {
    time.format(TIME_OF_DAY_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn formats_afternoon_time() {
        let time = NaiveTime::from_hms_opt(14, 5, 9).unwrap();
        assert_eq!(format_time_of_day(time), "14:05:09");
    }

    #[test]
    fn formats_midnight() {
        assert_eq!(format_time_of_day(NaiveTime::from_hms_opt(0, 0, 0).unwrap()), "00:00:00");
    }

    #[test]
    fn truncates_fractional_seconds() {
        let time = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap();
        assert_eq!(format_time_of_day(time), "23:59:59");
    }

    #[test]
    fn fixed_clock_rejects_out_of_range_components() {
        assert!(FixedClock::from_hms(24, 0, 0).is_none());
        assert!(FixedClock::from_hms(0, 60, 0).is_none());
        assert!(FixedClock::from_hms(7, 30, 0).is_some());
    }

    #[test]
    fn fixed_clock_is_stable() {
        let clock = FixedClock::from_hms(7, 30, 15).unwrap();
        assert_eq!(clock.now().unwrap(), clock.now().unwrap());
    }

    #[test]
    fn system_clock_reports_valid_components() {
        let now = SystemClock.now().unwrap();
        assert!(now.hour() < 24);
        assert!(now.minute() < 60);
        // leap seconds surface through the nanosecond field, not here
        assert!(now.second() < 60);
    }

    #[test]
    fn system_clock_follows_local_zone() {
        const SECONDS_PER_DAY: i64 = 86_400;

        let reported = SystemClock.now().unwrap().num_seconds_from_midnight() as i64;
        let local = Local::now().time().num_seconds_from_midnight() as i64;

        // Readings straddling midnight are one second apart across the wrap.
        let diff = (reported - local).abs();
        let diff = diff.min(SECONDS_PER_DAY - diff);
        assert!(diff <= 1, "system clock {reported}s vs local {local}s");
    }
}

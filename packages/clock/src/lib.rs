//! UTC wall-clock accessor.
//!
//! [`now`] samples the host clock once and returns the instant split into a
//! [`CalendarDate`] and a [`TimeOfDay`], both expressed in UTC regardless of
//! the host's configured timezone.
//!
//! ```rust
//! let (date, time) = utc_clock::now();
//!
//! assert!((1..=12).contains(&date.month()));
//! assert!(time.hour() < 24);
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod models;

#[cfg(feature = "std")]
pub mod standard;

#[cfg(feature = "simulator")]
pub mod simulator;

pub use models::{CalendarDate, TimeOfDay, UtcNow, from_datetime, to_datetime};

#[allow(unused)]
macro_rules! impl_clock {
    ($module:ident $(,)?) => {
        pub use $module::utc_now;
    };
}

#[cfg(feature = "simulator")]
impl_clock!(simulator);

#[cfg(all(not(feature = "simulator"), feature = "std"))]
impl_clock!(standard);

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Invalid calendar date: {year}-{month}-{day}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    #[error("Invalid time of day: {hour}:{minute}:{second}")]
    InvalidTime { hour: u32, minute: u32, second: u32 },
}

/// Reads the current wall-clock time and decomposes it into UTC calendar and
/// time-of-day fields.
///
/// The clock is sampled exactly once, so the date and the time always
/// describe the same instant, even across a midnight rollover.
#[cfg(any(feature = "std", feature = "simulator"))]
#[must_use]
pub fn now() -> UtcNow {
    let instant = utc_now();
    let (date, time) = from_datetime(&instant);
    log::trace!("now: instant={instant:?} date={date:?} time={time:?}");
    (date, time)
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use chrono::{Datelike as _, Utc};
    use pretty_assertions::assert_eq;
    use serial_test::serial;

    use super::*;

    #[test_log::test]
    #[serial]
    fn now_fields_are_within_calendar_ranges() {
        let (date, time) = now();

        assert!((1..=12).contains(&date.month()));
        assert!((1..=date.days_in_month()).contains(&date.day()));
        assert!(time.hour() <= 23);
        assert!(time.minute() <= 59);
        assert!(time.second() <= 59);
    }

    #[test_log::test]
    #[serial]
    fn now_is_bounded_by_surrounding_host_samples() {
        let before = Utc::now().timestamp();
        let (date, time) = now();
        let after = Utc::now().timestamp();

        let recombined = to_datetime(&date, &time).timestamp();

        assert!(before <= recombined, "{before} > {recombined}");
        assert!(recombined <= after, "{recombined} > {after}");
    }

    #[test_log::test]
    #[serial]
    fn successive_calls_never_go_backwards() {
        let first = now();
        let second = now();

        assert!(first <= second, "{first:?} > {second:?}");
    }

    #[test_log::test]
    #[serial]
    fn now_reports_utc_year() {
        let before = Utc::now().year();
        let (date, _) = now();
        let after = Utc::now().year();

        assert!(date.year() == before || date.year() == after);
    }

    #[test_log::test]
    fn invalid_date_error_message() {
        let err = CalendarDate::new(2023, 2, 29).unwrap_err();

        assert_eq!(err.to_string(), "Invalid calendar date: 2023-2-29");
    }
}

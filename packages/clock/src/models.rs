use chrono::{DateTime, Datelike as _, NaiveDate, NaiveTime, Timelike as _, Utc};

use crate::Error;

/// A calendar date and a time of day sampled from the same instant.
pub type UtcNow = (CalendarDate, TimeOfDay);

/// A proleptic Gregorian date in UTC.
///
/// Orders chronologically: fields compare year first, then month, then day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "(i32, u32, u32)", try_from = "(i32, u32, u32)")
)]
pub struct CalendarDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CalendarDate {
    /// # Errors
    ///
    /// * If the `year`/`month`/`day` combination is not a real calendar date
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, Error> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(|_| Self { year, month, day })
            .ok_or(Error::InvalidDate { year, month, day })
    }

    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// 1-based month, `1..=12`.
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    #[must_use]
    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Number of days in this date's month, accounting for leap years.
    #[must_use]
    pub fn days_in_month(&self) -> u32 {
        let (year, month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };

        NaiveDate::from_ymd_opt(year, month, 1)
            .and_then(|first| first.pred_opt())
            .map_or(31, |last| last.day())
    }

    #[must_use]
    pub const fn into_parts(self) -> (i32, u32, u32) {
        (self.year, self.month, self.day)
    }

    fn to_naive(self) -> NaiveDate {
        // Fields are validated on construction.
        NaiveDate::from_ymd_opt(self.year, self.month, self.day).unwrap_or_default()
    }
}

impl From<CalendarDate> for (i32, u32, u32) {
    fn from(value: CalendarDate) -> Self {
        value.into_parts()
    }
}

impl TryFrom<(i32, u32, u32)> for CalendarDate {
    type Error = Error;

    fn try_from((year, month, day): (i32, u32, u32)) -> Result<Self, Self::Error> {
        Self::new(year, month, day)
    }
}

/// A whole-second time of day in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "(u32, u32, u32)", try_from = "(u32, u32, u32)")
)]
pub struct TimeOfDay {
    hour: u32,
    minute: u32,
    second: u32,
}

impl TimeOfDay {
    /// # Errors
    ///
    /// * If `hour` is above 23, or `minute` or `second` is above 59
    pub fn new(hour: u32, minute: u32, second: u32) -> Result<Self, Error> {
        NaiveTime::from_hms_opt(hour, minute, second)
            .map(|_| Self {
                hour,
                minute,
                second,
            })
            .ok_or(Error::InvalidTime {
                hour,
                minute,
                second,
            })
    }

    #[must_use]
    pub const fn hour(&self) -> u32 {
        self.hour
    }

    #[must_use]
    pub const fn minute(&self) -> u32 {
        self.minute
    }

    #[must_use]
    pub const fn second(&self) -> u32 {
        self.second
    }

    #[must_use]
    pub const fn into_parts(self) -> (u32, u32, u32) {
        (self.hour, self.minute, self.second)
    }

    fn to_naive(self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hour, self.minute, self.second).unwrap_or_default()
    }
}

impl From<TimeOfDay> for (u32, u32, u32) {
    fn from(value: TimeOfDay) -> Self {
        value.into_parts()
    }
}

impl TryFrom<(u32, u32, u32)> for TimeOfDay {
    type Error = Error;

    fn try_from((hour, minute, second): (u32, u32, u32)) -> Result<Self, Self::Error> {
        Self::new(hour, minute, second)
    }
}

/// Splits a single UTC instant into its calendar date and time of day.
///
/// Sub-second precision is dropped. A leap second decomposes as second 59.
#[must_use]
pub fn from_datetime(instant: &DateTime<Utc>) -> UtcNow {
    let date = CalendarDate {
        year: instant.year(),
        month: instant.month(),
        day: instant.day(),
    };
    let time = TimeOfDay {
        hour: instant.hour(),
        minute: instant.minute(),
        second: instant.second(),
    };

    (date, time)
}

/// Recombines a calendar date and a time of day into one UTC instant.
#[must_use]
pub fn to_datetime(date: &CalendarDate, time: &TimeOfDay) -> DateTime<Utc> {
    date.to_naive().and_time(time.to_naive()).and_utc()
}

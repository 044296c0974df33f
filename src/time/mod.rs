//! Time module for astronomical time calculations
//!
//! Converts civil timestamps ([`Instant`]) into the continuous Julian Day
//! scale and into days elapsed since the J2000 epoch. The orbital series in
//! [`crate::planetlib`] and [`crate::earthlib`] are all driven by
//! [`AstronomicalTime::days_since_epoch`].
//!
//! UTC is treated as a uniform time scale: leap seconds and the TT/UT1
//! offsets are far below the accuracy of the low-order orbit series.

pub mod calendar;

use crate::constants::{DAY_NS, DAY_S, UNIX_EPOCH_JD};
use chrono::{
    DateTime, Datelike, Duration, FixedOffset, NaiveDate, SecondsFormat, TimeZone, Timelike, Utc,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;
use thiserror::Error;

/// Seconds between the Unix epoch and J2000 (2000-01-01T12:00:00Z)
const J2000_UNIX_SECONDS: i64 = 946_728_000;

/// Error type for time operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TimeError {
    #[error("Invalid calendar date: {0}")]
    CalendarError(String),

    #[error("Parsing error: {0}")]
    ParseError(String),

    #[error("Time out of range: {0}")]
    OutOfRange(String),
}

/// Result type for time operations
pub type Result<T> = std::result::Result<T, TimeError>;

/// An absolute point in civil time with an explicit UTC offset
///
/// Two instants compare equal when they name the same absolute moment,
/// whatever offsets they were written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Instant {
    datetime: DateTime<FixedOffset>,
}

impl Instant {
    /// Create an instant from a datetime carrying its own offset
    pub fn new(datetime: DateTime<FixedOffset>) -> Self {
        Self { datetime }
    }

    /// Create an instant from a UTC datetime
    pub fn from_utc(datetime: DateTime<Utc>) -> Self {
        Self {
            datetime: datetime.fixed_offset(),
        }
    }

    /// The J2000 reference epoch, 2000-01-01T12:00:00Z
    pub fn j2000() -> Self {
        Self::from_utc(DateTime::<Utc>::default() + Duration::seconds(J2000_UNIX_SECONDS))
    }

    /// Parse an RFC 3339 timestamp such as `2024-04-08T18:17:00-05:00`
    pub fn parse_rfc3339(text: &str) -> Result<Self> {
        DateTime::parse_from_rfc3339(text.trim())
            .map(Self::new)
            .map_err(|e| TimeError::ParseError(format!("'{}': {}", text, e)))
    }

    /// Create an instant from calendar components written in a fixed offset
    ///
    /// `utc_offset_minutes` is east-positive, so `-300` is UTC-05:00.
    #[allow(clippy::too_many_arguments)]
    pub fn from_calendar(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        millisecond: u32,
        utc_offset_minutes: i32,
    ) -> Result<Self> {
        let offset = utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| {
                TimeError::OutOfRange(format!("UTC offset of {} minutes", utc_offset_minutes))
            })?;

        let naive = NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_milli_opt(hour, minute, second, millisecond))
            .ok_or_else(|| {
                TimeError::CalendarError(format!(
                    "{:04}-{:02}-{:02} {:02}:{:02}:{:02}.{:03}",
                    year, month, day, hour, minute, second, millisecond
                ))
            })?;

        offset
            .from_local_datetime(&naive)
            .single()
            .map(Self::new)
            .ok_or_else(|| TimeError::CalendarError(format!("ambiguous local time {}", naive)))
    }

    /// Create an instant from UTC calendar components
    pub fn from_utc_calendar(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        millisecond: u32,
    ) -> Result<Self> {
        Self::from_calendar(year, month, day, hour, minute, second, millisecond, 0)
    }

    /// Create an instant from milliseconds since the Unix epoch
    pub fn from_unix_millis(millis: i64) -> Result<Self> {
        DateTime::<Utc>::from_timestamp_millis(millis)
            .map(Self::from_utc)
            .ok_or_else(|| TimeError::OutOfRange(format!("{} ms since the Unix epoch", millis)))
    }

    /// Create an instant from a Julian Day, rounded to the millisecond
    pub fn from_julian_day(jd: f64) -> Result<Self> {
        let millis = ((jd - UNIX_EPOCH_JD) * DAY_S * 1_000.0).round();
        if !millis.is_finite() || millis.abs() >= i64::MAX as f64 {
            return Err(TimeError::OutOfRange(format!("Julian day {}", jd)));
        }
        Self::from_unix_millis(millis as i64)
    }

    /// The underlying datetime, in the offset the instant was created with
    pub fn datetime(&self) -> DateTime<FixedOffset> {
        self.datetime
    }

    /// The instant expressed in UTC
    pub fn utc(&self) -> DateTime<Utc> {
        self.datetime.with_timezone(&Utc)
    }

    /// Offset from UTC in seconds (east positive)
    pub fn offset_seconds(&self) -> i32 {
        self.datetime.offset().local_minus_utc()
    }

    /// Julian Day of this instant
    pub fn julian_day(&self) -> f64 {
        to_julian_day(self)
    }

    /// Days elapsed from `reference` to this instant (negative if earlier)
    pub fn days_since(&self, reference: &Instant) -> f64 {
        days_since(self, reference)
    }

    /// Derive the astronomical time scale values for this instant
    pub fn astronomical_time(&self) -> AstronomicalTime {
        AstronomicalTime::from_instant(self)
    }

    /// Shift the instant, returning `None` outside chrono's representable range
    pub fn checked_add(&self, duration: Duration) -> Option<Instant> {
        self.datetime.checked_add_signed(duration).map(Self::new)
    }
}

/// Julian Day of an instant
///
/// Gregorian Julian Day Number of the UTC civil date plus the fractional day
/// elapsed since the preceding noon.
pub fn to_julian_day(instant: &Instant) -> f64 {
    let utc = instant.utc();
    let jdn = calendar::compute_julian_day(utc.year(), utc.month(), utc.day());
    let seconds_of_day =
        utc.num_seconds_from_midnight() as f64 + utc.nanosecond() as f64 / 1_000_000_000.0;

    jdn as f64 - 0.5 + seconds_of_day / DAY_S
}

/// Days elapsed from `reference` to `instant`
///
/// Computed from the exact duration between the two instants, so an instant
/// equal to the reference yields exactly 0.0.
pub fn days_since(instant: &Instant, reference: &Instant) -> f64 {
    let elapsed = instant.utc() - reference.utc();
    elapsed.num_seconds() as f64 / DAY_S + elapsed.subsec_nanos() as f64 / DAY_NS
}

/// Continuous astronomical time derived from an [`Instant`]
///
/// Always recomputed from the instant; never stored on its own.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AstronomicalTime {
    /// Julian Day
    pub julian_day: f64,
    /// Days since the J2000 epoch
    pub days_since_epoch: f64,
}

impl AstronomicalTime {
    /// Derive the time scale values of an instant
    pub fn from_instant(instant: &Instant) -> Self {
        Self {
            julian_day: to_julian_day(instant),
            days_since_epoch: days_since(instant, &Instant::j2000()),
        }
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.datetime.to_rfc3339_opts(SecondsFormat::Millis, true)
        )
    }
}

impl FromStr for Instant {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_rfc3339(s)
    }
}

impl From<DateTime<Utc>> for Instant {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::from_utc(dt)
    }
}

impl From<DateTime<FixedOffset>> for Instant {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        Self::new(dt)
    }
}

/// Panics if the result leaves chrono's range, like `DateTime + Duration`
impl Add<Duration> for Instant {
    type Output = Instant;

    fn add(self, duration: Duration) -> Self::Output {
        Instant::new(self.datetime + duration)
    }
}

/// Panics if the result leaves chrono's range, like `DateTime - Duration`
impl Sub<Duration> for Instant {
    type Output = Instant;

    fn sub(self, duration: Duration) -> Self::Output {
        Instant::new(self.datetime - duration)
    }
}

impl Sub<Instant> for Instant {
    type Output = Duration;

    fn sub(self, other: Instant) -> Self::Output {
        self.utc() - other.utc()
    }
}

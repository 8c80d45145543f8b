//! Time windows on a calendar date.

use std::fmt;

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use super::ValidationError;
use crate::error::{Error, Result};

/// Storage and display format for dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Storage and display format for times.
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// A half-open `[start, end)` window on a single date.
///
/// Times are kept at whole-second precision and `start` is always strictly
/// before `end`.
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, NaiveTime};
/// use roombook::TimeSlot;
///
/// let date = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
/// let nine = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
/// let ten = NaiveTime::from_hms_opt(10, 0, 0).unwrap();
///
/// assert!(TimeSlot::new(date, nine, ten).is_ok());
/// assert!(TimeSlot::new(date, ten, nine).is_err());
/// assert!(TimeSlot::new(date, ten, ten).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawSlot")]
pub struct TimeSlot {
    date: NaiveDate,
    start: NaiveTime,
    end: NaiveTime,
}

/// Unchecked wire form of a [`TimeSlot`].
#[derive(Deserialize)]
struct RawSlot {
    date: NaiveDate,
    start: NaiveTime,
    end: NaiveTime,
}

impl TryFrom<RawSlot> for TimeSlot {
    type Error = Error;

    fn try_from(raw: RawSlot) -> Result<Self> {
        Self::new(raw.date, raw.start, raw.end)
    }
}

impl TimeSlot {
    /// Creates a slot, dropping sub-second precision.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInterval`] if `start` is not before `end`.
    pub fn new(date: NaiveDate, start: NaiveTime, end: NaiveTime) -> Result<Self> {
        let start = whole_seconds(start);
        let end = whole_seconds(end);
        if start >= end {
            return Err(Error::InvalidInterval { date, start, end });
        }
        Ok(Self { date, start, end })
    }

    /// Parses a slot from text as typed by an operator.
    ///
    /// Dates use `YYYY-MM-DD`; times accept `HH:MM` or `HH:MM:SS`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] for unparseable text and
    /// [`Error::InvalidInterval`] if the window is empty or reversed.
    pub fn parse(date: &str, start: &str, end: &str) -> Result<Self> {
        let date = parse_date(date)?;
        let start = parse_time("start", start)?;
        let end = parse_time("end", end)?;
        Self::new(date, start, end)
    }

    /// Returns the date.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the inclusive start time.
    #[must_use]
    pub const fn start(&self) -> NaiveTime {
        self.start
    }

    /// Returns the exclusive end time.
    #[must_use]
    pub const fn end(&self) -> NaiveTime {
        self.end
    }

    /// Returns `true` if both slots share the date and their windows
    /// intersect. Windows that only touch do not overlap.
    ///
    /// # Examples
    ///
    /// ```
    /// use roombook::TimeSlot;
    ///
    /// let a = TimeSlot::parse("2025-07-01", "09:00", "10:00").unwrap();
    /// let b = TimeSlot::parse("2025-07-01", "10:00", "11:00").unwrap();
    /// let c = TimeSlot::parse("2025-07-02", "09:00", "10:00").unwrap();
    ///
    /// assert!(!a.overlaps(&b));
    /// assert!(!a.overlaps(&c));
    /// assert!(a.overlaps(&a));
    /// ```
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.date == other.date && self.start < other.end && other.start < self.end
    }

    /// Date formatted for storage.
    #[must_use]
    pub fn date_text(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    /// Start time formatted for storage.
    #[must_use]
    pub fn start_text(&self) -> String {
        self.start.format(TIME_FORMAT).to_string()
    }

    /// End time formatted for storage.
    #[must_use]
    pub fn end_text(&self) -> String {
        self.end.format(TIME_FORMAT).to_string()
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}-{}",
            self.date_text(),
            self.start_text(),
            self.end_text()
        )
    }
}

fn whole_seconds(time: NaiveTime) -> NaiveTime {
    time.with_nanosecond(0).unwrap_or(time)
}

/// Parses a `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns an error naming the `date` field if the text is not a valid date.
pub fn parse_date(text: &str) -> std::result::Result<NaiveDate, ValidationError> {
    let text = text.trim();
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .map_err(|_| ValidationError::new("date", format!("'{text}' is not a YYYY-MM-DD date")))
}

/// Parses an `HH:MM:SS` or `HH:MM` time.
///
/// # Errors
///
/// Returns an error naming `field` if the text is not a valid time.
///
/// # Examples
///
/// ```
/// use roombook::model::parse_time;
///
/// assert_eq!(parse_time("start", "09:30").unwrap().to_string(), "09:30:00");
/// assert!(parse_time("start", "9.30").is_err());
/// ```
pub fn parse_time(field: &str, text: &str) -> std::result::Result<NaiveTime, ValidationError> {
    let text = text.trim();
    NaiveTime::parse_from_str(text, TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(text, "%H:%M"))
        .map_err(|_| ValidationError::new(field, format!("'{text}' is not an HH:MM time")))
}

//! Calendar date representation
//!
//! Wraps an absolute instant with dual textual forms: the user-entry format
//! (`dd-MM-yyyy` with an optional `HHmm` time) and a human-readable display
//! format. Time-of-day defaults to midnight when omitted.

use std::fmt;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// User-entry format with a time of day
const INPUT_FORMAT_WITH_TIME: &str = "%d-%m-%Y %H%M";

/// User-entry format without a time of day (implies midnight)
const INPUT_FORMAT_DATE_ONLY: &str = "%d-%m-%Y";

/// A point in time attached to a schedule entry
///
/// Immutable value type; operations that "move" a date return a new instance.
/// Comparison and equality are by instant, so a date-only value equals a
/// timed value at midnight of the same day.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EntryDate {
    instant: NaiveDateTime,
    has_time: bool,
}

impl EntryDate {
    /// Create a date from an instant that carries a meaningful time of day
    pub fn with_time(instant: NaiveDateTime) -> Self {
        Self {
            instant,
            has_time: true,
        }
    }

    /// Create a date-only value at midnight of the given day
    pub fn date_only(date: NaiveDate) -> Self {
        Self {
            instant: date.and_time(NaiveTime::MIN),
            has_time: false,
        }
    }

    /// Parse a date from user-entry text
    ///
    /// Accepts `dd-MM-yyyy HHmm` or bare `dd-MM-yyyy` (midnight). Single-digit
    /// days and months are tolerated (`3-12-2019`).
    pub fn parse(text: &str) -> Result<Self, DateParseError> {
        let text = text.trim();

        if let Ok(instant) = NaiveDateTime::parse_from_str(text, INPUT_FORMAT_WITH_TIME) {
            return Ok(Self::with_time(instant));
        }

        if let Ok(date) = NaiveDate::parse_from_str(text, INPUT_FORMAT_DATE_ONLY) {
            return Ok(Self::date_only(date));
        }

        Err(DateParseError::InvalidFormat(text.to_string()))
    }

    /// Get the underlying instant
    pub fn instant(&self) -> NaiveDateTime {
        self.instant
    }

    /// Get the calendar day this date falls on
    pub fn date(&self) -> NaiveDate {
        self.instant.date()
    }

    /// Check whether a time of day was given when this date was created
    pub fn has_time(&self) -> bool {
        self.has_time
    }

    /// The canonical user-entry form (`dd-MM-yyyy` or `dd-MM-yyyy HHmm`)
    ///
    /// Single-digit days are normalized to the zero-padded form.
    pub fn input_string(&self) -> String {
        if self.has_time {
            self.instant.format(INPUT_FORMAT_WITH_TIME).to_string()
        } else {
            self.instant.format(INPUT_FORMAT_DATE_ONLY).to_string()
        }
    }

    /// The human-readable display form (`04 Dec 2019` or `04 Dec 2019, 1600`)
    pub fn display_string(&self) -> String {
        if self.has_time {
            self.instant.format("%d %b %Y, %H%M").to_string()
        } else {
            self.instant.format("%d %b %Y").to_string()
        }
    }

    /// Return a new date shifted by `days`, preserving the time of day
    ///
    /// Used for recurring-entry expansion, where every occurrence keeps the
    /// original start and end times.
    pub fn add_days(&self, days: i64) -> Self {
        Self {
            instant: self.instant + Duration::days(days),
            has_time: self.has_time,
        }
    }

    /// Return a new date shifted by `days` and reset to midnight
    ///
    /// Used for free-day scanning and calendar navigation, where only the
    /// calendar day matters.
    pub fn add_days_at_midnight(&self, days: i64) -> Self {
        Self::date_only(self.instant.date() + Duration::days(days))
    }

    /// The `MM-yyyy` month key this date falls in, e.g. `12-2019`
    pub fn month_key(&self) -> String {
        self.instant.format("%m-%Y").to_string()
    }
}

impl PartialEq for EntryDate {
    fn eq(&self, other: &Self) -> bool {
        self.instant == other.instant
    }
}

impl Eq for EntryDate {}

impl PartialOrd for EntryDate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EntryDate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.instant.cmp(&other.instant)
    }
}

impl fmt::Display for EntryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_string())
    }
}

/// Error type for date parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateParseError {
    #[error("Invalid date format: '{0}' (expected dd-MM-yyyy or dd-MM-yyyy HHmm)")]
    InvalidFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_time() {
        let date = EntryDate::parse("04-12-2019 1600").unwrap();
        assert!(date.has_time());
        assert_eq!(date.input_string(), "04-12-2019 1600");
        assert_eq!(date.display_string(), "04 Dec 2019, 1600");
    }

    #[test]
    fn test_parse_date_only_implies_midnight() {
        let date = EntryDate::parse("02-12-2019").unwrap();
        assert!(!date.has_time());
        assert_eq!(date.input_string(), "02-12-2019");
        assert_eq!(
            date.instant(),
            NaiveDate::from_ymd_opt(2019, 12, 2)
                .unwrap()
                .and_time(NaiveTime::MIN)
        );
    }

    #[test]
    fn test_parse_single_digit_day() {
        let date = EntryDate::parse("3-12-2019 1400").unwrap();
        assert_eq!(date.input_string(), "03-12-2019 1400");
    }

    #[test]
    fn test_parse_invalid() {
        assert!(EntryDate::parse("2019/12/04").is_err());
        assert!(EntryDate::parse("04-12-2019 4pm").is_err());
        assert!(EntryDate::parse("").is_err());
        assert!(EntryDate::parse("32-01-2020").is_err());
    }

    #[test]
    fn test_ordering_by_instant() {
        let earlier = EntryDate::parse("03-12-2019 1400").unwrap();
        let later = EntryDate::parse("03-12-2019 1500").unwrap();
        let other_day = EntryDate::parse("04-12-2019").unwrap();

        assert!(earlier < later);
        assert!(later < other_day);
    }

    #[test]
    fn test_midnight_equality_ignores_has_time() {
        let date_only = EntryDate::parse("04-12-2019").unwrap();
        let midnight = EntryDate::parse("04-12-2019 0000").unwrap();
        assert_eq!(date_only, midnight);
    }

    #[test]
    fn test_add_days_preserves_time() {
        let date = EntryDate::parse("28-11-2019 1400").unwrap();
        let shifted = date.add_days(4);
        assert_eq!(shifted.input_string(), "02-12-2019 1400");
    }

    #[test]
    fn test_add_days_at_midnight_resets_time() {
        let date = EntryDate::parse("28-11-2019 1400").unwrap();
        let shifted = date.add_days_at_midnight(7);
        assert!(!shifted.has_time());
        assert_eq!(shifted.input_string(), "05-12-2019");
    }

    #[test]
    fn test_month_key() {
        let date = EntryDate::parse("04-12-2019 1600").unwrap();
        assert_eq!(date.month_key(), "12-2019");

        let january = EntryDate::parse("15-01-2020").unwrap();
        assert_eq!(january.month_key(), "01-2020");
    }
}

//! Shift model.
//!
//! A shift is a labeled block of working time on a given day of the week
//! that must be staffed by a fixed number of employees.
//!
//! # Identity
//! Shifts are identified by a [`ShiftKey`]: the day of the week plus a
//! time-of-day label. The textual form is `"<Day> <Label>"`, e.g.
//! `"Sun Morning"` or `"Fri Evening"`. The day component is the calendar
//! day used by the no-double-booking rule.

use chrono::{Duration, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Composite shift identifier: day of week × time-of-day label.
///
/// Serialized as its textual form (`"Mon Morning"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ShiftKey {
    /// Calendar day of the week.
    pub day: Weekday,
    /// Time-of-day label (e.g., "Morning", "Evening").
    pub label: String,
}

/// Error parsing a [`ShiftKey`] from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseShiftKeyError {
    /// Text has no label after the day.
    #[error("shift '{0}' has no time-of-day label")]
    MissingLabel(String),
    /// Day component is not a weekday name.
    #[error("shift '{0}' does not start with a weekday")]
    InvalidDay(String),
}

impl ShiftKey {
    /// Creates a shift key.
    pub fn new(day: Weekday, label: impl Into<String>) -> Self {
        Self {
            day,
            label: label.into(),
        }
    }
}

impl fmt::Display for ShiftKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.day, self.label)
    }
}

impl FromStr for ShiftKey {
    type Err = ParseShiftKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (day, label) = trimmed
            .split_once(char::is_whitespace)
            .ok_or_else(|| ParseShiftKeyError::MissingLabel(trimmed.to_string()))?;
        let label = label.trim();
        if label.is_empty() {
            return Err(ParseShiftKeyError::MissingLabel(trimmed.to_string()));
        }
        let day = day
            .parse::<Weekday>()
            .map_err(|_| ParseShiftKeyError::InvalidDay(trimmed.to_string()))?;
        Ok(Self::new(day, label))
    }
}

impl TryFrom<String> for ShiftKey {
    type Error = ParseShiftKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ShiftKey> for String {
    fn from(key: ShiftKey) -> Self {
        key.to_string()
    }
}

/// A shift to be staffed.
///
/// Carries its fixed working hours and the exact number of employees
/// that must be assigned to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    /// Shift identifier.
    pub key: ShiftKey,
    /// Start time of day.
    pub start: NaiveTime,
    /// End time of day. Must be after `start`.
    pub end: NaiveTime,
    /// Required headcount (must be positive).
    pub required: u32,
}

impl Shift {
    /// Creates a new shift.
    pub fn new(key: ShiftKey, start: NaiveTime, end: NaiveTime, required: u32) -> Self {
        Self {
            key,
            start,
            end,
            required,
        }
    }

    /// Day of the week this shift falls on.
    #[inline]
    pub fn day(&self) -> Weekday {
        self.key.day
    }

    /// Length of the shift.
    pub fn duration(&self) -> Duration {
        self.end.signed_duration_since(self.start)
    }

    /// Length of the shift in hours.
    pub fn hours(&self) -> f64 {
        self.duration().num_minutes() as f64 / 60.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_parse_shift_key() {
        let key: ShiftKey = "Sun Morning".parse().unwrap();
        assert_eq!(key.day, Weekday::Sun);
        assert_eq!(key.label, "Morning");
        assert_eq!(key.to_string(), "Sun Morning");
    }

    #[test]
    fn test_parse_shift_key_full_day_name() {
        let key: ShiftKey = "  friday   Late Evening ".parse().unwrap();
        assert_eq!(key, ShiftKey::new(Weekday::Fri, "Late Evening"));
    }

    #[test]
    fn test_parse_shift_key_errors() {
        assert_eq!(
            "Morning".parse::<ShiftKey>().unwrap_err(),
            ParseShiftKeyError::MissingLabel("Morning".into())
        );
        assert_eq!(
            "Someday Morning".parse::<ShiftKey>().unwrap_err(),
            ParseShiftKeyError::InvalidDay("Someday Morning".into())
        );
    }

    #[test]
    fn test_shift_key_serde_as_text() {
        let key = ShiftKey::new(Weekday::Tue, "Evening");
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"Tue Evening\"");

        let back: ShiftKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
        assert!(serde_json::from_str::<ShiftKey>("\"Evening\"").is_err());
    }

    #[test]
    fn test_shift_duration() {
        let shift = Shift::new(
            ShiftKey::new(Weekday::Fri, "Morning"),
            hm(9, 30),
            hm(15, 30),
            4,
        );
        assert_eq!(shift.day(), Weekday::Fri);
        assert_eq!(shift.duration(), Duration::hours(6));
        assert!((shift.hours() - 6.0).abs() < 1e-10);
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::Date;
use time::macros::format_description;

// Dates travel as `YYYY-MM-DD`, the value a date input produces.
time::serde::format_description!(calendar_date, Date, "[year]-[month]-[day]");

/// Parses a `YYYY-MM-DD` calendar date.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid
/// calendar date in that format.
pub fn parse_date(value: &str) -> Result<Date, DomainError> {
    Date::parse(value.trim(), format_description!("[year]-[month]-[day]")).map_err(|err| {
        DomainError::DateParseError {
            date_string: value.to_string(),
            error: err.to_string(),
        }
    })
}

/// A selectable seating time, e.g. `18:00`.
///
/// Slots are opaque labels supplied by whoever computes availability.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeSlot {
    value: String,
}

impl TimeSlot {
    /// Creates a new `TimeSlot`.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Builds the `HH:MM` slot for a number of minutes past midnight.
    #[must_use]
    pub fn from_minutes(minutes: u16) -> Self {
        Self::new(format!("{:02}:{:02}", minutes / 60, minutes % 60))
    }

    /// Returns the slot label.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns `true` if the slot label is blank.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.trim().is_empty()
    }
}

impl std::fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

/// The machine value of a selected occasion, e.g. `birthday`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OccasionValue {
    value: String,
}

impl OccasionValue {
    /// Creates a new `OccasionValue`.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Returns the occasion value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns `true` if no occasion is actually named.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.trim().is_empty()
    }
}

impl std::fmt::Display for OccasionValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

/// The in-progress reservation as the form currently holds it.
///
/// Any field may still be unset.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReservationDraft {
    /// The selected date.
    #[serde(with = "calendar_date::option")]
    pub date: Option<Date>,
    /// The selected seating time.
    pub time: Option<TimeSlot>,
    /// The party size exactly as entered.
    pub guests: Option<String>,
    /// The selected occasion.
    pub occasion: Option<OccasionValue>,
}

/// A validated reservation handed to the submit collaborator.
///
/// `guests` keeps the entered text; it is never coerced to an integer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    /// The reserved date.
    #[serde(with = "calendar_date")]
    pub date: Date,
    /// The seating time.
    pub time: TimeSlot,
    /// The party size exactly as entered.
    pub guests: String,
    /// The occasion being celebrated.
    pub occasion: OccasionValue,
}

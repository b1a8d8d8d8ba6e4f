// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Why a single form field failed validation.
///
/// The `Display` output is the message shown next to the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationError {
    /// No date was selected.
    MissingDate,
    /// The selected date is before today.
    PastDate,
    /// The selected date falls on a Sunday.
    ClosedOnSunday,
    /// No time slot was selected.
    MissingTime,
    /// The guest count is missing or does not parse as a number.
    GuestsNotNumeric,
    /// The guest count is outside the accepted party size.
    GuestsOutOfRange,
    /// No occasion was selected.
    MissingOccasion,
}

impl ValidationError {
    /// Returns the user-facing message for this failure.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::MissingDate => "Please select a date",
            Self::PastDate => "Please select a future date",
            Self::ClosedOnSunday => "We are closed on Sundays",
            Self::MissingTime => "Please select a time",
            Self::GuestsNotNumeric => "Please enter a number",
            Self::GuestsOutOfRange => "Number of guests must be between 1 and 10",
            Self::MissingOccasion => "Please select an occasion",
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ValidationError {}

/// Errors raised while building domain values from raw input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Failed to parse a date from a string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// A service schedule was configured with unusable bounds.
    InvalidSchedule {
        /// Description of the problem.
        reason: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::InvalidSchedule { reason } => {
                write!(f, "Invalid service schedule: {reason}")
            }
        }
    }
}

impl std::error::Error for DomainError {}

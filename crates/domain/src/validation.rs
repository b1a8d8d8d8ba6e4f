// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Field validators for the booking form.
//!
//! Every validator is pure and checks its rules in a fixed order, so the
//! most basic failure (a missing value) is reported before a more specific
//! one (a range or weekday rule). The first failing rule wins.

use crate::error::ValidationError;
use crate::numeric::parse_finite;
use crate::types::{OccasionValue, TimeSlot};
use time::{Date, Weekday};

/// Outcome of validating one field. `Ok(())` means the value is acceptable.
pub type ValidationResult = Result<(), ValidationError>;

/// Smallest accepted party size.
pub const MIN_GUESTS: f64 = 1.0;

/// Largest accepted party size.
pub const MAX_GUESTS: f64 = 10.0;

/// Validates the reservation date against the current calendar day.
///
/// `today` is the restaurant's current local date; a reservation for
/// today is accepted.
///
/// # Errors
///
/// Returns, in order of precedence:
/// - `ValidationError::MissingDate` if no date is selected
/// - `ValidationError::PastDate` if the date is before `today`
/// - `ValidationError::ClosedOnSunday` if the date is a Sunday
pub fn validate_date(date: Option<Date>, today: Date) -> ValidationResult {
    let Some(date) = date else {
        return Err(ValidationError::MissingDate);
    };

    if date < today {
        return Err(ValidationError::PastDate);
    }

    if date.weekday() == Weekday::Sunday {
        return Err(ValidationError::ClosedOnSunday);
    }

    Ok(())
}

/// Validates that a seating time has been chosen.
///
/// # Errors
///
/// Returns `ValidationError::MissingTime` if the slot is absent or blank.
pub fn validate_time(time: Option<&TimeSlot>) -> ValidationResult {
    match time {
        Some(slot) if !slot.is_empty() => Ok(()),
        _ => Err(ValidationError::MissingTime),
    }
}

/// Validates the party size.
///
/// The value stays a string; it is parsed only for the range comparison
/// and fractional values inside the range are accepted.
///
/// # Errors
///
/// Returns, in order of precedence:
/// - `ValidationError::GuestsNotNumeric` if the value is missing or not a number
/// - `ValidationError::GuestsOutOfRange` if the number is outside `1..=10`
pub fn validate_guests(guests: Option<&str>) -> ValidationResult {
    let Some(count) = guests.and_then(parse_finite) else {
        return Err(ValidationError::GuestsNotNumeric);
    };

    if !(MIN_GUESTS..=MAX_GUESTS).contains(&count) {
        return Err(ValidationError::GuestsOutOfRange);
    }

    Ok(())
}

/// Validates that an occasion has been chosen.
///
/// Membership in the configured option list is not checked here.
///
/// # Errors
///
/// Returns `ValidationError::MissingOccasion` if the occasion is absent or blank.
pub fn validate_occasion(occasion: Option<&OccasionValue>) -> ValidationResult {
    match occasion {
        Some(value) if !value.is_empty() => Ok(()),
        _ => Err(ValidationError::MissingOccasion),
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod clock;
mod error;
mod numeric;
mod occasion;
mod schedule;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{DomainError, ValidationError};
pub use numeric::is_numeric;
pub use occasion::{OccasionOption, OccasionOptions};
pub use schedule::ServiceSchedule;

// Re-export public types
pub use types::{OccasionValue, Reservation, ReservationDraft, TimeSlot, parse_date};
pub use validation::{
    MAX_GUESTS, MIN_GUESTS, ValidationResult, validate_date, validate_guests, validate_occasion,
    validate_time,
};

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use table_booking_domain::{OccasionValue, TimeSlot};
use time::Date;

/// A user interaction with the booking form, expressed as data.
///
/// Feeding events through `BookingForm::handle` is equivalent to calling
/// the matching change or submit method directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// The date input changed.
    DateChanged(Option<Date>),
    /// A time slot was picked or cleared.
    TimeChanged(Option<TimeSlot>),
    /// The guest count input changed.
    GuestsChanged(Option<String>),
    /// An occasion was picked or cleared.
    OccasionChanged(Option<OccasionValue>),
    /// The form was submitted.
    Submit,
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use table_booking_domain::{Reservation, TimeSlot};
use time::Date;

/// Everything the booking form needs from the outside world.
///
/// The form owns its host but never decides how availability is computed
/// or what happens to a submitted reservation.
pub trait BookingHost {
    /// Returns the time slots currently offered.
    fn available_times(&self) -> &[TimeSlot];

    /// Called whenever the date field changes, before the new date is
    /// stored, so availability can be recomputed for it.
    fn dispatch_available_times(&mut self, date: Option<Date>);

    /// Receives a reservation that passed every validator.
    fn on_submit(&mut self, reservation: Reservation);
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use table_booking::BookingHost;
use table_booking_domain::{Reservation, ServiceSchedule, TimeSlot};
use time::Date;
use tracing::debug;

/// Host that offers seatings from a `ServiceSchedule` and keeps every
/// reservation it receives.
#[derive(Debug, Clone)]
pub struct ScheduleHost {
    schedule: ServiceSchedule,
    times: Vec<TimeSlot>,
    submitted: Vec<Reservation>,
}

impl ScheduleHost {
    /// Creates a host whose initial time list is the one for `today`.
    #[must_use]
    pub fn new(schedule: ServiceSchedule, today: Date) -> Self {
        Self {
            times: schedule.slots_for(today),
            schedule,
            submitted: Vec::new(),
        }
    }

    /// Consumes the host, returning the reservations it received.
    #[must_use]
    pub fn into_submitted(self) -> Vec<Reservation> {
        self.submitted
    }
}

impl BookingHost for ScheduleHost {
    fn available_times(&self) -> &[TimeSlot] {
        &self.times
    }

    fn dispatch_available_times(&mut self, date: Option<Date>) {
        self.times = date.map_or_else(Vec::new, |date: Date| self.schedule.slots_for(date));
        debug!(date = ?date, slots = self.times.len(), "Refreshed available times");
    }

    fn on_submit(&mut self, reservation: Reservation) {
        self.submitted.push(reservation);
    }
}

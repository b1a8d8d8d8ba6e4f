// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{BookingForm, BookingHost};
use std::sync::Arc;
use table_booking_domain::{FixedClock, OccasionValue, Reservation, TimeSlot};
use time::Date;
use time::macros::date;

/// A Wednesday.
pub const TODAY: Date = date!(2026 - 10 - 14);
/// A Thursday.
pub const TOMORROW: Date = date!(2026 - 10 - 15);
pub const NEXT_SUNDAY: Date = date!(2026 - 10 - 18);
pub const YESTERDAY: Date = date!(2026 - 10 - 13);

/// Host that records every call it receives.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub times: Vec<TimeSlot>,
    pub dispatched: Vec<Option<Date>>,
    pub submitted: Vec<Reservation>,
}

impl BookingHost for RecordingHost {
    fn available_times(&self) -> &[TimeSlot] {
        &self.times
    }

    fn dispatch_available_times(&mut self, date: Option<Date>) {
        self.dispatched.push(date);
        self.times = match date {
            Some(_) => vec![TimeSlot::new("17:00"), TimeSlot::new("18:00")],
            None => Vec::new(),
        };
    }

    fn on_submit(&mut self, reservation: Reservation) {
        self.submitted.push(reservation);
    }
}

pub fn create_test_form() -> BookingForm<RecordingHost> {
    BookingForm::new(RecordingHost::default(), Arc::new(FixedClock::new(TODAY)))
}

/// A form with every field filled in validly.
pub fn create_filled_form() -> BookingForm<RecordingHost> {
    let mut form: BookingForm<RecordingHost> = create_test_form();
    form.change_date(Some(TOMORROW));
    form.change_time(Some(TimeSlot::new("18:00")));
    form.change_guests(Some(String::from("4")));
    form.change_occasion(Some(OccasionValue::new("anniversary")));
    form
}

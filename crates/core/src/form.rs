// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The booking form controller.
//!
//! ## Invariants
//!
//! - The host sees a new date before the date field stores it
//! - Submit re-validates every field, touched or not, in the order
//!   date, time, guests, occasion
//! - The host receives a reservation only if every field is valid
//! - A rejected submit changes nothing, not even the touched flags

use crate::event::FormEvent;
use crate::field::FieldState;
use crate::host::BookingHost;
use crate::state::{FieldRejection, FormField, FormPhase, SubmitOutcome};
use std::sync::Arc;
use table_booking_domain::{
    Clock, OccasionOptions, OccasionValue, Reservation, ReservationDraft, TimeSlot,
    ValidationError, validate_date, validate_guests, validate_occasion, validate_time,
};
use time::Date;
use tracing::{debug, info, warn};

/// A restaurant booking form collecting date, time, party size and occasion.
pub struct BookingForm<H> {
    host: H,
    occasions: OccasionOptions,
    date: FieldState<Date>,
    time: FieldState<TimeSlot>,
    guests: FieldState<String>,
    occasion: FieldState<OccasionValue>,
    phase: FormPhase,
}

impl<H: BookingHost> BookingForm<H> {
    /// Creates an empty form offering the default occasions.
    ///
    /// # Arguments
    ///
    /// * `host` - Supplies time slots and receives the reservation
    /// * `clock` - Source of "today" for the date rule
    #[must_use]
    pub fn new(host: H, clock: Arc<dyn Clock>) -> Self {
        Self::with_occasions(host, clock, OccasionOptions::default())
    }

    /// Creates an empty form offering the given occasions.
    #[must_use]
    pub fn with_occasions(host: H, clock: Arc<dyn Clock>, occasions: OccasionOptions) -> Self {
        Self {
            host,
            occasions,
            date: FieldState::new(None, move |date: Option<&Date>| {
                validate_date(date.copied(), clock.today())
            }),
            time: FieldState::new(None, validate_time),
            guests: FieldState::new(None, |guests: Option<&String>| {
                validate_guests(guests.map(String::as_str))
            }),
            occasion: FieldState::new(None, validate_occasion),
            phase: FormPhase::Editing,
        }
    }

    /// Handles a change of the date input.
    ///
    /// The host is asked to refresh availability for `date` first; only
    /// then does the date field take the new value.
    pub fn change_date(&mut self, date: Option<Date>) {
        debug!(date = ?date, "Dispatching available times for date change");
        // Order is observable only here: the host has no view of the field.
        self.host.dispatch_available_times(date);
        self.date.set(date);
        self.begin_edit();
    }

    /// Handles a change of the time select.
    pub fn change_time(&mut self, time: Option<TimeSlot>) {
        debug!(time = ?time, "Time changed");
        self.time.set(time);
        self.begin_edit();
    }

    /// Handles a change of the guests input.
    pub fn change_guests(&mut self, guests: Option<String>) {
        debug!(guests = ?guests, "Guests changed");
        self.guests.set(guests);
        self.begin_edit();
    }

    /// Handles a change of the occasion select.
    pub fn change_occasion(&mut self, occasion: Option<OccasionValue>) {
        debug!(occasion = ?occasion, "Occasion changed");
        self.occasion.set(occasion);
        self.begin_edit();
    }

    /// Submits the form.
    ///
    /// All four validators run against the current values regardless of
    /// whether the fields were touched. The first failure aborts the
    /// submission. Otherwise the host receives the reservation once per
    /// submit, including a repeated submit of an unchanged draft, and the
    /// form reports `FormPhase::Submitted`.
    pub fn submit(&mut self) -> SubmitOutcome {
        let reservation: Reservation = match self.validated_reservation() {
            Ok(reservation) => reservation,
            Err(rejection) => {
                warn!(
                    field = rejection.field.name(),
                    error = %rejection.error,
                    "Reservation rejected"
                );
                return SubmitOutcome::Rejected(rejection);
            }
        };

        info!(
            date = %reservation.date,
            time = %reservation.time,
            guests = %reservation.guests,
            occasion = %reservation.occasion,
            "Submitting reservation"
        );
        self.host.on_submit(reservation);
        self.phase = FormPhase::Submitted;

        SubmitOutcome::Submitted
    }

    /// Applies a user event to the form.
    ///
    /// Returns the submit outcome for `FormEvent::Submit`, `None` otherwise.
    pub fn handle(&mut self, event: FormEvent) -> Option<SubmitOutcome> {
        match event {
            FormEvent::DateChanged(date) => self.change_date(date),
            FormEvent::TimeChanged(time) => self.change_time(time),
            FormEvent::GuestsChanged(guests) => self.change_guests(guests),
            FormEvent::OccasionChanged(occasion) => self.change_occasion(occasion),
            FormEvent::Submit => return Some(self.submit()),
        }
        None
    }

    /// Returns the time slots the host currently offers.
    #[must_use]
    pub fn available_times(&self) -> &[TimeSlot] {
        self.host.available_times()
    }
}

impl<H> BookingForm<H> {
    /// Returns the occasions this form offers.
    #[must_use]
    pub const fn occasion_options(&self) -> &OccasionOptions {
        &self.occasions
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Returns the date field.
    #[must_use]
    pub const fn date(&self) -> &FieldState<Date> {
        &self.date
    }

    /// Returns the time field.
    #[must_use]
    pub const fn time(&self) -> &FieldState<TimeSlot> {
        &self.time
    }

    /// Returns the guests field.
    #[must_use]
    pub const fn guests(&self) -> &FieldState<String> {
        &self.guests
    }

    /// Returns the occasion field.
    #[must_use]
    pub const fn occasion(&self) -> &FieldState<OccasionValue> {
        &self.occasion
    }

    /// Returns the inline error currently displayed for `field`.
    #[must_use]
    pub fn error(&self, field: FormField) -> Option<ValidationError> {
        match field {
            FormField::Date => self.date.error(),
            FormField::Time => self.time.error(),
            FormField::Guests => self.guests.error(),
            FormField::Occasion => self.occasion.error(),
        }
    }

    /// Returns every inline error currently displayed, in field order.
    #[must_use]
    pub fn visible_errors(&self) -> Vec<FieldRejection> {
        FormField::ALL
            .into_iter()
            .filter_map(|field: FormField| {
                self.error(field)
                    .map(|error: ValidationError| FieldRejection { field, error })
            })
            .collect()
    }

    /// Returns a copy of the values entered so far.
    #[must_use]
    pub fn draft(&self) -> ReservationDraft {
        ReservationDraft {
            date: self.date.value().copied(),
            time: self.time.value().cloned(),
            guests: self.guests.value().cloned(),
            occasion: self.occasion.value().cloned(),
        }
    }

    /// Returns the host.
    #[must_use]
    pub const fn host(&self) -> &H {
        &self.host
    }

    /// Returns the host mutably.
    pub const fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Consumes the form, returning its host.
    #[must_use]
    pub fn into_host(self) -> H {
        self.host
    }

    fn begin_edit(&mut self) {
        if self.phase == FormPhase::Submitted {
            debug!("Edit after submission, starting a new draft");
            self.phase = FormPhase::Editing;
        }
    }

    fn validated_reservation(&self) -> Result<Reservation, FieldRejection> {
        Ok(Reservation {
            date: checked_value(&self.date, FormField::Date)?,
            time: checked_value(&self.time, FormField::Time)?,
            guests: checked_value(&self.guests, FormField::Guests)?,
            occasion: checked_value(&self.occasion, FormField::Occasion)?,
        })
    }
}

/// Validates `state` and returns its value.
fn checked_value<T: Clone>(state: &FieldState<T>, field: FormField) -> Result<T, FieldRejection> {
    state
        .validate()
        .and_then(|()| state.value().cloned().ok_or(field.missing_error()))
        .map_err(|error: ValidationError| FieldRejection { field, error })
}

impl<H: std::fmt::Debug> std::fmt::Debug for BookingForm<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookingForm")
            .field("host", &self.host)
            .field("phase", &self.phase)
            .field("date", &self.date)
            .field("time", &self.time)
            .field("guests", &self.guests)
            .field("occasion", &self.occasion)
            .finish_non_exhaustive()
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Seating times offered for a given date.
//!
//! ## Rules
//!
//! - The restaurant is closed on Sundays (no seatings)
//! - Seatings run at a fixed interval from the first to the last seating
//! - Friday and Saturday use the later last seating
//! - Both bounds are inclusive

use crate::error::DomainError;
use crate::types::TimeSlot;
use time::{Date, Time, Weekday};

/// Dinner service hours used to compute available time slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceSchedule {
    /// First seating, minutes past midnight.
    first_seating: u16,
    /// Last seating Monday to Thursday, minutes past midnight.
    last_seating: u16,
    /// Last seating on Friday and Saturday, minutes past midnight.
    late_last_seating: u16,
    /// Minutes between consecutive seatings.
    interval_minutes: u16,
}

impl ServiceSchedule {
    /// Creates a schedule.
    ///
    /// # Arguments
    ///
    /// * `first_seating` - The earliest seating time
    /// * `last_seating` - The latest seating Monday to Thursday
    /// * `late_last_seating` - The latest seating on Friday and Saturday
    /// * `interval_minutes` - Minutes between seatings
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidSchedule` if the interval is zero or a
    /// last seating comes before the first seating.
    pub fn new(
        first_seating: Time,
        last_seating: Time,
        late_last_seating: Time,
        interval_minutes: u16,
    ) -> Result<Self, DomainError> {
        if interval_minutes == 0 {
            return Err(DomainError::InvalidSchedule {
                reason: String::from("Seating interval must be greater than 0 minutes"),
            });
        }

        let first: u16 = minutes_past_midnight(first_seating);
        let last: u16 = minutes_past_midnight(last_seating);
        let late_last: u16 = minutes_past_midnight(late_last_seating);

        if last < first || late_last < first {
            return Err(DomainError::InvalidSchedule {
                reason: format!(
                    "Last seating must not be before first seating ({first_seating})"
                ),
            });
        }

        Ok(Self {
            first_seating: first,
            last_seating: last,
            late_last_seating: late_last,
            interval_minutes,
        })
    }

    /// Returns the seatings offered on `date`, earliest first.
    #[must_use]
    pub fn slots_for(&self, date: Date) -> Vec<TimeSlot> {
        let last: u16 = match date.weekday() {
            Weekday::Sunday => return Vec::new(),
            Weekday::Friday | Weekday::Saturday => self.late_last_seating,
            _ => self.last_seating,
        };

        (self.first_seating..=last)
            .step_by(usize::from(self.interval_minutes))
            .map(TimeSlot::from_minutes)
            .collect()
    }
}

impl Default for ServiceSchedule {
    /// 17:00 to 22:00 every 30 minutes, until 23:00 on Friday and Saturday.
    fn default() -> Self {
        Self {
            first_seating: 17 * 60,
            last_seating: 22 * 60,
            late_last_seating: 23 * 60,
            interval_minutes: 30,
        }
    }
}

fn minutes_past_midnight(time: Time) -> u16 {
    u16::from(time.hour()) * 60 + u16::from(time.minute())
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Sources of "today" for date validation.
//!
//! "Today" is the calendar day at the restaurant, not at the server, so
//! the system clock is read through the restaurant's declared time zone.

use chrono::{DateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;
use time::{Date, Duration, OffsetDateTime};

/// Supplies the current calendar day.
pub trait Clock: Send + Sync {
    /// Returns the current local date.
    fn today(&self) -> Date;
}

/// Reads the wall clock in a fixed IANA time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemClock {
    tz: Tz,
}

impl SystemClock {
    /// Creates a clock for the given time zone.
    #[must_use]
    pub const fn new(tz: Tz) -> Self {
        Self { tz }
    }

    /// Returns the time zone this clock reports in.
    #[must_use]
    pub const fn timezone(&self) -> Tz {
        self.tz
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new(Tz::UTC)
    }
}

impl Clock for SystemClock {
    fn today(&self) -> Date {
        local_date(OffsetDateTime::now_utc(), self.tz)
    }
}

/// Returns the calendar day in `tz` at the UTC instant `now`.
///
/// The zone offset is looked up for `now` itself, so a DST change cannot
/// fall between reading the offset and applying it.
pub(crate) fn local_date(now: OffsetDateTime, tz: Tz) -> Date {
    let offset_seconds: i32 = DateTime::<Utc>::from_timestamp(now.unix_timestamp(), 0)
        .map_or(0, |instant: DateTime<Utc>| {
            tz.offset_from_utc_datetime(&instant.naive_utc())
                .fix()
                .local_minus_utc()
        });

    (now + Duration::seconds(i64::from(offset_seconds))).date()
}

/// Always reports the same day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    today: Date,
}

impl FixedClock {
    /// Creates a clock pinned to `today`.
    #[must_use]
    pub const fn new(today: Date) -> Self {
        Self { today }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> Date {
        self.today
    }
}

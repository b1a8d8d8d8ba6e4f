// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    OccasionValue, TimeSlot, ValidationError, validate_date, validate_guests, validate_occasion,
    validate_time,
};
use time::macros::date;
use time::{Date, Duration, Weekday};

// A Wednesday.
const TODAY: Date = date!(2026 - 10 - 14);

#[test]
fn test_validate_date_rejects_missing_date() {
    assert_eq!(
        validate_date(None, TODAY),
        Err(ValidationError::MissingDate)
    );
}

#[test]
fn test_validate_date_accepts_tomorrow() {
    assert_eq!(validate_date(Some(date!(2026 - 10 - 15)), TODAY), Ok(()));
}

#[test]
fn test_validate_date_accepts_today() {
    assert_eq!(validate_date(Some(TODAY), TODAY), Ok(()));
}

#[test]
fn test_validate_date_rejects_yesterday() {
    assert_eq!(
        validate_date(Some(date!(2026 - 10 - 13)), TODAY),
        Err(ValidationError::PastDate)
    );
}

#[test]
fn test_validate_date_rejects_every_past_day() {
    for days_back in 1..=400 {
        let past: Date = TODAY - Duration::days(days_back);
        let result = validate_date(Some(past), TODAY);
        assert_eq!(result, Err(ValidationError::PastDate), "failed for {past}");
    }
}

#[test]
fn test_validate_date_past_sunday_reports_past_not_sunday() {
    let past_sunday: Date = date!(2026 - 10 - 11);
    assert_eq!(past_sunday.weekday(), Weekday::Sunday);

    assert_eq!(
        validate_date(Some(past_sunday), TODAY),
        Err(ValidationError::PastDate)
    );
}

#[test]
fn test_validate_date_rejects_every_future_sunday() {
    let mut day: Date = TODAY;
    let mut sundays_seen: u32 = 0;
    for _ in 0..120 {
        let result = validate_date(Some(day), TODAY);
        if day.weekday() == Weekday::Sunday {
            sundays_seen += 1;
            assert_eq!(result, Err(ValidationError::ClosedOnSunday), "failed for {day}");
        } else {
            assert_eq!(result, Ok(()), "failed for {day}");
        }
        day = day.next_day().unwrap();
    }
    assert!(sundays_seen >= 17);
}

#[test]
fn test_validate_date_today_on_sunday_is_closed() {
    let sunday: Date = date!(2026 - 10 - 18);
    assert_eq!(
        validate_date(Some(sunday), sunday),
        Err(ValidationError::ClosedOnSunday)
    );
}

#[test]
fn test_validate_time_rejects_missing_time() {
    assert_eq!(validate_time(None), Err(ValidationError::MissingTime));
}

#[test]
fn test_validate_time_rejects_blank_time() {
    let blank: TimeSlot = TimeSlot::new("");
    assert_eq!(validate_time(Some(&blank)), Err(ValidationError::MissingTime));
}

#[test]
fn test_validate_time_accepts_slot() {
    let slot: TimeSlot = TimeSlot::new("18:00");
    assert_eq!(validate_time(Some(&slot)), Ok(()));
}

#[test]
fn test_validate_guests_accepts_five() {
    assert_eq!(validate_guests(Some("5")), Ok(()));
}

#[test]
fn test_validate_guests_accepts_bounds() {
    assert_eq!(validate_guests(Some("1")), Ok(()));
    assert_eq!(validate_guests(Some("10")), Ok(()));
}

#[test]
fn test_validate_guests_rejects_zero() {
    assert_eq!(
        validate_guests(Some("0")),
        Err(ValidationError::GuestsOutOfRange)
    );
}

#[test]
fn test_validate_guests_rejects_eleven() {
    assert_eq!(
        validate_guests(Some("11")),
        Err(ValidationError::GuestsOutOfRange)
    );
}

#[test]
fn test_validate_guests_rejects_negative() {
    assert_eq!(
        validate_guests(Some("-3")),
        Err(ValidationError::GuestsOutOfRange)
    );
}

#[test]
fn test_validate_guests_rejects_text() {
    assert_eq!(
        validate_guests(Some("abc")),
        Err(ValidationError::GuestsNotNumeric)
    );
}

#[test]
fn test_validate_guests_rejects_empty_string() {
    assert_eq!(
        validate_guests(Some("")),
        Err(ValidationError::GuestsNotNumeric)
    );
}

#[test]
fn test_validate_guests_rejects_missing_value() {
    assert_eq!(validate_guests(None), Err(ValidationError::GuestsNotNumeric));
}

#[test]
fn test_validate_guests_accepts_fraction_in_range() {
    assert_eq!(validate_guests(Some("2.5")), Ok(()));
}

#[test]
fn test_validate_guests_rejects_fraction_just_below_range() {
    assert_eq!(
        validate_guests(Some("0.5")),
        Err(ValidationError::GuestsOutOfRange)
    );
}

#[test]
fn test_validate_guests_rejects_infinity() {
    assert_eq!(
        validate_guests(Some("inf")),
        Err(ValidationError::GuestsNotNumeric)
    );
}

#[test]
fn test_validate_guests_rejects_overflowing_number() {
    assert_eq!(
        validate_guests(Some("1e400")),
        Err(ValidationError::GuestsNotNumeric)
    );
}

#[test]
fn test_validate_guests_parses_padded_value_once() {
    assert_eq!(validate_guests(Some(" 4 ")), Ok(()));
    assert_eq!(
        validate_guests(Some(" 12 ")),
        Err(ValidationError::GuestsOutOfRange)
    );
}

#[test]
fn test_validate_occasion_rejects_missing_occasion() {
    assert_eq!(
        validate_occasion(None),
        Err(ValidationError::MissingOccasion)
    );
}

#[test]
fn test_validate_occasion_rejects_blank_occasion() {
    let blank: OccasionValue = OccasionValue::new("  ");
    assert_eq!(
        validate_occasion(Some(&blank)),
        Err(ValidationError::MissingOccasion)
    );
}

#[test]
fn test_validate_occasion_accepts_birthday() {
    let birthday: OccasionValue = OccasionValue::new("birthday");
    assert_eq!(validate_occasion(Some(&birthday)), Ok(()));
}

#[test]
fn test_validate_occasion_does_not_require_known_option() {
    let graduation: OccasionValue = OccasionValue::new("graduation");
    assert_eq!(validate_occasion(Some(&graduation)), Ok(()));
}

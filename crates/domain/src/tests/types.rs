// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, OccasionValue, Reservation, ReservationDraft, TimeSlot, parse_date};
use time::macros::date;

#[test]
fn test_parse_date_accepts_iso_calendar_date() {
    assert_eq!(parse_date("2026-10-15").unwrap(), date!(2026 - 10 - 15));
}

#[test]
fn test_parse_date_trims_whitespace() {
    assert_eq!(parse_date(" 2026-10-15\n").unwrap(), date!(2026 - 10 - 15));
}

#[test]
fn test_parse_date_rejects_impossible_date() {
    let result: Result<_, DomainError> = parse_date("2026-02-30");
    assert!(matches!(
        result,
        Err(DomainError::DateParseError { ref date_string, .. }) if date_string == "2026-02-30"
    ));
}

#[test]
fn test_parse_date_rejects_other_formats() {
    assert!(parse_date("15/10/2026").is_err());
    assert!(parse_date("").is_err());
}

#[test]
fn test_time_slot_from_minutes_pads_hours_and_minutes() {
    assert_eq!(TimeSlot::from_minutes(17 * 60).value(), "17:00");
    assert_eq!(TimeSlot::from_minutes(9 * 60 + 5).value(), "09:05");
}

#[test]
fn test_time_slot_blank_is_empty() {
    assert!(TimeSlot::new(" ").is_empty());
    assert!(!TimeSlot::new("18:30").is_empty());
}

#[test]
fn test_reservation_serializes_as_plain_object() {
    let reservation: Reservation = Reservation {
        date: date!(2026 - 10 - 15),
        time: TimeSlot::new("18:00"),
        guests: String::from("4"),
        occasion: OccasionValue::new("anniversary"),
    };

    let json: String = serde_json::to_string(&reservation).unwrap();
    assert_eq!(
        json,
        r#"{"date":"2026-10-15","time":"18:00","guests":"4","occasion":"anniversary"}"#
    );

    let decoded: Reservation = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, reservation);
}

#[test]
fn test_empty_draft_serializes_nulls() {
    let draft: ReservationDraft = ReservationDraft::default();
    let json: String = serde_json::to_string(&draft).unwrap();
    assert_eq!(
        json,
        r#"{"date":null,"time":null,"guests":null,"occasion":null}"#
    );
}

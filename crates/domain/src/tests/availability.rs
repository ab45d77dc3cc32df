// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{booking, day};
use crate::{
    CalendarDay, DayAvailability, DayRange, DomainError, ExistingBooking, availability_calendar,
    blocked_days, is_date_blocked_for_check_in, is_date_blocked_for_check_out, is_range_valid,
    selectable_check_in, selectable_check_out, validate_range,
};

fn today() -> CalendarDay {
    day("2024-03-01")
}

fn bookings() -> Vec<ExistingBooking> {
    vec![booking("2024-03-12", "2024-03-15")]
}

#[test]
fn test_past_days_are_blocked() {
    assert!(is_date_blocked_for_check_in(day("2024-02-29"), today(), &[]));
    assert!(is_date_blocked_for_check_out(day("2024-02-29"), today(), &[]));
    assert!(!is_date_blocked_for_check_in(today(), today(), &[]));
}

#[test]
fn test_days_inside_a_stay_are_blocked_on_both_pickers() {
    let bookings: Vec<ExistingBooking> = bookings();
    for d in ["2024-03-12", "2024-03-13", "2024-03-14"] {
        assert!(is_date_blocked_for_check_in(day(d), today(), &bookings), "{d}");
        assert!(is_date_blocked_for_check_out(day(d), today(), &bookings), "{d}");
    }
}

#[test]
fn test_departure_day_is_free_for_check_in() {
    let bookings: Vec<ExistingBooking> = bookings();
    assert!(!is_date_blocked_for_check_in(day("2024-03-15"), today(), &bookings));
    assert!(!is_date_blocked_for_check_in(day("2024-03-11"), today(), &bookings));
}

#[test]
fn test_valid_range_without_conflicts() {
    let result = validate_range(Some(day("2024-03-10")), Some(day("2024-03-13")), &[]);
    assert_eq!(result, Ok((day("2024-03-10"), day("2024-03-13"))));
}

#[test]
fn test_range_requires_both_sides() {
    assert_eq!(
        validate_range(None, Some(day("2024-03-13")), &[]),
        Err(DomainError::MissingCheckIn)
    );
    assert_eq!(
        validate_range(Some(day("2024-03-10")), None, &[]),
        Err(DomainError::MissingCheckOut)
    );
}

#[test]
fn test_range_must_move_forward() {
    assert!(!is_range_valid(Some(day("2024-03-10")), Some(day("2024-03-10")), &[]));
    assert!(!is_range_valid(Some(day("2024-03-10")), Some(day("2024-03-09")), &[]));
}

#[test]
fn test_partial_overlap_is_invalid() {
    let result = validate_range(
        Some(day("2024-03-10")),
        Some(day("2024-03-13")),
        &bookings(),
    );
    assert_eq!(
        result,
        Err(DomainError::OverlapsBooking {
            check_in: day("2024-03-10"),
            check_out: day("2024-03-13"),
            booking_from: day("2024-03-12"),
            booking_to: day("2024-03-15"),
        })
    );
}

#[test]
fn test_containing_and_contained_ranges_are_invalid() {
    let bookings: Vec<ExistingBooking> = bookings();
    assert!(!is_range_valid(Some(day("2024-03-05")), Some(day("2024-03-20")), &bookings));
    assert!(!is_range_valid(Some(day("2024-03-13")), Some(day("2024-03-14")), &bookings));
}

#[test]
fn test_check_in_on_departure_day_is_valid() {
    assert!(is_range_valid(
        Some(day("2024-03-15")),
        Some(day("2024-03-18")),
        &bookings()
    ));
}

#[test]
fn test_check_out_on_arrival_day_is_rejected() {
    assert_eq!(
        validate_range(Some(day("2024-03-09")), Some(day("2024-03-12")), &bookings()),
        Err(DomainError::SameDayTurnover {
            check_out: day("2024-03-12")
        })
    );
}

#[test]
fn test_selectable_check_in_respects_current_check_out() {
    let bookings: Vec<ExistingBooking> = bookings();
    let check_out: Option<CalendarDay> = Some(day("2024-03-20"));
    // the stay [d, 03-20) would swallow the existing booking
    assert!(!selectable_check_in(day("2024-03-10"), today(), check_out, &bookings));
    assert!(selectable_check_in(day("2024-03-16"), today(), check_out, &bookings));
    assert!(!selectable_check_in(day("2024-03-20"), today(), check_out, &bookings));
    assert!(!selectable_check_in(day("2024-03-21"), today(), check_out, &bookings));
    assert!(selectable_check_in(day("2024-03-10"), today(), None, &bookings));
}

#[test]
fn test_selectable_check_out_respects_current_check_in() {
    let bookings: Vec<ExistingBooking> = bookings();
    let check_in: Option<CalendarDay> = Some(day("2024-03-05"));
    assert!(selectable_check_out(day("2024-03-11"), today(), check_in, &bookings));
    assert!(!selectable_check_out(day("2024-03-05"), today(), check_in, &bookings));
    assert!(!selectable_check_out(day("2024-03-04"), today(), check_in, &bookings));
    // arrival day of the existing stay
    assert!(!selectable_check_out(day("2024-03-12"), today(), check_in, &bookings));
    // past the existing stay, so the range would swallow it
    assert!(!selectable_check_out(day("2024-03-18"), today(), check_in, &bookings));
}

#[test]
fn test_availability_calendar_describes_each_day() {
    let bookings: Vec<ExistingBooking> = bookings();
    let window: DayRange = DayRange::new(day("2024-03-10"), day("2024-03-17"));
    let calendar: Vec<DayAvailability> =
        availability_calendar(window, today(), Some(day("2024-03-10")), None, &bookings);

    assert_eq!(calendar.len(), 7);
    let check_in_days: Vec<CalendarDay> = calendar
        .iter()
        .filter(|d| d.check_in)
        .map(|d| d.day)
        .collect();
    assert_eq!(
        check_in_days,
        vec![
            day("2024-03-10"),
            day("2024-03-11"),
            day("2024-03-15"),
            day("2024-03-16")
        ]
    );
    let check_out_days: Vec<CalendarDay> = calendar
        .iter()
        .filter(|d| d.check_out)
        .map(|d| d.day)
        .collect();
    assert_eq!(check_out_days, vec![day("2024-03-11")]);
}

#[test]
fn test_rules_are_idempotent() {
    let bookings: Vec<ExistingBooking> = bookings();
    let first: bool = is_range_valid(Some(day("2024-03-10")), Some(day("2024-03-13")), &bookings);
    let second: bool = is_range_valid(Some(day("2024-03-10")), Some(day("2024-03-13")), &bookings);
    assert_eq!(first, second);
}

#[test]
fn test_existing_booking_rejects_inverted_record() {
    let result = ExistingBooking::parse("2024-03-15T00:00:00.000Z", "2024-03-12T00:00:00.000Z");
    assert!(matches!(result, Err(DomainError::InvertedBooking { .. })));
}

#[test]
fn test_existing_booking_deserializes_from_api_json() {
    let json: &str = r#"{"dateFrom":"2024-03-12T00:00:00.000Z","dateTo":"2024-03-15T00:00:00.000Z"}"#;
    let parsed: ExistingBooking = serde_json::from_str(json).unwrap();
    assert_eq!(parsed, booking("2024-03-12", "2024-03-15"));

    let inverted: &str = r#"{"dateFrom":"2024-03-15","dateTo":"2024-03-12"}"#;
    assert!(serde_json::from_str::<ExistingBooking>(inverted).is_err());
}

#[test]
fn test_blocked_days_lists_past_and_occupied_days() {
    let window: DayRange = DayRange::new(day("2024-02-28"), day("2024-03-16"));
    let blocked: Vec<CalendarDay> = blocked_days(window, today(), &bookings());
    assert_eq!(
        blocked,
        vec![
            day("2024-02-28"),
            day("2024-02-29"),
            day("2024-03-12"),
            day("2024-03-13"),
            day("2024-03-14")
        ]
    );
}

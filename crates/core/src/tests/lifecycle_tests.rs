// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{apply_all, create_test_bookings, day, full_range};
use crate::{Command, CoreError, Selection, validate_full_range};
use holidaze_domain::{DomainError, ExistingBooking};

#[test]
fn test_selection_is_reenterable_after_reset() {
    let commands: [Command; 5] = [
        Command::SetCheckIn {
            date: day("2024-03-10"),
        },
        Command::SetCheckOut {
            date: day("2024-03-11"),
        },
        Command::Reset,
        Command::SetCheckIn {
            date: day("2024-03-15"),
        },
        Command::SetCheckOut {
            date: day("2024-03-18"),
        },
    ];
    let state: Selection = apply_all(&create_test_bookings(), &commands).unwrap();

    assert_eq!(state, full_range("2024-03-15", "2024-03-18"));
}

#[test]
fn test_rejected_check_out_stops_the_sequence() {
    let commands: [Command; 2] = [
        Command::SetCheckIn {
            date: day("2024-03-10"),
        },
        Command::SetCheckOut {
            date: day("2024-03-14"),
        },
    ];
    let result: Result<Selection, CoreError> = apply_all(&create_test_bookings(), &commands);

    assert!(result.is_err());
}

#[test]
fn test_full_range_validates() {
    let bookings: Vec<ExistingBooking> = create_test_bookings();
    let selection: Selection = full_range("2024-03-15", "2024-03-18");

    assert_eq!(
        validate_full_range(&selection, &bookings),
        Ok((day("2024-03-15"), day("2024-03-18")))
    );
}

#[test]
fn test_partial_selection_does_not_validate() {
    let selection: Selection = Selection::CheckInOnly {
        check_in: day("2024-03-10"),
    };

    assert_eq!(
        validate_full_range(&selection, &[]),
        Err(DomainError::MissingCheckOut)
    );
    assert_eq!(
        validate_full_range(&Selection::Empty, &[]),
        Err(DomainError::MissingCheckIn)
    );
}

#[test]
fn test_selection_serializes_with_state_tag() {
    let selection: Selection = full_range("2024-03-10", "2024-03-13");
    let json: String = serde_json::to_string(&selection).unwrap();

    assert_eq!(
        json,
        r#"{"state":"fullRange","checkIn":"2024-03-10","checkOut":"2024-03-13"}"#
    );
}

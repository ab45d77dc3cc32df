// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::day;
use crate::{ApiError, translate_core_error, translate_domain_error};
use holidaze::CoreError;
use holidaze_domain::DomainError;

#[test]
fn test_same_day_turnover_translates_to_rule_violation() {
    let err: ApiError = translate_domain_error(DomainError::SameDayTurnover {
        check_out: day("2024-03-12"),
    });

    assert_eq!(
        err,
        ApiError::DomainRuleViolation {
            rule: String::from("no_same_day_turnover"),
            message: String::from(
                "Check-out 2024-03-12 falls on the arrival day of an existing booking"
            ),
        }
    );
}

#[test]
fn test_guest_bounds_translate_to_invalid_input() {
    let err: ApiError = DomainError::GuestsOutOfRange {
        guests: 5,
        max_guests: 4,
    }
    .into();

    assert_eq!(
        err.to_string(),
        "Invalid input for field 'guests': Guest count 5 is outside 1..=4"
    );
}

#[test]
fn test_core_errors_unwrap_to_domain_translation() {
    let err: ApiError = translate_core_error(CoreError::DomainViolation(DomainError::MissingCheckIn));

    assert_eq!(
        err,
        ApiError::InvalidInput {
            field: String::from("check_in"),
            message: String::from("A check-in date must be selected before a check-out date"),
        }
    );
}

#[test]
fn test_session_errors_name_the_venue() {
    let in_flight: ApiError = ApiError::SubmissionInFlight {
        venue_id: String::from("venue-1"),
    };
    let closed: ApiError = ApiError::SessionClosed {
        venue_id: String::from("venue-1"),
    };

    assert_eq!(
        in_flight.to_string(),
        "A booking for venue 'venue-1' is already being submitted"
    );
    assert_eq!(
        closed.to_string(),
        "The booking session for venue 'venue-1' has been closed"
    );
}

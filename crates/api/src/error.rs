// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use holidaze::CoreError;
use holidaze_domain::DomainError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// A domain rule was violated.
    #[error("Domain rule violation ({rule}): {message}")]
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    #[error("Invalid input for field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A booking submission is already outstanding.
    #[error("A booking for venue '{venue_id}' is already being submitted")]
    SubmissionInFlight {
        /// The venue being booked.
        venue_id: String,
    },
    /// The booking session was torn down.
    #[error("The booking session for venue '{venue_id}' has been closed")]
    SessionClosed {
        /// The venue of the closed session.
        venue_id: String,
    },
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        translate_domain_error(err)
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        translate_core_error(err)
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let message: String = err.to_string();
    match err {
        DomainError::DateParse { .. } | DomainError::DateFormat { .. } => ApiError::InvalidInput {
            field: String::from("date"),
            message,
        },
        DomainError::InvertedBooking { .. } => ApiError::InvalidInput {
            field: String::from("bookings"),
            message,
        },
        DomainError::MissingCheckIn => ApiError::InvalidInput {
            field: String::from("check_in"),
            message,
        },
        DomainError::MissingCheckOut => ApiError::InvalidInput {
            field: String::from("check_out"),
            message,
        },
        DomainError::CheckOutNotAfterCheckIn { .. } => ApiError::DomainRuleViolation {
            rule: String::from("check_out_after_check_in"),
            message,
        },
        DomainError::OverlapsBooking { .. } => ApiError::DomainRuleViolation {
            rule: String::from("no_overlap"),
            message,
        },
        DomainError::SameDayTurnover { .. } => ApiError::DomainRuleViolation {
            rule: String::from("no_same_day_turnover"),
            message,
        },
        DomainError::GuestsOutOfRange { .. } => ApiError::InvalidInput {
            field: String::from("guests"),
            message,
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
    }
}

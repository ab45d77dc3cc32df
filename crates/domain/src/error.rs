// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::calendar_day::CalendarDay;

/// Errors that can occur while validating calendar input and stays.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Failed to parse a date string.
    #[error("Failed to parse date '{date_string}': {error}")]
    DateParse {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Failed to render a day as an outbound timestamp.
    #[error("Failed to format {day} as a timestamp: {error}")]
    DateFormat {
        /// The day being formatted.
        day: CalendarDay,
        /// The formatting error message.
        error: String,
    },
    /// An existing booking ends before it starts.
    #[error("Booking ends on {date_to} before it starts on {date_from}")]
    InvertedBooking {
        /// The booking's first night.
        date_from: CalendarDay,
        /// The booking's departure day.
        date_to: CalendarDay,
    },
    /// A check-out was requested before any check-in was chosen.
    #[error("A check-in date must be selected before a check-out date")]
    MissingCheckIn,
    /// A check-out was requested without a complete range.
    #[error("A check-out date has not been selected")]
    MissingCheckOut,
    /// The stay does not move forward in time.
    #[error("Check-out {check_out} must be after check-in {check_in}")]
    CheckOutNotAfterCheckIn {
        /// The selected check-in day.
        check_in: CalendarDay,
        /// The rejected check-out day.
        check_out: CalendarDay,
    },
    /// The stay collides with an existing booking.
    #[error(
        "Stay {check_in} to {check_out} overlaps the booking from {booking_from} to {booking_to}"
    )]
    OverlapsBooking {
        /// The selected check-in day.
        check_in: CalendarDay,
        /// The selected check-out day.
        check_out: CalendarDay,
        /// The conflicting booking's first night.
        booking_from: CalendarDay,
        /// The conflicting booking's departure day.
        booking_to: CalendarDay,
    },
    /// The check-out lands on the arrival day of an existing booking.
    #[error("Check-out {check_out} falls on the arrival day of an existing booking")]
    SameDayTurnover {
        /// The rejected check-out day.
        check_out: CalendarDay,
    },
    /// The guest count is outside the venue's limits.
    #[error("Guest count {guests} is outside 1..={max_guests}")]
    GuestsOutOfRange {
        /// The requested guest count.
        guests: u32,
        /// The venue's maximum.
        max_guests: u32,
    },
}

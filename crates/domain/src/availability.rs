// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Availability rules for the check-in and check-out pickers.
//!
//! ## Invariants
//!
//! - Every function here is pure and total: any combination of days yields a
//!   boolean (or a `Result` describing the first violated rule).
//! - Days before `today` are never selectable.
//! - A day occupied by an existing stay is never selectable on either picker.
//! - A complete range must move forward in time, must not overlap any
//!   existing stay, and must not check out on another booking's arrival day.

use crate::booking::ExistingBooking;
use crate::calendar_day::CalendarDay;
use crate::error::DomainError;
use crate::interval::DayRange;
use serde::Serialize;

/// True if `date` cannot be picked as a check-in day.
#[must_use]
pub fn is_date_blocked_for_check_in(
    date: CalendarDay,
    today: CalendarDay,
    bookings: &[ExistingBooking],
) -> bool {
    date < today || bookings.iter().any(|booking| booking.occupies(date))
}

/// True if `date` cannot be picked as a check-out day.
///
/// Uses the same absolute rule as check-in: a departure may not land inside
/// someone else's stay. Landing on another stay's arrival day is covered by
/// this rule because the arrival day is occupied.
#[must_use]
pub fn is_date_blocked_for_check_out(
    date: CalendarDay,
    today: CalendarDay,
    bookings: &[ExistingBooking],
) -> bool {
    is_date_blocked_for_check_in(date, today, bookings)
}

/// Validates a candidate stay, reporting the first violated rule.
///
/// # Errors
///
/// Returns an error if:
/// - either side is missing
/// - check-out is not strictly after check-in
/// - check-out falls on an existing booking's arrival day
/// - the stay overlaps an existing booking
pub fn validate_range(
    check_in: Option<CalendarDay>,
    check_out: Option<CalendarDay>,
    bookings: &[ExistingBooking],
) -> Result<(CalendarDay, CalendarDay), DomainError> {
    let check_in: CalendarDay = check_in.ok_or(DomainError::MissingCheckIn)?;
    let check_out: CalendarDay = check_out.ok_or(DomainError::MissingCheckOut)?;

    if check_out <= check_in {
        return Err(DomainError::CheckOutNotAfterCheckIn {
            check_in,
            check_out,
        });
    }

    // Same-day turnover is not supported by the booking API, even though the
    // half-open overlap test alone would allow it.
    if bookings
        .iter()
        .any(|booking| booking.date_from() == check_out)
    {
        return Err(DomainError::SameDayTurnover { check_out });
    }

    if let Some(conflict) = bookings
        .iter()
        .find(|booking| booking.overlaps(check_in, check_out))
    {
        return Err(DomainError::OverlapsBooking {
            check_in,
            check_out,
            booking_from: conflict.date_from(),
            booking_to: conflict.date_to(),
        });
    }

    Ok((check_in, check_out))
}

/// True if the candidate stay is complete and bookable.
#[must_use]
pub fn is_range_valid(
    check_in: Option<CalendarDay>,
    check_out: Option<CalendarDay>,
    bookings: &[ExistingBooking],
) -> bool {
    validate_range(check_in, check_out, bookings).is_ok()
}

/// Whether the check-in picker should offer `date`, given the current check-out.
///
/// With a check-out already chosen, the check-in must come before it and the
/// resulting stay must be free.
#[must_use]
pub fn selectable_check_in(
    date: CalendarDay,
    today: CalendarDay,
    current_check_out: Option<CalendarDay>,
    bookings: &[ExistingBooking],
) -> bool {
    if is_date_blocked_for_check_in(date, today, bookings) {
        return false;
    }
    match current_check_out {
        Some(check_out) => {
            date < check_out
                && !bookings
                    .iter()
                    .any(|booking| booking.overlaps(date, check_out))
        }
        None => true,
    }
}

/// Whether the check-out picker should offer `date`, given the current check-in.
#[must_use]
pub fn selectable_check_out(
    date: CalendarDay,
    today: CalendarDay,
    current_check_in: Option<CalendarDay>,
    bookings: &[ExistingBooking],
) -> bool {
    if is_date_blocked_for_check_out(date, today, bookings) {
        return false;
    }
    match current_check_in {
        Some(check_in) => is_range_valid(Some(check_in), Some(date), bookings),
        None => true,
    }
}

/// Selectability of a single calendar day on both pickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayAvailability {
    /// The day being described.
    pub day: CalendarDay,
    /// Whether the check-in picker offers this day.
    pub check_in: bool,
    /// Whether the check-out picker offers this day.
    pub check_out: bool,
}

/// Describes every day of `window` for both pickers.
///
/// The current selection feeds the picker-relative rules, exactly as
/// [`selectable_check_in`] and [`selectable_check_out`] apply them.
#[must_use]
pub fn availability_calendar(
    window: DayRange,
    today: CalendarDay,
    current_check_in: Option<CalendarDay>,
    current_check_out: Option<CalendarDay>,
    bookings: &[ExistingBooking],
) -> Vec<DayAvailability> {
    window
        .days()
        .map(|day| DayAvailability {
            day,
            check_in: selectable_check_in(day, today, current_check_out, bookings),
            check_out: selectable_check_out(day, today, current_check_in, bookings),
        })
        .collect()
}

/// Days in `window` that neither picker may offer, regardless of selection.
#[must_use]
pub fn blocked_days(
    window: DayRange,
    today: CalendarDay,
    bookings: &[ExistingBooking],
) -> Vec<CalendarDay> {
    window
        .days()
        .filter(|day| is_date_blocked_for_check_in(*day, today, bookings))
        .collect()
}

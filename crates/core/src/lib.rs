// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod apply;
mod command;
mod error;
mod state;

#[cfg(test)]
mod tests;

use holidaze_domain::{CalendarDay, DomainError, ExistingBooking, validate_range};

// Re-export public types and functions
pub use apply::apply;
pub use command::Command;
pub use error::CoreError;
pub use state::{Selection, SelectionEffect, TransitionResult};

/// Validates that a selection holds a complete, bookable stay.
///
/// This is a read-only check; it never changes the selection.
///
/// # Arguments
///
/// * `selection` - The current selection
/// * `bookings` - Existing bookings of the venue
///
/// # Returns
///
/// * `Ok((check_in, check_out))` if the stay can be submitted
/// * `Err(DomainError)` naming the first rule the selection breaks
///
/// # Errors
///
/// Returns an error if either side is missing or the range is not bookable.
pub fn validate_full_range(
    selection: &Selection,
    bookings: &[ExistingBooking],
) -> Result<(CalendarDay, CalendarDay), DomainError> {
    validate_range(selection.check_in(), selection.check_out(), bookings)
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{Selection, SelectionEffect, TransitionResult};
use holidaze_domain::{CalendarDay, ExistingBooking, is_range_valid, validate_range};

/// Applies a command to a selection, producing the next selection.
///
/// Changing check-in may invalidate check-out, in which case check-out is
/// cleared. Changing check-out never touches check-in; an unacceptable
/// check-out is rejected and the caller keeps its current selection.
///
/// # Arguments
///
/// * `bookings` - Existing bookings of the venue
/// * `state` - The current selection (immutable)
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new selection and its effect
/// * `Err(CoreError)` if the command is rejected
///
/// # Errors
///
/// Returns an error if a check-out is set while:
/// - no check-in is selected
/// - the day is not after check-in
/// - the resulting stay overlaps an existing booking
/// - the day is another booking's arrival day
pub fn apply(
    bookings: &[ExistingBooking],
    state: &Selection,
    command: Command,
) -> Result<TransitionResult, CoreError> {
    let result: TransitionResult = match command {
        Command::SetCheckIn { date } => set_check_in(bookings, state, date),
        Command::SetCheckOut { date } => {
            let (check_in, check_out): (CalendarDay, CalendarDay) =
                validate_range(state.check_in(), Some(date), bookings)?;
            TransitionResult {
                new_state: Selection::FullRange {
                    check_in,
                    check_out,
                },
                effect: SelectionEffect::RangeCompleted,
            }
        }
        Command::Reset => TransitionResult {
            new_state: Selection::Empty,
            effect: SelectionEffect::Reset,
        },
    };

    tracing::debug!(
        ?command,
        from = ?state,
        to = ?result.new_state,
        effect = ?result.effect,
        "Selection transition"
    );
    Ok(result)
}

fn set_check_in(
    bookings: &[ExistingBooking],
    state: &Selection,
    date: CalendarDay,
) -> TransitionResult {
    match state.check_out() {
        Some(check_out) if is_range_valid(Some(date), Some(check_out), bookings) => {
            TransitionResult {
                new_state: Selection::FullRange {
                    check_in: date,
                    check_out,
                },
                effect: SelectionEffect::CheckInSet,
            }
        }
        Some(previous) => TransitionResult {
            new_state: Selection::CheckInOnly { check_in: date },
            effect: SelectionEffect::CheckOutCleared { previous },
        },
        None => TransitionResult {
            new_state: Selection::CheckInOnly { check_in: date },
            effect: SelectionEffect::CheckInSet,
        },
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, CoreError, Selection, TransitionResult, apply};
use holidaze_domain::{CalendarDay, ExistingBooking};

pub fn day(s: &str) -> CalendarDay {
    CalendarDay::parse_iso(s).expect("valid test date")
}

/// One existing stay, 2024-03-12 to 2024-03-15.
pub fn create_test_bookings() -> Vec<ExistingBooking> {
    vec![ExistingBooking::new(day("2024-03-12"), day("2024-03-15")).expect("valid booking")]
}

pub fn full_range(check_in: &str, check_out: &str) -> Selection {
    Selection::FullRange {
        check_in: day(check_in),
        check_out: day(check_out),
    }
}

/// Applies commands in order, stopping at the first rejection.
pub fn apply_all(
    bookings: &[ExistingBooking],
    commands: &[Command],
) -> Result<Selection, CoreError> {
    let mut state: Selection = Selection::Empty;
    for command in commands {
        let result: TransitionResult = apply(bookings, &state, *command)?;
        state = result.new_state;
    }
    Ok(state)
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use holidaze_domain::CalendarDay;

/// A command represents a picker interaction as data only.
///
/// Commands are the only way to change a [`crate::Selection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// The user picked a check-in day.
    SetCheckIn {
        /// The picked day.
        date: CalendarDay,
    },
    /// The user picked a check-out day.
    SetCheckOut {
        /// The picked day.
        date: CalendarDay,
    },
    /// Clear both sides, after a submission or a venue change.
    Reset,
}

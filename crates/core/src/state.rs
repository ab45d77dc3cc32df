// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use holidaze_domain::CalendarDay;
use serde::Serialize;

/// The two-sided date selection for one venue.
///
/// A `FullRange` is only ever produced by [`crate::apply`] after the pair has
/// been validated against the venue's bookings, so holding one means the stay
/// moves forward and does not collide with an existing booking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum Selection {
    /// Nothing picked yet.
    #[default]
    Empty,
    /// Check-in picked, check-out pending.
    #[serde(rename_all = "camelCase")]
    CheckInOnly {
        /// Arrival day.
        check_in: CalendarDay,
    },
    /// Both sides picked.
    #[serde(rename_all = "camelCase")]
    FullRange {
        /// Arrival day.
        check_in: CalendarDay,
        /// Departure day.
        check_out: CalendarDay,
    },
}

impl Selection {
    /// The check-in day, if picked.
    #[must_use]
    pub const fn check_in(&self) -> Option<CalendarDay> {
        match self {
            Self::Empty => None,
            Self::CheckInOnly { check_in } | Self::FullRange { check_in, .. } => Some(*check_in),
        }
    }

    /// The check-out day, if picked.
    #[must_use]
    pub const fn check_out(&self) -> Option<CalendarDay> {
        match self {
            Self::FullRange { check_out, .. } => Some(*check_out),
            Self::Empty | Self::CheckInOnly { .. } => None,
        }
    }

    /// True once both sides are picked.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::FullRange { .. })
    }

    /// True if nothing is picked.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// What a transition did, for the caller to react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionEffect {
    /// Check-in was set and any existing check-out still holds.
    CheckInSet,
    /// Check-in was set and invalidated the previous check-out.
    CheckOutCleared {
        /// The check-out day that was dropped.
        previous: CalendarDay,
    },
    /// Check-out was set, completing a valid range.
    RangeCompleted,
    /// The selection was cleared.
    Reset,
}

/// The result of a successful selection transition.
///
/// Transitions are atomic: they either succeed completely or leave the
/// previous selection untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    /// The selection after the transition.
    pub new_state: Selection,
    /// What the transition did.
    pub effect: SelectionEffect,
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Half-open day intervals.
//!
//! All ranges are `[start, end)`: the start day is occupied, the end day is
//! the departure morning and free for the next arrival.

use crate::calendar_day::CalendarDay;
use serde::{Deserialize, Serialize};

/// True if `date` is `start` or lies strictly between `start` and `end`.
#[must_use]
pub fn is_day_within(date: CalendarDay, start: CalendarDay, end: CalendarDay) -> bool {
    date == start || (start < date && date < end)
}

/// Standard half-open overlap test.
///
/// Zero-length or inverted ranges never overlap anything.
#[must_use]
pub fn ranges_overlap(
    a_start: CalendarDay,
    a_end: CalendarDay,
    b_start: CalendarDay,
    b_end: CalendarDay,
) -> bool {
    if a_start >= a_end || b_start >= b_end {
        return false;
    }
    a_start < b_end && a_end > b_start
}

/// A requested `[start, end)` window of days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRange {
    /// First day of the window.
    pub start: CalendarDay,
    /// Day after the last day of the window.
    pub end: CalendarDay,
}

impl DayRange {
    /// Creates a new window. Degenerate windows are allowed and match nothing.
    #[must_use]
    pub const fn new(start: CalendarDay, end: CalendarDay) -> Self {
        Self { start, end }
    }

    /// True if the window covers no days.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// True if this window overlaps `[start, end)`.
    #[must_use]
    pub fn overlaps(&self, start: CalendarDay, end: CalendarDay) -> bool {
        ranges_overlap(self.start, self.end, start, end)
    }

    /// Every day in the window, in order.
    pub fn days(&self) -> impl Iterator<Item = CalendarDay> + '_ {
        let length: i64 = self.start.days_until(self.end).max(0);
        (0..length).map(|offset| self.start.add_days(offset))
    }
}

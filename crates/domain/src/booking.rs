// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::calendar_day::CalendarDay;
use crate::error::DomainError;
use crate::interval::{is_day_within, ranges_overlap};
use serde::{Deserialize, Serialize};

/// A reservation already held on a venue.
///
/// Bookings are created by the remote API and are read-only here.
/// `date_from` is the first occupied night, `date_to` the departure day,
/// which is free for a new arrival.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawBooking")]
pub struct ExistingBooking {
    date_from: CalendarDay,
    date_to: CalendarDay,
}

impl ExistingBooking {
    /// Creates a new `ExistingBooking`.
    ///
    /// # Errors
    ///
    /// Returns an error if `date_to` is before `date_from`.
    pub fn new(date_from: CalendarDay, date_to: CalendarDay) -> Result<Self, DomainError> {
        if date_to < date_from {
            return Err(DomainError::InvertedBooking { date_from, date_to });
        }
        Ok(Self { date_from, date_to })
    }

    /// Parses a booking from the API's ISO-8601 strings.
    ///
    /// # Errors
    ///
    /// Returns an error if either date is unparsable or the range is inverted.
    pub fn parse(date_from: &str, date_to: &str) -> Result<Self, DomainError> {
        Self::new(
            CalendarDay::parse_iso(date_from)?,
            CalendarDay::parse_iso(date_to)?,
        )
    }

    /// First occupied day.
    #[must_use]
    pub const fn date_from(&self) -> CalendarDay {
        self.date_from
    }

    /// Departure day.
    #[must_use]
    pub const fn date_to(&self) -> CalendarDay {
        self.date_to
    }

    /// True if a guest is staying on `day`.
    #[must_use]
    pub fn occupies(&self, day: CalendarDay) -> bool {
        is_day_within(day, self.date_from, self.date_to)
    }

    /// True if `[start, end)` collides with this stay.
    #[must_use]
    pub fn overlaps(&self, start: CalendarDay, end: CalendarDay) -> bool {
        ranges_overlap(start, end, self.date_from, self.date_to)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawBooking {
    date_from: CalendarDay,
    date_to: CalendarDay,
}

impl TryFrom<RawBooking> for ExistingBooking {
    type Error = DomainError;

    fn try_from(raw: RawBooking) -> Result<Self, Self::Error> {
        Self::new(raw.date_from, raw.date_to)
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Bookings made on a manager's venues.

use crate::calendar_day::CalendarDay;
use crate::pricing::{compute_nights, compute_total};
use crate::venue::{Venue, VenueBooking};
use serde::Serialize;

/// One booking on one of the manager's venues, ready to display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManagerBookingRow<'a> {
    /// The venue that was booked.
    pub venue: &'a Venue,
    /// The booking record.
    pub booking: &'a VenueBooking,
    /// First night.
    pub date_from: CalendarDay,
    /// Departure day.
    pub date_to: CalendarDay,
    /// Nights in the stay.
    pub nights: u32,
    /// `nights * venue.price`.
    pub total: f64,
}

impl ManagerBookingRow<'_> {
    /// Customer name, else email, else "Guest".
    #[must_use]
    pub fn guest_name(&self) -> &str {
        self.booking.guest_display_name()
    }
}

/// Flattens current and upcoming bookings across `venues`.
///
/// A booking is kept if it starts today or later, or has started but not yet
/// ended. Rows are ordered by start day, soonest first. Records with
/// unparsable dates are skipped.
#[must_use]
pub fn upcoming_manager_rows(venues: &[Venue], today: CalendarDay) -> Vec<ManagerBookingRow<'_>> {
    let mut rows: Vec<ManagerBookingRow<'_>> = Vec::new();

    for venue in venues {
        for booking in venue.booking_records() {
            let existing = match booking.to_existing() {
                Ok(existing) => existing,
                Err(e) => {
                    tracing::warn!(venue = %venue.id, booking = %booking.id, "Skipping booking: {e}");
                    continue;
                }
            };

            let date_from: CalendarDay = existing.date_from();
            let date_to: CalendarDay = existing.date_to();
            if date_from < today && date_to <= today {
                continue;
            }

            let nights: u32 = compute_nights(Some(date_from), Some(date_to));
            rows.push(ManagerBookingRow {
                venue,
                booking,
                date_from,
                date_to,
                nights,
                total: compute_total(nights, venue.price),
            });
        }
    }

    rows.sort_by_key(|row| row.date_from);
    rows
}

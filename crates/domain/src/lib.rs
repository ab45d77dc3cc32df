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

mod availability;
mod booking;
mod calendar_day;
mod catalog;
mod error;
mod guests;
mod interval;
mod manager_bookings;
mod pricing;
mod venue;

#[cfg(test)]
mod tests;

pub use availability::{
    DayAvailability, availability_calendar, blocked_days, is_date_blocked_for_check_in,
    is_date_blocked_for_check_out, is_range_valid, selectable_check_in, selectable_check_out,
    validate_range,
};
pub use booking::ExistingBooking;
pub use calendar_day::CalendarDay;
pub use catalog::{PageMeta, VenueCatalog, VenueFilter, VenuePage, merge_pages};
pub use error::DomainError;
pub use guests::{GuestCount, guests_within_bounds};
pub use interval::{DayRange, is_day_within, ranges_overlap};
pub use manager_bookings::{ManagerBookingRow, upcoming_manager_rows};
pub use pricing::{PriceQuote, compute_nights, compute_total, quote};
pub use venue::{
    BookingCustomer, Venue, VenueBooking, VenueLocation, VenueMedia, VenueMeta, VenueOwner,
};

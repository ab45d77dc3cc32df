// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{CalendarDay, ExistingBooking, Venue, VenueBooking, VenueMedia};

pub fn day(s: &str) -> CalendarDay {
    CalendarDay::parse_iso(s).expect("valid test date")
}

pub fn booking(from: &str, to: &str) -> ExistingBooking {
    ExistingBooking::new(day(from), day(to)).expect("valid test booking")
}

pub fn booking_record(id: &str, from: &str, to: &str) -> VenueBooking {
    VenueBooking {
        id: id.to_string(),
        date_from: format!("{from}T00:00:00.000Z"),
        date_to: format!("{to}T00:00:00.000Z"),
        guests: 2,
        created: None,
        updated: None,
        customer: None,
    }
}

pub fn create_test_venue(id: &str, created: &str) -> Venue {
    Venue {
        id: id.to_string(),
        name: format!("Venue {id}"),
        description: None,
        media: Some(vec![VenueMedia {
            url: format!("https://images.example.com/{id}.jpg"),
            alt: None,
        }]),
        price: 1000.0,
        max_guests: 4,
        rating: 0.0,
        created: Some(created.to_string()),
        updated: None,
        meta: None,
        location: None,
        bookings: None,
        owner: None,
    }
}

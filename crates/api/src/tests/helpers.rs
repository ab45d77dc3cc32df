// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use holidaze_domain::{CalendarDay, Venue, VenueBooking, VenueMedia, VenueOwner};

use crate::{AuthenticatedUser, EligibilityContext, Role, SessionSnapshot};

pub const NIGHTLY_RATE: f64 = 1250.0;

pub fn day(s: &str) -> CalendarDay {
    CalendarDay::parse_iso(s).expect("valid test date")
}

pub fn create_test_customer() -> AuthenticatedUser {
    AuthenticatedUser::new(
        String::from("kari"),
        String::from("kari@stud.noroff.no"),
        Role::Customer,
    )
}

pub fn create_test_manager() -> AuthenticatedUser {
    AuthenticatedUser::new(
        String::from("ola"),
        String::from("ola@stud.noroff.no"),
        Role::Manager,
    )
}

/// A venue owned by the test manager, max 4 guests, with one stay from
/// 2024-03-12 to 2024-03-15.
pub fn create_test_venue() -> Venue {
    Venue {
        id: String::from("venue-1"),
        name: String::from("Fjord Cabin"),
        description: None,
        media: Some(vec![VenueMedia {
            url: String::from("https://images.example.com/cabin.jpg"),
            alt: None,
        }]),
        price: NIGHTLY_RATE,
        max_guests: 4,
        rating: 0.0,
        created: Some(String::from("2024-01-01T00:00:00.000Z")),
        updated: None,
        meta: None,
        location: None,
        bookings: Some(vec![VenueBooking {
            id: String::from("booking-1"),
            date_from: String::from("2024-03-12T00:00:00.000Z"),
            date_to: String::from("2024-03-15T00:00:00.000Z"),
            guests: 2,
            created: None,
            updated: None,
            customer: None,
        }]),
        owner: Some(VenueOwner {
            name: String::from("ola"),
            email: None,
        }),
    }
}

pub fn customer_context() -> EligibilityContext {
    EligibilityContext::for_venue(
        &SessionSnapshot::signed_in(create_test_customer()),
        &create_test_venue(),
    )
}

pub fn owner_context() -> EligibilityContext {
    EligibilityContext::for_venue(
        &SessionSnapshot::signed_in(create_test_manager()),
        &create_test_venue(),
    )
}

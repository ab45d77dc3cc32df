// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Venue records as delivered by the remote API.
//!
//! Field names follow the API's camelCase JSON. Optional collections may be
//! absent or `null`; accessors expose them as (possibly empty) slices.

use crate::booking::ExistingBooking;
use crate::error::DomainError;
use crate::interval::DayRange;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// One image for a venue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueMedia {
    /// Image URL. May be blank in data created by other clients.
    #[serde(default)]
    pub url: String,
    /// Alternative text.
    #[serde(default)]
    pub alt: Option<String>,
}

/// Amenity flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueMeta {
    /// Wi-Fi available.
    #[serde(default)]
    pub wifi: bool,
    /// Parking available.
    #[serde(default)]
    pub parking: bool,
    /// Breakfast included.
    #[serde(default)]
    pub breakfast: bool,
    /// Pets allowed.
    #[serde(default)]
    pub pets: bool,
}

/// Address information.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VenueLocation {
    /// Street address.
    #[serde(default)]
    pub address: Option<String>,
    /// City.
    #[serde(default)]
    pub city: Option<String>,
    /// Postal code.
    #[serde(default)]
    pub zip: Option<String>,
    /// Country.
    #[serde(default)]
    pub country: Option<String>,
    /// Continent.
    #[serde(default)]
    pub continent: Option<String>,
    /// Latitude.
    #[serde(default)]
    pub lat: Option<f64>,
    /// Longitude.
    #[serde(default)]
    pub lng: Option<f64>,
}

/// The customer who made a booking, as visible to the venue's manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingCustomer {
    /// Profile name.
    #[serde(default)]
    pub name: Option<String>,
    /// Email address.
    #[serde(default)]
    pub email: Option<String>,
}

/// One booking on a venue, with ISO-8601 date strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueBooking {
    /// Booking identifier.
    pub id: String,
    /// First night (ISO 8601).
    pub date_from: String,
    /// Departure day (ISO 8601).
    pub date_to: String,
    /// Number of guests.
    #[serde(default)]
    pub guests: u32,
    /// Creation timestamp.
    #[serde(default)]
    pub created: Option<String>,
    /// Last update timestamp.
    #[serde(default)]
    pub updated: Option<String>,
    /// Who booked, when the API includes it.
    #[serde(default)]
    pub customer: Option<BookingCustomer>,
}

impl VenueBooking {
    /// Parses this record into day-level booking dates.
    ///
    /// # Errors
    ///
    /// Returns an error if either date is unparsable or the range is inverted.
    pub fn to_existing(&self) -> Result<ExistingBooking, DomainError> {
        ExistingBooking::parse(&self.date_from, &self.date_to)
    }

    /// Display name for the guest: customer name, else email, else "Guest".
    #[must_use]
    pub fn guest_display_name(&self) -> &str {
        self.customer
            .as_ref()
            .and_then(|c| c.name.as_deref().or(c.email.as_deref()))
            .unwrap_or("Guest")
    }
}

/// The venue owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueOwner {
    /// Profile name; this is the identity ownership is decided by.
    pub name: String,
    /// Email address.
    #[serde(default)]
    pub email: Option<String>,
}

/// A venue as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    /// Venue identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Images.
    #[serde(default)]
    pub media: Option<Vec<VenueMedia>>,
    /// Nightly rate.
    pub price: f64,
    /// Maximum number of guests.
    pub max_guests: u32,
    /// Average rating.
    #[serde(default)]
    pub rating: f64,
    /// Creation timestamp.
    #[serde(default)]
    pub created: Option<String>,
    /// Last update timestamp.
    #[serde(default)]
    pub updated: Option<String>,
    /// Amenities.
    #[serde(default)]
    pub meta: Option<VenueMeta>,
    /// Address.
    #[serde(default)]
    pub location: Option<VenueLocation>,
    /// Existing bookings, when requested with `_bookings=true`.
    #[serde(default)]
    pub bookings: Option<Vec<VenueBooking>>,
    /// Owner, when requested with `_owner=true`.
    #[serde(default)]
    pub owner: Option<VenueOwner>,
}

impl Venue {
    /// Images, or an empty slice.
    #[must_use]
    pub fn media(&self) -> &[VenueMedia] {
        self.media.as_deref().unwrap_or_default()
    }

    /// Booking records, or an empty slice.
    #[must_use]
    pub fn booking_records(&self) -> &[VenueBooking] {
        self.bookings.as_deref().unwrap_or_default()
    }

    /// City, if known.
    #[must_use]
    pub fn city(&self) -> Option<&str> {
        self.location.as_ref().and_then(|l| l.city.as_deref())
    }

    /// Country, if known.
    #[must_use]
    pub fn country(&self) -> Option<&str> {
        self.location.as_ref().and_then(|l| l.country.as_deref())
    }

    /// True if at least one image has a non-blank URL.
    #[must_use]
    pub fn has_displayable_media(&self) -> bool {
        self.media().iter().any(|m| !m.url.trim().is_empty())
    }

    /// True if the named user owns this venue.
    #[must_use]
    pub fn is_owned_by(&self, user_name: &str) -> bool {
        self.owner.as_ref().is_some_and(|owner| owner.name == user_name)
    }

    /// Parses every booking record.
    ///
    /// # Errors
    ///
    /// Returns the first record that cannot be parsed.
    pub fn existing_bookings(&self) -> Result<Vec<ExistingBooking>, DomainError> {
        self.booking_records()
            .iter()
            .map(VenueBooking::to_existing)
            .collect()
    }

    /// Recency sort key: the later of `created` and `updated`, in unix
    /// nanoseconds. Missing or unparsable timestamps count as the epoch.
    #[must_use]
    pub fn recency_key(&self) -> i128 {
        let parse = |value: Option<&String>| -> i128 {
            value
                .and_then(|v| OffsetDateTime::parse(v, &Rfc3339).ok())
                .map_or(0, OffsetDateTime::unix_timestamp_nanos)
        };
        parse(self.created.as_ref()).max(parse(self.updated.as_ref()))
    }

    /// Case-insensitive substring match across name, description, city and
    /// country. An empty (or blank) query matches everything.
    #[must_use]
    pub fn matches_query(&self, query: &str) -> bool {
        let needle: String = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [
            Some(self.name.as_str()),
            self.description.as_deref(),
            self.city(),
            self.country(),
        ]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&needle))
    }

    /// False if any existing booking overlaps `range`.
    ///
    /// Booking records that cannot be parsed are ignored here; the remote API
    /// remains the authority on conflicts.
    #[must_use]
    pub fn is_available_during(&self, range: DayRange) -> bool {
        !self.booking_records().iter().any(|record| {
            match record.to_existing() {
                Ok(booking) => range.overlaps(booking.date_from(), booking.date_to()),
                Err(e) => {
                    tracing::warn!(venue = %self.id, booking = %record.id, "Skipping booking: {e}");
                    false
                }
            }
        })
    }

    /// The first image URL, if any, for card rendering.
    #[must_use]
    pub fn hero_image(&self) -> Option<&str> {
        self.media()
            .iter()
            .map(|m| m.url.trim())
            .find(|url| !url.is_empty())
    }
}

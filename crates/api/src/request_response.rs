// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Records exchanged with the remote API and the navigation collaborator.

use crate::auth::{AuthenticatedUser, Role};
use holidaze_domain::{CalendarDay, DomainError, GuestCount, Venue};
use serde::{Deserialize, Serialize};

/// Body of the booking-creation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    /// Arrival day, as an RFC 3339 timestamp at the start of the day.
    pub date_from: String,
    /// Departure day, as an RFC 3339 timestamp at the start of the day.
    pub date_to: String,
    /// Number of guests.
    pub guests: u32,
    /// The venue being booked.
    pub venue_id: String,
}

impl CreateBookingRequest {
    /// Builds a request for a validated stay.
    ///
    /// # Errors
    ///
    /// Returns an error if a day cannot be rendered as a timestamp.
    pub fn new(
        venue_id: &str,
        check_in: CalendarDay,
        check_out: CalendarDay,
        guests: GuestCount,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            date_from: check_in.to_day_start_rfc3339()?,
            date_to: check_out.to_day_start_rfc3339()?,
            guests: guests.value(),
            venue_id: venue_id.to_string(),
        })
    }
}

/// A booking as confirmed by the remote API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedBooking {
    /// Booking identifier.
    pub id: String,
    /// First night.
    pub date_from: String,
    /// Departure day.
    pub date_to: String,
    /// Number of guests.
    pub guests: u32,
    /// Creation timestamp.
    #[serde(default)]
    pub created: Option<String>,
    /// Last update timestamp.
    #[serde(default)]
    pub updated: Option<String>,
    /// The booked venue, when echoed back.
    #[serde(default)]
    pub venue_id: Option<String>,
}

/// Success envelope of the booking-creation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBookingResponse {
    /// The created booking.
    pub data: CreatedBooking,
}

/// Envelope of a single-venue lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingleVenueResponse {
    /// The venue.
    pub data: Venue,
}

/// One entry in an error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorItem {
    /// Human-readable message.
    pub message: String,
}

/// Error body returned by the remote API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Top-level message, if any.
    #[serde(default)]
    pub message: Option<String>,
    /// Detailed messages.
    #[serde(default)]
    pub errors: Vec<ApiErrorItem>,
}

impl ApiErrorResponse {
    /// The message to surface for a failed booking.
    ///
    /// Prefers the first detailed message, then the top-level message, then
    /// a generic one naming the HTTP status.
    #[must_use]
    pub fn booking_failure_message(&self, status: u16) -> String {
        self.errors
            .first()
            .map(|item| item.message.as_str())
            .filter(|message| !message.is_empty())
            .or_else(|| self.message.as_deref().filter(|message| !message.is_empty()))
            .map_or_else(|| format!("Booking failed ({status})"), str::to_string)
    }
}

/// Profile fields of a login response. The access token is not kept here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginProfile {
    /// Profile name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// True for venue managers.
    #[serde(default)]
    pub venue_manager: bool,
}

impl From<LoginProfile> for AuthenticatedUser {
    fn from(profile: LoginProfile) -> Self {
        Self::new(
            profile.name,
            profile.email,
            Role::from_venue_manager(profile.venue_manager),
        )
    }
}

/// A request to the navigation collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "to", rename_all = "camelCase")]
pub enum Navigation {
    /// The login page.
    #[serde(rename_all = "camelCase")]
    Login {
        /// Where to come back to afterwards.
        return_to: String,
    },
    /// The user's own bookings.
    Bookings,
}

impl Navigation {
    /// The route path.
    #[must_use]
    pub const fn path(&self) -> &'static str {
        match self {
            Self::Login { .. } => "/auth/login",
            Self::Bookings => "/profile",
        }
    }
}

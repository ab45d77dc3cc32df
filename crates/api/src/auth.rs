// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Account roles and the session view the booking gate consumes.

use holidaze_domain::Venue;
use serde::Serialize;

/// Account roles.
///
/// Roles come from the profile's `venueManager` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Role {
    /// Customer role: may book any venue.
    Customer,
    /// Manager role: owns venues and sees bookings made on them.
    ///
    /// Managers may book venues they do not own, but never their own.
    Manager,
}

impl Role {
    /// Maps the profile's `venueManager` flag to a role.
    #[must_use]
    pub const fn from_venue_manager(venue_manager: bool) -> Self {
        if venue_manager {
            Self::Manager
        } else {
            Self::Customer
        }
    }
}

/// A logged-in account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthenticatedUser {
    /// Profile name. Venue ownership is matched on this.
    pub name: String,
    /// Email address.
    pub email: String,
    /// The account role.
    pub role: Role,
}

impl AuthenticatedUser {
    /// Creates a new authenticated user.
    ///
    /// # Arguments
    ///
    /// * `name` - The profile name
    /// * `email` - The email address
    /// * `role` - The account role
    #[must_use]
    pub const fn new(name: String, email: String, role: Role) -> Self {
        Self { name, email, role }
    }

    /// True if this account manages venues.
    #[must_use]
    pub const fn is_manager(&self) -> bool {
        matches!(self.role, Role::Manager)
    }
}

/// The session state at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    user: Option<AuthenticatedUser>,
}

impl SessionSnapshot {
    /// A session with nobody logged in.
    #[must_use]
    pub const fn anonymous() -> Self {
        Self { user: None }
    }

    /// A session for `user`.
    #[must_use]
    pub const fn signed_in(user: AuthenticatedUser) -> Self {
        Self { user: Some(user) }
    }

    /// The logged-in user, if any.
    #[must_use]
    pub const fn user(&self) -> Option<&AuthenticatedUser> {
        self.user.as_ref()
    }

    /// True if someone is logged in.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Everything the booking gate needs to know about who is asking.
///
/// Derived fresh for every decision; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityContext {
    /// True if someone is logged in.
    pub is_authenticated: bool,
    /// The account role. Anonymous sessions report `Customer`.
    pub account_role: Role,
    /// True if the logged-in user owns the venue being booked.
    pub is_owner_of_venue: bool,
}

impl EligibilityContext {
    /// Derives the context for booking `venue` in `session`.
    #[must_use]
    pub fn for_venue(session: &SessionSnapshot, venue: &Venue) -> Self {
        session.user().map_or_else(Self::anonymous, |user| Self {
            is_authenticated: true,
            account_role: user.role,
            is_owner_of_venue: venue.is_owned_by(&user.name),
        })
    }

    /// The context of a visitor who is not logged in.
    #[must_use]
    pub const fn anonymous() -> Self {
        Self {
            is_authenticated: false,
            account_role: Role::Customer,
            is_owner_of_venue: false,
        }
    }

    /// True if this is a manager looking at their own venue.
    #[must_use]
    pub const fn is_self_booking(&self) -> bool {
        matches!(self.account_role, Role::Manager) && self.is_owner_of_venue
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking eligibility for submit-button gating.
//!
//! The gate decides whether a booking may be submitted and, when it may not,
//! why. The reason doubles as the submit control's label so a disabled
//! button always explains itself. Decisions are advisory only; the remote
//! API remains the authority on conflicts.
//!
//! Rules are evaluated in order, first match wins:
//!
//! 1. not logged in: blocked, redirect to login
//! 2. a manager looking at their own venue: blocked
//! 3. a submission is already in flight: blocked
//! 4. invalid dates or guests out of bounds: blocked
//! 5. otherwise: allowed

use crate::auth::EligibilityContext;
use holidaze::Selection;
use holidaze_domain::{ExistingBooking, PriceQuote, guests_within_bounds, is_range_valid, quote};
use serde::Serialize;

/// Whether an action is permitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// The action is permitted.
    Allowed,
    /// The action is not permitted.
    Denied,
}

impl Capability {
    /// Returns true if the capability is allowed.
    #[must_use]
    pub const fn is_allowed(self) -> bool {
        matches!(self, Self::Allowed)
    }

    /// Creates a capability from a boolean value.
    #[must_use]
    pub const fn from_bool(value: bool) -> Self {
        if value { Self::Allowed } else { Self::Denied }
    }
}

impl Serialize for Capability {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_bool(self.is_allowed())
    }
}

/// Why a booking cannot be submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BlockReason {
    /// Nobody is logged in.
    NotAuthenticated,
    /// A manager is trying to book their own venue.
    OwnVenue,
    /// A previous submission has not resolved yet.
    SubmissionInFlight,
    /// The dates or the guest count are not acceptable.
    InvalidSelection,
}

impl BlockReason {
    /// Inline guidance shown next to the submit control.
    #[must_use]
    pub const fn guidance(self) -> &'static str {
        match self {
            Self::NotAuthenticated => "Log in to book this venue.",
            Self::OwnVenue => "You can't book your own venue.",
            Self::SubmissionInFlight => "Your booking is being submitted.",
            Self::InvalidSelection => "Select valid dates & guests.",
        }
    }

    /// The submit label that communicates this reason.
    #[must_use]
    pub const fn label(self) -> SubmitLabel {
        match self {
            Self::NotAuthenticated => SubmitLabel::LoginToBook,
            Self::OwnVenue => SubmitLabel::OwnVenue,
            Self::SubmissionInFlight => SubmitLabel::Booking,
            Self::InvalidSelection => SubmitLabel::SelectDatesAndGuests,
        }
    }
}

/// Text of the submit control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitLabel {
    /// "Login to book"
    LoginToBook,
    /// "Cannot book your own venue"
    OwnVenue,
    /// "Booking…"
    Booking,
    /// "Confirm booking"
    ConfirmBooking,
    /// "Select dates & guests"
    SelectDatesAndGuests,
}

impl SubmitLabel {
    /// The label text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LoginToBook => "Login to book",
            Self::OwnVenue => "Cannot book your own venue",
            Self::Booking => "Booking…",
            Self::ConfirmBooking => "Confirm booking",
            Self::SelectDatesAndGuests => "Select dates & guests",
        }
    }
}

impl std::fmt::Display for SubmitLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SubmitLabel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// What pressing the submit control should do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum GateAction {
    /// Send the visitor to the login page, coming back here afterwards.
    #[serde(rename_all = "camelCase")]
    RedirectToLogin {
        /// Where to return after logging in.
        return_to: String,
    },
    /// Hand the booking to the booking-creation collaborator.
    SubmitBooking,
}

/// The outcome of evaluating the booking gate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingDecision {
    /// Whether submission is permitted.
    pub submit: Capability,
    /// The submit control's label.
    pub label: SubmitLabel,
    /// Why submission is blocked, if it is.
    pub reason: Option<BlockReason>,
    /// What pressing the control does. `None` means the control is inert.
    pub action: Option<GateAction>,
    /// Nights and total for the current selection.
    pub quote: PriceQuote,
}

impl BookingDecision {
    /// Inline guidance for the current reason, if any.
    #[must_use]
    pub fn guidance(&self) -> Option<&'static str> {
        self.reason.map(BlockReason::guidance)
    }

    fn blocked(reason: BlockReason, action: Option<GateAction>, quote: PriceQuote) -> Self {
        Self {
            submit: Capability::Denied,
            label: reason.label(),
            reason: Some(reason),
            action,
            quote,
        }
    }
}

/// Decides whether the current selection may be submitted.
///
/// # Arguments
///
/// * `context` - Who is asking
/// * `venue_id` - The venue being booked, for the login return path
/// * `selection` - The current date selection
/// * `guests` - The requested guest count, as entered
/// * `max_guests` - The venue's capacity
/// * `nightly_rate` - The venue's price per night
/// * `bookings` - Existing bookings of the venue
/// * `submitting` - True while a previous submission is outstanding
///
/// # Returns
///
/// A `BookingDecision`; blocked outcomes are data, never errors.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn evaluate_booking(
    context: &EligibilityContext,
    venue_id: &str,
    selection: &Selection,
    guests: u32,
    max_guests: u32,
    nightly_rate: f64,
    bookings: &[ExistingBooking],
    submitting: bool,
) -> BookingDecision {
    let quote: PriceQuote = quote(selection.check_in(), selection.check_out(), nightly_rate);

    let decision: BookingDecision = if !context.is_authenticated {
        BookingDecision::blocked(
            BlockReason::NotAuthenticated,
            Some(GateAction::RedirectToLogin {
                return_to: format!("/venues/{venue_id}"),
            }),
            quote,
        )
    } else if context.is_self_booking() {
        BookingDecision::blocked(BlockReason::OwnVenue, None, quote)
    } else if submitting {
        BookingDecision::blocked(BlockReason::SubmissionInFlight, None, quote)
    } else if !is_range_valid(selection.check_in(), selection.check_out(), bookings)
        || !guests_within_bounds(guests, max_guests)
    {
        BookingDecision::blocked(BlockReason::InvalidSelection, None, quote)
    } else {
        BookingDecision {
            submit: Capability::Allowed,
            label: SubmitLabel::ConfirmBooking,
            reason: None,
            action: Some(GateAction::SubmitBooking),
            quote,
        }
    };

    tracing::debug!(
        venue = venue_id,
        submit = ?decision.submit,
        reason = ?decision.reason,
        "Evaluated booking gate"
    );
    decision
}

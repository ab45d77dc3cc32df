// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The per-venue booking session.
//!
//! A session owns the date selection, the guest count and the submission
//! lifecycle for one venue detail view. Submission is split in two so the
//! network call stays with the caller: [`BookingSession::begin_submission`]
//! hands out the request together with a [`SubmissionTicket`] and marks the
//! session in flight, and [`BookingSession::complete_submission`] applies the
//! outcome for that ticket.
//!
//! ## Invariants
//!
//! - The selection is never changed before a submission resolves.
//! - At most one submission is in flight.
//! - A completion only applies if its ticket is the one in flight. Switching
//!   venue abandons the outstanding ticket.
//! - After [`BookingSession::teardown`], completions are ignored.

use crate::auth::EligibilityContext;
use crate::eligibility::{BlockReason, BookingDecision, GateAction, evaluate_booking};
use crate::error::ApiError;
use crate::request_response::{CreateBookingRequest, CreatedBooking, Navigation};
use holidaze::{Command, Selection, SelectionEffect, TransitionResult, apply, validate_full_range};
use holidaze_domain::{CalendarDay, ExistingBooking, GuestCount, PriceQuote, Venue, quote};

/// Notice shown after a booking went through.
const BOOKING_CONFIRMED: &str = "Booking confirmed!";

/// Identifies one submission within a session.
///
/// Tickets are never reused, so a result from an abandoned submission cannot
/// be mistaken for a later one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubmissionTicket(u64);

impl SubmissionTicket {
    /// The raw ticket number.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// What the caller should do after asking to submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStep {
    /// Navigate elsewhere instead of submitting.
    Redirect(Navigation),
    /// Send this request to the booking-creation collaborator, then report
    /// the outcome through [`BookingSession::complete_submission`] with
    /// `ticket`.
    Send {
        /// Hand back with the outcome.
        ticket: SubmissionTicket,
        /// The outbound request body.
        request: CreateBookingRequest,
    },
    /// Nothing to send.
    Blocked(BlockReason),
}

/// Booking state for one venue detail view.
#[derive(Debug, Clone)]
pub struct BookingSession {
    venue_id: String,
    nightly_rate: f64,
    bookings: Vec<ExistingBooking>,
    selection: Selection,
    guests: GuestCount,
    in_flight: Option<SubmissionTicket>,
    next_ticket: u64,
    alive: bool,
    server_error: Option<String>,
    server_success: Option<String>,
}

impl BookingSession {
    /// Opens a session for `venue`.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the venue's booking records is malformed.
    pub fn new(venue: &Venue) -> Result<Self, ApiError> {
        let bookings: Vec<ExistingBooking> = venue.existing_bookings()?;
        Ok(Self::from_parts(
            &venue.id,
            venue.price,
            venue.max_guests,
            bookings,
        ))
    }

    /// Opens a session from already-parsed venue data.
    #[must_use]
    pub fn from_parts(
        venue_id: &str,
        nightly_rate: f64,
        max_guests: u32,
        bookings: Vec<ExistingBooking>,
    ) -> Self {
        Self {
            venue_id: venue_id.to_string(),
            nightly_rate,
            bookings,
            selection: Selection::Empty,
            guests: GuestCount::single(max_guests),
            in_flight: None,
            next_ticket: 0,
            alive: true,
            server_error: None,
            server_success: None,
        }
    }

    /// The venue this session books.
    #[must_use]
    pub fn venue_id(&self) -> &str {
        &self.venue_id
    }

    /// The current selection.
    #[must_use]
    pub const fn selection(&self) -> Selection {
        self.selection
    }

    /// The current guest count.
    #[must_use]
    pub const fn guests(&self) -> GuestCount {
        self.guests
    }

    /// Existing bookings of the venue.
    #[must_use]
    pub fn bookings(&self) -> &[ExistingBooking] {
        &self.bookings
    }

    /// True while a submission is outstanding.
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    /// The ticket of the outstanding submission, if any.
    #[must_use]
    pub const fn in_flight(&self) -> Option<SubmissionTicket> {
        self.in_flight
    }

    /// False once the session has been torn down.
    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.alive
    }

    /// The last failure message, verbatim.
    #[must_use]
    pub fn server_error(&self) -> Option<&str> {
        self.server_error.as_deref()
    }

    /// The last success notice.
    #[must_use]
    pub fn server_success(&self) -> Option<&str> {
        self.server_success.as_deref()
    }

    /// Picks a check-in day. May clear the check-out.
    ///
    /// # Errors
    ///
    /// Returns an error if the selection rejects the day.
    pub fn set_check_in(&mut self, date: CalendarDay) -> Result<SelectionEffect, ApiError> {
        self.transition(Command::SetCheckIn { date })
    }

    /// Picks a check-out day.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the selection untouched, if no check-in is
    /// set or the resulting stay is not bookable.
    pub fn set_check_out(&mut self, date: CalendarDay) -> Result<SelectionEffect, ApiError> {
        self.transition(Command::SetCheckOut { date })
    }

    /// Clears both dates.
    pub fn reset_selection(&mut self) {
        self.selection = Selection::Empty;
    }

    /// Sets the guest count, clamped to the venue's limits. Returns the
    /// value actually applied.
    pub fn set_guests(&mut self, requested: i64) -> u32 {
        self.guests = GuestCount::clamped(requested, self.guests.max_guests());
        self.guests.value()
    }

    /// Nights and total for the current selection.
    #[must_use]
    pub fn quote(&self) -> PriceQuote {
        quote(
            self.selection.check_in(),
            self.selection.check_out(),
            self.nightly_rate,
        )
    }

    /// Evaluates the booking gate for the current state.
    #[must_use]
    pub fn decide(&self, context: &EligibilityContext) -> BookingDecision {
        evaluate_booking(
            context,
            &self.venue_id,
            &self.selection,
            self.guests.value(),
            self.guests.max_guests(),
            self.nightly_rate,
            &self.bookings,
            self.is_submitting(),
        )
    }

    /// Handles a press of the submit control.
    ///
    /// Clears any previous notice. When the gate allows it, builds the
    /// outbound request and marks the session in flight.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the session has been torn down
    /// - a submission is already in flight
    /// - the request cannot be built
    pub fn begin_submission(&mut self, context: &EligibilityContext) -> Result<SubmitStep, ApiError> {
        if !self.alive {
            return Err(ApiError::SessionClosed {
                venue_id: self.venue_id.clone(),
            });
        }
        if self.in_flight.is_some() {
            return Err(ApiError::SubmissionInFlight {
                venue_id: self.venue_id.clone(),
            });
        }

        self.server_error = None;
        self.server_success = None;

        let decision: BookingDecision = self.decide(context);
        match (decision.reason, decision.action) {
            (_, Some(GateAction::RedirectToLogin { return_to })) => {
                Ok(SubmitStep::Redirect(Navigation::Login { return_to }))
            }
            (Some(reason), _) => {
                if reason == BlockReason::OwnVenue {
                    self.server_error = Some(reason.guidance().to_string());
                }
                Ok(SubmitStep::Blocked(reason))
            }
            (None, _) => {
                let (check_in, check_out): (CalendarDay, CalendarDay) =
                    validate_full_range(&self.selection, &self.bookings)?;
                let request: CreateBookingRequest =
                    CreateBookingRequest::new(&self.venue_id, check_in, check_out, self.guests)?;
                let ticket: SubmissionTicket = SubmissionTicket(self.next_ticket);
                self.next_ticket = self.next_ticket.wrapping_add(1);
                self.in_flight = Some(ticket);
                tracing::info!(
                    venue = %self.venue_id,
                    ticket = ticket.value(),
                    date_from = %request.date_from,
                    date_to = %request.date_to,
                    guests = request.guests,
                    "Submitting booking"
                );
                Ok(SubmitStep::Send { ticket, request })
            }
        }
    }

    /// Applies the outcome of the booking-creation call.
    ///
    /// On success the selection is cleared, guests return to one, and the
    /// caller is asked to show the user's bookings. On failure the message is
    /// kept verbatim and the selection stays for a retry.
    ///
    /// Returns `None` when there is nowhere to navigate, including when the
    /// session was torn down or `ticket` is not the submission in flight.
    pub fn complete_submission(
        &mut self,
        ticket: SubmissionTicket,
        outcome: Result<CreatedBooking, String>,
    ) -> Option<Navigation> {
        if !self.alive {
            tracing::warn!(venue = %self.venue_id, "Ignoring booking result after teardown");
            return None;
        }
        if self.in_flight != Some(ticket) {
            tracing::warn!(
                venue = %self.venue_id,
                ticket = ticket.value(),
                "Ignoring booking result that is not in flight"
            );
            return None;
        }
        self.in_flight = None;

        match outcome {
            Ok(created) => {
                tracing::info!(venue = %self.venue_id, booking = %created.id, "Booking confirmed");
                self.selection = Selection::Empty;
                self.guests = GuestCount::single(self.guests.max_guests());
                self.server_success = Some(BOOKING_CONFIRMED.to_string());
                Some(Navigation::Bookings)
            }
            Err(message) => {
                tracing::info!(venue = %self.venue_id, "Booking failed: {message}");
                self.server_error = Some(message);
                None
            }
        }
    }

    /// Moves the session to another venue, clearing the selection, guests and
    /// notices. An outstanding submission is abandoned; its result will be
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the session unchanged, if any of the new
    /// venue's booking records is malformed.
    pub fn switch_venue(&mut self, venue: &Venue) -> Result<(), ApiError> {
        let bookings: Vec<ExistingBooking> = venue.existing_bookings()?;
        tracing::debug!(from = %self.venue_id, to = %venue.id, "Switching venue");
        self.venue_id.clone_from(&venue.id);
        self.nightly_rate = venue.price;
        self.bookings = bookings;
        self.selection = Selection::Empty;
        self.guests = GuestCount::single(venue.max_guests);
        self.server_error = None;
        self.server_success = None;
        if let Some(ticket) = self.in_flight.take() {
            tracing::debug!(ticket = ticket.value(), "Abandoning in-flight submission");
        }
        Ok(())
    }

    /// Marks the view as gone. Later completions are ignored.
    pub fn teardown(&mut self) {
        self.alive = false;
    }

    fn transition(&mut self, command: Command) -> Result<SelectionEffect, ApiError> {
        let result: TransitionResult = apply(&self.bookings, &self.selection, command)?;
        self.selection = result.new_state;
        Ok(result.effect)
    }
}

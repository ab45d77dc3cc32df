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
    clippy::unwrap_used,
    clippy::expect_used
)]

mod auth;
mod booking_flow;
mod eligibility;
mod error;
mod request_response;
mod session;

#[cfg(test)]
mod tests;

pub use auth::{AuthenticatedUser, EligibilityContext, Role, SessionSnapshot};
pub use booking_flow::{BookingSession, SubmissionTicket, SubmitStep};
pub use eligibility::{
    BlockReason, BookingDecision, Capability, GateAction, SubmitLabel, evaluate_booking,
};
pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use request_response::{
    ApiErrorItem, ApiErrorResponse, CreateBookingRequest, CreateBookingResponse, CreatedBooking,
    LoginProfile, Navigation, SingleVenueResponse,
};
pub use session::{SessionHub, SessionObserver, SubscriptionId};

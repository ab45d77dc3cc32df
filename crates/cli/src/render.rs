// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Plain-text rendering of command results.

use holidaze_api::BookingDecision;
use holidaze_domain::{DayAvailability, Venue};
use std::fmt::Write;

const fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

/// One line per day: the day, then whether each picker offers it.
pub fn render_calendar(days: &[DayAvailability]) -> String {
    let mut out: String = String::new();
    for day in days {
        let _ = writeln!(
            out,
            "{}  check-in: {:<3}  check-out: {}",
            day.day,
            yes_no(day.check_in),
            yes_no(day.check_out)
        );
    }
    out
}

/// The quote and gate outcome for one venue.
pub fn render_decision(venue: &Venue, guests: u32, decision: &BookingDecision) -> String {
    let mut out: String = String::new();
    let _ = writeln!(out, "Venue:  {} ({})", venue.name, venue.id);
    if decision.quote.nights > 0 {
        let _ = writeln!(out, "Nights: {}", decision.quote.nights);
        let _ = writeln!(out, "Price:  {} kr", decision.quote.total);
        let _ = writeln!(out, "Guests: {guests}");
    } else {
        let _ = writeln!(out, "Select dates to see the total");
    }
    let _ = writeln!(out, "[{}]", decision.label);
    if let Some(guidance) = decision.guidance() {
        let _ = writeln!(out, "{guidance}");
    }
    out
}

/// One line per venue: id, name, place, nightly price and capacity.
pub fn render_venues(venues: &[&Venue]) -> String {
    let mut out: String = String::new();
    for venue in venues {
        let place: String = [venue.city(), venue.country()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<&str>>()
            .join(", ");
        let _ = writeln!(
            out,
            "{}  {}  {}  {} kr/night  max {} guests",
            venue.id,
            venue.name,
            if place.is_empty() { "-" } else { place.as_str() },
            venue.price,
            venue.max_guests
        );
    }
    let _ = writeln!(out, "{} venue(s)", venues.len());
    out
}

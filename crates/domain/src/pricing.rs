// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Nights and totals for a selected stay.
//!
//! Quotes are derived values. They are recomputed from the selection on every
//! change and never stored on their own.

use crate::calendar_day::CalendarDay;
use num_traits::ToPrimitive;
use serde::Serialize;

/// Price of a stay at a single nightly rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceQuote {
    /// Number of nights in the stay.
    pub nights: u32,
    /// `nights * nightly_rate`.
    pub total: f64,
}

/// Number of nights between check-in and check-out.
///
/// Zero when either side is missing or the range collapses; never negative.
#[must_use]
pub fn compute_nights(check_in: Option<CalendarDay>, check_out: Option<CalendarDay>) -> u32 {
    match (check_in, check_out) {
        (Some(check_in), Some(check_out)) => check_in
            .days_until(check_out)
            .max(0)
            .to_u32()
            .unwrap_or(u32::MAX),
        _ => 0,
    }
}

/// Total price for `nights` at `nightly_rate`. No fees, taxes, or rounding.
#[must_use]
pub fn compute_total(nights: u32, nightly_rate: f64) -> f64 {
    f64::from(nights) * nightly_rate
}

/// Builds a full quote for the given selection.
#[must_use]
pub fn quote(
    check_in: Option<CalendarDay>,
    check_out: Option<CalendarDay>,
    nightly_rate: f64,
) -> PriceQuote {
    let nights: u32 = compute_nights(check_in, check_out);
    PriceQuote {
        nights,
        total: compute_total(nights, nightly_rate),
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use num_traits::ToPrimitive;
use serde::Serialize;

/// True if `guests` is within `1..=max_guests`.
#[must_use]
pub const fn guests_within_bounds(guests: u32, max_guests: u32) -> bool {
    guests >= 1 && guests <= max_guests
}

/// A guest count held by the input layer.
///
/// Always within `1..=max_guests`. Venues reporting a maximum of zero are
/// treated as allowing a single guest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GuestCount {
    value: u32,
    max_guests: u32,
}

impl GuestCount {
    /// A single guest, the starting value for every booking form.
    #[must_use]
    pub const fn single(max_guests: u32) -> Self {
        Self {
            value: 1,
            max_guests: if max_guests == 0 { 1 } else { max_guests },
        }
    }

    /// Creates a guest count, rejecting values outside the venue's limits.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is outside `1..=max_guests`.
    pub fn new(value: u32, max_guests: u32) -> Result<Self, DomainError> {
        if !guests_within_bounds(value, max_guests) {
            return Err(DomainError::GuestsOutOfRange {
                guests: value,
                max_guests,
            });
        }
        Ok(Self { value, max_guests })
    }

    /// Clamps raw input (which may be negative or huge) into range.
    #[must_use]
    pub fn clamped(requested: i64, max_guests: u32) -> Self {
        let single: Self = Self::single(max_guests);
        let upper: i64 = i64::from(single.max_guests);
        let value: u32 = requested.clamp(1, upper).to_u32().unwrap_or(1);
        Self {
            value,
            max_guests: single.max_guests,
        }
    }

    /// The guest count.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.value
    }

    /// The venue maximum this count was bounded by.
    #[must_use]
    pub const fn max_guests(&self) -> u32 {
        self.max_guests
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert!(guests_within_bounds(1, 4));
        assert!(guests_within_bounds(4, 4));
        assert!(!guests_within_bounds(0, 4));
        assert!(!guests_within_bounds(5, 4));
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert_eq!(GuestCount::new(2, 4).unwrap().value(), 2);
        assert_eq!(
            GuestCount::new(5, 4),
            Err(DomainError::GuestsOutOfRange {
                guests: 5,
                max_guests: 4
            })
        );
        assert!(GuestCount::new(0, 4).is_err());
    }

    #[test]
    fn test_clamped_never_leaves_range() {
        assert_eq!(GuestCount::clamped(-3, 4).value(), 1);
        assert_eq!(GuestCount::clamped(0, 4).value(), 1);
        assert_eq!(GuestCount::clamped(3, 4).value(), 3);
        assert_eq!(GuestCount::clamped(40, 4).value(), 4);
        assert_eq!(GuestCount::clamped(i64::MAX, 4).value(), 4);
    }

    #[test]
    fn test_zero_max_allows_one_guest() {
        let count: GuestCount = GuestCount::clamped(3, 0);
        assert_eq!(count.value(), 1);
        assert_eq!(count.max_guests(), 1);
    }
}

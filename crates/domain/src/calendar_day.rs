// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Day-granularity calendar values.
//!
//! Every date that enters the booking rules is truncated to a calendar day
//! first. Timestamps are normalized to their UTC day, so a guest departing on
//! day D and another arriving on day D compare as the same day regardless of
//! the time-of-day component the remote API attached.

use crate::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, Month, OffsetDateTime, UtcOffset};

/// A single calendar day with no time-of-day or timezone component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDay(Date);

impl CalendarDay {
    /// Wraps an already day-truncated date.
    #[must_use]
    pub const fn from_date(date: Date) -> Self {
        Self(date)
    }

    /// Builds a day from its year, month, and day-of-month.
    ///
    /// # Errors
    ///
    /// Returns an error if the components do not name a real calendar day.
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self, DomainError> {
        let parse_error = |error: String| DomainError::DateParse {
            date_string: format!("{year:04}-{month:02}-{day:02}"),
            error,
        };
        let month: Month = Month::try_from(month).map_err(|e| parse_error(e.to_string()))?;
        Date::from_calendar_date(year, month, day)
            .map(Self)
            .map_err(|e| parse_error(e.to_string()))
    }

    /// Parses an ISO-8601 value into its calendar day.
    ///
    /// Accepts either a full RFC 3339 timestamp, which is normalized to its
    /// UTC day, or a bare `YYYY-MM-DD` date.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is neither form.
    pub fn parse_iso(value: &str) -> Result<Self, DomainError> {
        let trimmed: &str = value.trim();
        if let Ok(timestamp) = OffsetDateTime::parse(trimmed, &Rfc3339) {
            return Ok(Self(timestamp.to_offset(UtcOffset::UTC).date()));
        }
        Date::parse(trimmed, format_description!("[year]-[month]-[day]"))
            .map(Self)
            .map_err(|e| DomainError::DateParse {
                date_string: value.to_string(),
                error: e.to_string(),
            })
    }

    /// The current UTC calendar day.
    #[must_use]
    pub fn today_utc() -> Self {
        Self(OffsetDateTime::now_utc().date())
    }

    /// The underlying `time::Date`.
    #[must_use]
    pub const fn date(self) -> Date {
        self.0
    }

    /// Moves the day forward (or backward, for negative values).
    ///
    /// Saturates at the representable calendar bounds.
    #[must_use]
    pub fn add_days(self, days: i64) -> Self {
        let target: i64 = i64::from(self.0.to_julian_day()).saturating_add(days);
        match i32::try_from(target)
            .ok()
            .and_then(|julian| Date::from_julian_day(julian).ok())
        {
            Some(date) => Self(date),
            None if days < 0 => Self(Date::MIN),
            None => Self(Date::MAX),
        }
    }

    /// Signed number of days from `self` to `later`.
    #[must_use]
    pub fn days_until(self, later: Self) -> i64 {
        i64::from(later.0.to_julian_day()) - i64::from(self.0.to_julian_day())
    }

    /// Formats the start of this day as an RFC 3339 UTC timestamp.
    ///
    /// This is the representation the booking-creation endpoint expects,
    /// e.g. `2024-03-10T00:00:00Z`.
    ///
    /// # Errors
    ///
    /// Returns an error if the timestamp cannot be formatted.
    pub fn to_day_start_rfc3339(self) -> Result<String, DomainError> {
        self.0
            .midnight()
            .assume_utc()
            .format(&Rfc3339)
            .map_err(|e| DomainError::DateFormat {
                day: self,
                error: e.to_string(),
            })
    }
}

impl std::fmt::Display for CalendarDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for CalendarDay {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_iso(s)
    }
}

impl Serialize for CalendarDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CalendarDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw: String = String::deserialize(deserializer)?;
        Self::parse_iso(&raw).map_err(serde::de::Error::custom)
    }
}

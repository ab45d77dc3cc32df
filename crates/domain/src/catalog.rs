// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Venue list aggregation.
//!
//! Pages of venues arrive incrementally. They are merged into one collection
//! keyed by venue id (later pages win), venues without a usable image are
//! dropped, and the result is presented newest first.
//!
//! ## Invariants
//!
//! - Each venue id appears at most once.
//! - Every retained venue has at least one non-blank image URL.
//! - Ordering is by [`Venue::recency_key`] descending, ties broken by id so
//!   the order is stable across calls.

use crate::calendar_day::CalendarDay;
use crate::interval::DayRange;
use crate::venue::Venue;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::BTreeMap;

/// Paging metadata returned alongside each page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    /// True on the first page.
    #[serde(default)]
    pub is_first_page: bool,
    /// True on the last page. Absent in some responses.
    #[serde(default)]
    pub is_last_page: Option<bool>,
    /// The page this response holds.
    #[serde(default)]
    pub current_page: u32,
    /// The previous page, if any.
    #[serde(default)]
    pub previous_page: Option<u32>,
    /// The next page, if any.
    #[serde(default)]
    pub next_page: Option<u32>,
    /// Total number of pages.
    #[serde(default)]
    pub page_count: u32,
    /// Total number of venues.
    #[serde(default)]
    pub total_count: u32,
}

impl PageMeta {
    /// The page to fetch after this one, or `None` when this is the last.
    ///
    /// `isLastPage` wins when present; otherwise a missing `nextPage` ends the
    /// walk.
    #[must_use]
    pub fn following_page(&self) -> Option<u32> {
        let is_last: bool = self.is_last_page.unwrap_or(self.next_page.is_none());
        if is_last {
            return None;
        }
        Some(
            self.next_page
                .unwrap_or_else(|| self.current_page.saturating_add(1)),
        )
    }
}

/// One page of the venue list response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VenuePage {
    /// Venues on this page.
    #[serde(default)]
    pub data: Vec<Venue>,
    /// Paging metadata.
    #[serde(default)]
    pub meta: PageMeta,
}

/// Client-side search over the aggregated catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VenueFilter {
    /// Free-text query. Blank matches everything.
    pub query: String,
    /// Requested stay. `None` matches everything.
    pub range: Option<DayRange>,
}

impl VenueFilter {
    /// Builds a filter from a query and an optional `[from, to)` pair.
    ///
    /// A range is only applied when both ends are present.
    #[must_use]
    pub fn new(query: &str, from: Option<CalendarDay>, to: Option<CalendarDay>) -> Self {
        let range: Option<DayRange> = match (from, to) {
            (Some(start), Some(end)) => Some(DayRange::new(start, end)),
            _ => None,
        };
        Self {
            query: query.to_string(),
            range,
        }
    }

    /// True if the venue passes both predicates.
    #[must_use]
    pub fn matches(&self, venue: &Venue) -> bool {
        venue.matches_query(&self.query)
            && self
                .range
                .is_none_or(|range| venue.is_available_during(range))
    }
}

/// Accumulated venue list across pages.
#[derive(Debug, Clone, Default)]
pub struct VenueCatalog {
    venues: BTreeMap<String, Venue>,
    next_page: Option<u32>,
    pages_ingested: u32,
    complete: bool,
}

impl VenueCatalog {
    /// Creates an empty catalog that expects page 1 next.
    #[must_use]
    pub fn new() -> Self {
        Self {
            venues: BTreeMap::new(),
            next_page: Some(1),
            pages_ingested: 0,
            complete: false,
        }
    }

    /// Merges a page and returns the next page to fetch, if any.
    pub fn ingest_page(&mut self, page: VenuePage) -> Option<u32> {
        let received: usize = page.data.len();
        let kept: usize = self.ingest_venues(page.data);
        self.pages_ingested = self.pages_ingested.saturating_add(1);
        self.next_page = page.meta.following_page();
        self.complete = self.next_page.is_none();

        tracing::debug!(
            page = page.meta.current_page,
            received,
            kept,
            total = self.venues.len(),
            next = ?self.next_page,
            "Ingested venue page"
        );
        if self.complete {
            tracing::info!(
                pages = self.pages_ingested,
                venues = self.venues.len(),
                "Venue catalog complete"
            );
        }
        self.next_page
    }

    /// Merges venues without paging metadata. Returns how many were kept.
    ///
    /// A later copy without images removes any earlier copy of the same id.
    pub fn ingest_venues(&mut self, venues: Vec<Venue>) -> usize {
        let mut kept: usize = 0;
        for venue in venues {
            if !venue.has_displayable_media() {
                tracing::debug!(venue = %venue.id, "Dropping venue without images");
                self.venues.remove(&venue.id);
                continue;
            }
            kept += 1;
            self.venues.insert(venue.id.clone(), venue);
        }
        kept
    }

    /// The page to request next, or `None` once the last page is in.
    #[must_use]
    pub const fn next_page(&self) -> Option<u32> {
        self.next_page
    }

    /// True once a page reported itself as the last.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.complete
    }

    /// Number of distinct venues held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.venues.len()
    }

    /// True if no venues are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.venues.is_empty()
    }

    /// Looks up a venue by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Venue> {
        self.venues.get(id)
    }

    /// Every venue, newest first.
    #[must_use]
    pub fn sorted(&self) -> Vec<&Venue> {
        let mut venues: Vec<&Venue> = self.venues.values().collect();
        venues.sort_by_cached_key(|venue| (Reverse(venue.recency_key()), venue.id.clone()));
        venues
    }

    /// Venues passing `filter`, newest first.
    #[must_use]
    pub fn search(&self, filter: &VenueFilter) -> Vec<&Venue> {
        self.sorted()
            .into_iter()
            .filter(|venue| filter.matches(venue))
            .collect()
    }
}

/// Merges already-fetched pages into one deduplicated list, newest first.
#[must_use]
pub fn merge_pages<I>(pages: I) -> Vec<Venue>
where
    I: IntoIterator<Item = Vec<Venue>>,
{
    let mut catalog: VenueCatalog = VenueCatalog::new();
    for page in pages {
        catalog.ingest_venues(page);
    }
    catalog.sorted().into_iter().cloned().collect()
}

//! Date → events index over one event store snapshot.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use super::event::{Event, EventStore};
use super::month::YearMonth;

/// Events shown directly in a grid cell before collapsing into "+N more".
pub const DEFAULT_CELL_EVENT_LIMIT: usize = 2;

/// Events grouped by exact date, each group in store order.
///
/// Borrowing the store ties the index to one snapshot: a refreshed store needs
/// a new index.
#[derive(Debug, Clone, Default)]
pub struct DateEventIndex<'a> {
    by_date: HashMap<NaiveDate, Vec<&'a Event>>,
}

/// What a single grid cell displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellEvents<'a> {
    pub shown: Vec<&'a Event>,
    /// Events beyond `shown`; rendered as "+N more" when non-zero.
    pub remainder: usize,
}

impl CellEvents<'_> {
    pub fn total(&self) -> usize {
        self.shown.len() + self.remainder
    }
}

impl<'a> DateEventIndex<'a> {
    pub fn build(store: &'a EventStore) -> Self {
        let mut by_date: HashMap<NaiveDate, Vec<&'a Event>> = HashMap::new();
        for event in store {
            by_date.entry(event.date).or_default().push(event);
        }
        debug!(
            events = store.len(),
            dates = by_date.len(),
            "built date-event index"
        );
        Self { by_date }
    }

    /// Events on exactly `date`, in store order.
    pub fn events_on(&self, date: NaiveDate) -> &[&'a Event] {
        self.by_date.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Events on a zero-indexed `(year, month, day)`.
    ///
    /// A triple that names no real date (month 12, February 30) has no events.
    pub fn events_for(&self, year: i32, month0: u32, day: u32) -> &[&'a Event] {
        YearMonth::new(year, month0)
            .ok()
            .and_then(|month| month.date(day))
            .map(|date| self.events_on(date))
            .unwrap_or(&[])
    }

    /// Up to `limit` events for a cell, plus how many were left out.
    pub fn cell_events(&self, date: NaiveDate, limit: usize) -> CellEvents<'a> {
        let events = self.events_on(date);
        let shown_len = events.len().min(limit);
        CellEvents {
            shown: events[..shown_len].to_vec(),
            remainder: events.len() - shown_len,
        }
    }

    /// Number of distinct dates carrying at least one event.
    pub fn date_count(&self) -> usize {
        self.by_date.len()
    }
}

use chrono::NaiveDate;

use super::event::{Event, EventStore};

/// Length of the sidebar's "next events" list.
pub const DEFAULT_UPCOMING_LIMIT: usize = 5;

/// Events on or after `today`, earliest first, at most `limit` of them.
///
/// Same-day events keep their store order (`sort_by_key` is stable).
pub fn upcoming_events(store: &EventStore, today: NaiveDate, limit: usize) -> Vec<&Event> {
    let mut upcoming: Vec<&Event> = store.iter().filter(|e| e.date >= today).collect();
    upcoming.sort_by_key(|e| e.date);
    upcoming.truncate(limit);
    upcoming
}

//! Built-in demo data, used when no data files are configured.

use chrono::NaiveDate;

use crate::calendar::{Event, EventStore, EventType};
use crate::milestone::Milestone;

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

/// The SAT-prep schedule for May 2025.
pub fn sample_events() -> EventStore {
    let events = vec![
        Event::new(1i64, ymd(2025, 5, 6), "Full SAT Mock Test", EventType::Test, "9:00 AM - 12:30 PM"),
        Event::new(2i64, ymd(2025, 5, 9), "Essay Submission Due", EventType::Assignment, "11:59 PM"),
        Event::new(3i64, ymd(2025, 5, 12), "College Webinar", EventType::Webinar, "4:00 PM - 5:30 PM"),
        Event::new(4i64, ymd(2025, 5, 15), "Math Section Practice", EventType::Practice, "2:00 PM - 3:30 PM"),
        Event::new(5i64, ymd(2025, 5, 20), "SAT Study Group", EventType::Study, "5:00 PM - 6:30 PM"),
        Event::new(6i64, ymd(2025, 5, 22), "Grammar Quiz", EventType::Test, "10:00 AM - 11:00 AM"),
        Event::new(7i64, ymd(2025, 5, 28), "College Application Workshop", EventType::Webinar, "3:00 PM - 5:00 PM"),
    ];
    EventStore::new(events).unwrap_or_default()
}

/// Dashboard milestones matching [`sample_events`].
pub fn sample_milestones() -> Vec<Milestone> {
    vec![
        Milestone::new("SAT Full Mock Test", "May 6, 2025", 2),
        Milestone::new("Essay Submission Due", "May 11, 2025", 7),
        Milestone::new("Grammar Quiz", "May 4, 2025", 0),
        Milestone::new("Math Practice Section", "May 15, 2025", 11),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_store_is_complete() {
        let store = sample_events();
        assert_eq!(store.len(), 7);
        assert!(store.iter().all(|e| e.date.to_string().starts_with("2025-05")));
    }

    #[test]
    fn sample_milestones_cover_every_tier() {
        let classified = crate::milestone::classify_milestones(&sample_milestones());
        let tiers: std::collections::HashSet<_> = classified.iter().map(|c| c.tier).collect();
        assert_eq!(tiers.len(), 3);
    }
}

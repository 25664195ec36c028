//! Calendar event records and the read-only event store.

use std::collections::HashSet;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::date;
use crate::error::{Result, ValidationError};

/// Identifier of an event; producers use either integers or strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventId {
    Number(i64),
    Text(String),
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for EventId {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for EventId {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// Category of a calendar event. Display-only; never changes scheduling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    Test,
    Assignment,
    Webinar,
    Practice,
    Study,
}

impl EventType {
    /// Legend order.
    pub const ALL: [EventType; 5] = [
        Self::Test,
        Self::Assignment,
        Self::Webinar,
        Self::Practice,
        Self::Study,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Test => "Test",
            Self::Assignment => "Assignment",
            Self::Webinar => "Webinar",
            Self::Practice => "Practice",
            Self::Study => "Study",
        }
    }

    /// Color tokens for this category's badge.
    pub fn badge(&self) -> EventBadge {
        let (background, text, border, dot) = match self {
            Self::Test => ("red-100", "red-800", "red-200", "red-500"),
            Self::Assignment => ("blue-100", "blue-800", "blue-200", "blue-500"),
            Self::Webinar => ("purple-100", "purple-800", "purple-200", "purple-500"),
            Self::Practice => ("green-100", "green-800", "green-200", "green-500"),
            Self::Study => ("yellow-100", "yellow-800", "yellow-200", "yellow-500"),
        };
        EventBadge {
            background,
            text,
            border,
            dot,
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Badge color tokens for an [`EventType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EventBadge {
    pub background: &'static str,
    pub text: &'static str,
    pub border: &'static str,
    /// Legend dot.
    pub dot: &'static str,
}

/// A scheduled item on the calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    #[serde(with = "date::canonical")]
    pub date: NaiveDate,
    pub title: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    /// Free-text time window, e.g. "9:00 AM - 12:30 PM". Not parsed.
    #[serde(default)]
    pub time: String,
}

impl Event {
    pub fn new(
        id: impl Into<EventId>,
        date: NaiveDate,
        title: impl Into<String>,
        event_type: EventType,
        time: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            date,
            title: title.into(),
            event_type,
            time: time.into(),
        }
    }
}

/// Ordered, immutable snapshot of events.
///
/// The calendar core only reads it. Refreshing means building a new store and
/// handing it to the view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    /// Build a store, rejecting duplicate ids.
    pub fn new(events: Vec<Event>) -> Result<Self, ValidationError> {
        let mut seen = HashSet::with_capacity(events.len());
        for event in &events {
            if !seen.insert(&event.id) {
                return Err(ValidationError::DuplicateId(event.id.to_string()));
            }
        }
        Ok(Self { events })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a JSON array of events.
    ///
    /// Malformed dates fail the whole load; nothing is silently dropped.
    pub fn from_json(json: &str) -> Result<Self> {
        let events: Vec<Event> = serde_json::from_str(json)?;
        Ok(Self::new(events)?)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl<'a> IntoIterator for &'a EventStore {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

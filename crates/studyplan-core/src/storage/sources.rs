//! Loading event and milestone snapshots.
//!
//! Each call reads the source afresh; this is the reload boundary for the
//! otherwise immutable event store.

use std::path::Path;

use tracing::{debug, info};

use super::Config;
use crate::calendar::EventStore;
use crate::error::Result;
use crate::milestone::{milestones_from_json, Milestone};
use crate::sample::{sample_events, sample_milestones};

/// Read a JSON array of events from `path`.
pub fn read_event_store(path: &Path) -> Result<EventStore> {
    let content = std::fs::read_to_string(path)?;
    let store = EventStore::from_json(&content)?;
    info!(path = %path.display(), events = store.len(), "loaded event store");
    Ok(store)
}

/// Read a JSON array of milestones from `path`.
pub fn read_milestones(path: &Path) -> Result<Vec<Milestone>> {
    let content = std::fs::read_to_string(path)?;
    let milestones = milestones_from_json(&content)?;
    info!(path = %path.display(), milestones = milestones.len(), "loaded milestones");
    Ok(milestones)
}

/// The configured event store, or the sample schedule when none is set.
pub fn load_event_store(config: &Config) -> Result<EventStore> {
    match &config.data.events_file {
        Some(path) => read_event_store(path),
        None => {
            debug!("no events file configured, using sample events");
            Ok(sample_events())
        }
    }
}

/// The configured milestones, or the sample list when none is set.
pub fn load_milestones(config: &Config) -> Result<Vec<Milestone>> {
    match &config.data.milestones_file {
        Some(path) => read_milestones(path),
        None => {
            debug!("no milestones file configured, using sample milestones");
            Ok(sample_milestones())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_samples() {
        let cfg = Config::default();
        assert_eq!(load_event_store(&cfg).unwrap().len(), 7);
        assert_eq!(load_milestones(&cfg).unwrap().len(), 4);
    }

    #[test]
    fn reads_configured_files() {
        let dir = tempfile::tempdir().unwrap();
        let events = dir.path().join("events.json");
        let milestones = dir.path().join("milestones.json");
        std::fs::write(
            &events,
            r#"[{"id": 1, "date": "2025-05-06", "title": "Mock", "type": "Test", "time": "9:00 AM"}]"#,
        )
        .unwrap();
        std::fs::write(&milestones, "[]").unwrap();

        let mut cfg = Config::default();
        cfg.data.events_file = Some(events);
        cfg.data.milestones_file = Some(milestones);

        assert_eq!(load_event_store(&cfg).unwrap().len(), 1);
        assert!(load_milestones(&cfg).unwrap().is_empty());
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut cfg = Config::default();
        cfg.data.events_file = Some(dir.path().join("absent.json"));
        assert!(load_event_store(&cfg).is_err());
    }
}

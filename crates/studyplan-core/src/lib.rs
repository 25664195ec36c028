//! # StudyPlan Core Library
//!
//! This library provides the scheduling logic behind the StudyPlan portal's
//! calendar page and dashboard deadlines. Everything here is synchronous and
//! in-process; the CLI and any GUI are thin layers over the same types.
//!
//! ## Architecture
//!
//! - **Calendar**: month grid generation, the date → events index, the
//!   upcoming events query, and the navigation/selection state machine
//! - **Milestones**: urgency classification for dashboard deadlines
//! - **Storage**: TOML configuration and JSON event/milestone sources
//!
//! ## Key Components
//!
//! - [`CalendarView`]: view state plus a single-pass render against one "today"
//! - [`MonthGrid`]: leading blanks and day cells for a month
//! - [`DateEventIndex`]: per-day event lookup with "+N more" remainders
//! - [`classify`]: days remaining → urgency tier and label
//! - [`Config`]: application configuration management

pub mod calendar;
pub mod error;
pub mod milestone;
pub mod sample;
pub mod storage;

pub use calendar::{
    month_grid, upcoming_events, CalendarRender, CalendarView, CalendarViewState, DateEventIndex,
    DayCell, Event, EventId, EventStore, EventType, MonthGrid, NavigationEvent, RenderedCell,
    ViewOptions, WeekStart, YearMonth,
};
pub use error::{ConfigError, CoreError, Result, ValidationError};
pub use milestone::{classify, classify_milestones, ClassifiedMilestone, Milestone, UrgencyTier};
pub use storage::Config;

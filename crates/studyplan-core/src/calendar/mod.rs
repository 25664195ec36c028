//! Calendar scheduling view.
//!
//! This module provides:
//! - Month grid generation with leading blanks
//! - A date → events index for per-cell lookup
//! - The upcoming events query for the sidebar
//! - The navigation/selection state machine and a single-pass render

pub mod date;
mod event;
mod index;
mod month;
mod upcoming;
mod view;

pub use date::{date_key, display_label, parse_date};
pub use event::{Event, EventBadge, EventId, EventStore, EventType};
pub use index::{CellEvents, DateEventIndex, DEFAULT_CELL_EVENT_LIMIT};
pub use month::{days_in_month, is_leap_year, month_grid, DayCell, MonthGrid, WeekStart, YearMonth};
pub use upcoming::{upcoming_events, DEFAULT_UPCOMING_LIMIT};
pub use view::{
    CalendarRender, CalendarView, CalendarViewState, NavigationEvent, RenderedCell, SelectedDay,
    ViewOptions,
};

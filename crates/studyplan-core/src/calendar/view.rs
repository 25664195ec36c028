//! Calendar view: navigation/selection state machine and the render pass.
//!
//! ## State Transitions
//!
//! ```text
//! { month, None }    --select(d)-->   { month, Some(d) }
//! { month, Some(d) } --select(d)-->   { month, None }
//! { month, Some(d) } --select(e)-->   { month, Some(e) }
//! { month, _ }       --prev/next-->   { month -/+ 1, None }
//! ```
//!
//! There is no terminal state. Every command returns a [`NavigationEvent`]
//! describing what changed, in the same way the rest of the core reports
//! state changes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::date::display_label;
use super::event::{Event, EventStore};
use super::index::{DateEventIndex, DEFAULT_CELL_EVENT_LIMIT};
use super::month::{DayCell, MonthGrid, WeekStart, YearMonth};
use super::upcoming::{upcoming_events, DEFAULT_UPCOMING_LIMIT};
use crate::error::ValidationError;

/// State change produced by a calendar command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum NavigationEvent {
    MonthChanged {
        from: YearMonth,
        to: YearMonth,
        /// Selection dropped by the move, if there was one.
        cleared_selection: Option<NaiveDate>,
    },
    DateSelected {
        date: NaiveDate,
        previous: Option<NaiveDate>,
    },
    /// The selected date was clicked again.
    SelectionCleared { date: NaiveDate },
}

/// Displayed month plus at most one selected date.
///
/// Owned by one view; discarded with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarViewState {
    displayed_month: YearMonth,
    selected_date: Option<NaiveDate>,
}

impl CalendarViewState {
    /// Start on the month containing `today` with nothing selected.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            displayed_month: YearMonth::from_date(today),
            selected_date: None,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn displayed_month(&self) -> YearMonth {
        self.displayed_month
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    pub fn is_selected(&self, date: NaiveDate) -> bool {
        self.selected_date == Some(date)
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn go_to_previous_month(&mut self) -> Result<NavigationEvent, ValidationError> {
        let target = self.displayed_month.pred()?;
        Ok(self.move_to(target))
    }

    pub fn go_to_next_month(&mut self) -> Result<NavigationEvent, ValidationError> {
        let target = self.displayed_month.succ()?;
        Ok(self.move_to(target))
    }

    /// Jump straight to `month`. Returns `None` if it is already displayed,
    /// in which case the selection is kept.
    pub fn go_to_month(&mut self, month: YearMonth) -> Option<NavigationEvent> {
        if month == self.displayed_month {
            return None;
        }
        Some(self.move_to(month))
    }

    /// Jump to the month containing `today`.
    pub fn go_to_today(&mut self, today: NaiveDate) -> Option<NavigationEvent> {
        self.go_to_month(YearMonth::from_date(today))
    }

    /// Toggle `date`: selecting the selected date clears it, anything else
    /// replaces the selection.
    ///
    /// Dates outside the displayed month are rejected and leave the state
    /// untouched.
    pub fn select_date(&mut self, date: NaiveDate) -> Result<NavigationEvent, ValidationError> {
        if !self.displayed_month.contains(date) {
            return Err(ValidationError::DateOutsideDisplayedMonth {
                date,
                displayed: self.displayed_month.to_string(),
            });
        }

        let event = if self.selected_date == Some(date) {
            self.selected_date = None;
            NavigationEvent::SelectionCleared { date }
        } else {
            let previous = self.selected_date.replace(date);
            NavigationEvent::DateSelected { date, previous }
        };
        debug!(?event, "calendar selection changed");
        Ok(event)
    }

    fn move_to(&mut self, target: YearMonth) -> NavigationEvent {
        let from = self.displayed_month;
        self.displayed_month = target;
        let cleared_selection = self.selected_date.take();
        debug!(%from, to = %target, ?cleared_selection, "displayed month changed");
        NavigationEvent::MonthChanged {
            from,
            to: target,
            cleared_selection,
        }
    }
}

/// Layout knobs for a [`CalendarView`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewOptions {
    pub week_start: WeekStart,
    pub upcoming_limit: usize,
    pub cell_event_limit: usize,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            week_start: WeekStart::Sunday,
            upcoming_limit: DEFAULT_UPCOMING_LIMIT,
            cell_event_limit: DEFAULT_CELL_EVENT_LIMIT,
        }
    }
}

/// A rendered grid cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RenderedCell<'a> {
    Empty,
    Day {
        day: u32,
        #[serde(with = "super::date::canonical")]
        date: NaiveDate,
        is_today: bool,
        is_selected: bool,
        events: Vec<&'a Event>,
        /// Events not listed in `events`.
        remainder: usize,
    },
}

/// Detail panel for the selected date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectedDay<'a> {
    #[serde(with = "super::date::canonical")]
    pub date: NaiveDate,
    /// e.g. "Tue, May 6"
    pub label: String,
    pub events: Vec<&'a Event>,
}

/// Everything one frame of the calendar page needs, computed against a
/// single `today`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarRender<'a> {
    #[serde(with = "super::date::canonical")]
    pub today: NaiveDate,
    pub month: YearMonth,
    pub title: String,
    pub weekday_labels: [&'static str; 7],
    pub cells: Vec<RenderedCell<'a>>,
    pub selected: Option<SelectedDay<'a>>,
    pub upcoming: Vec<&'a Event>,
}

impl RenderedCell<'_> {
    pub fn day(&self) -> Option<u32> {
        match self {
            Self::Empty => None,
            Self::Day { day, .. } => Some(*day),
        }
    }
}

/// The calendar page: an event store snapshot plus its view state.
#[derive(Debug, Clone)]
pub struct CalendarView {
    store: EventStore,
    state: CalendarViewState,
    options: ViewOptions,
}

impl CalendarView {
    pub fn new(store: EventStore, today: NaiveDate, options: ViewOptions) -> Self {
        Self {
            store,
            state: CalendarViewState::new(today),
            options,
        }
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    pub fn state(&self) -> &CalendarViewState {
        &self.state
    }

    pub fn options(&self) -> ViewOptions {
        self.options
    }

    /// Swap in a refreshed event store. Navigation and selection are kept.
    pub fn replace_store(&mut self, store: EventStore) {
        debug!(events = store.len(), "calendar event store replaced");
        self.store = store;
    }

    pub fn go_to_previous_month(&mut self) -> Result<NavigationEvent, ValidationError> {
        self.state.go_to_previous_month()
    }

    pub fn go_to_next_month(&mut self) -> Result<NavigationEvent, ValidationError> {
        self.state.go_to_next_month()
    }

    pub fn go_to_month(&mut self, month: YearMonth) -> Option<NavigationEvent> {
        self.state.go_to_month(month)
    }

    pub fn go_to_today(&mut self, today: NaiveDate) -> Option<NavigationEvent> {
        self.state.go_to_today(today)
    }

    pub fn select_date(&mut self, date: NaiveDate) -> Result<NavigationEvent, ValidationError> {
        self.state.select_date(date)
    }

    /// All events on `date`, in store order.
    pub fn events_on(&self, date: NaiveDate) -> Vec<&Event> {
        DateEventIndex::build(&self.store).events_on(date).to_vec()
    }

    /// Render the current month against `today`.
    ///
    /// `today` is read once by the caller so the today highlight and the
    /// upcoming list always agree.
    pub fn render(&self, today: NaiveDate) -> CalendarRender<'_> {
        let month = self.state.displayed_month();
        let grid = MonthGrid::generate(month, self.options.week_start);
        let index = DateEventIndex::build(&self.store);

        let cells = grid
            .cells()
            .iter()
            .map(|cell| match *cell {
                DayCell::Empty => RenderedCell::Empty,
                DayCell::Day(day) => match month.date(day) {
                    Some(date) => {
                        let cell_events = index.cell_events(date, self.options.cell_event_limit);
                        RenderedCell::Day {
                            day,
                            date,
                            is_today: date == today,
                            is_selected: self.state.is_selected(date),
                            events: cell_events.shown,
                            remainder: cell_events.remainder,
                        }
                    }
                    None => RenderedCell::Empty,
                },
            })
            .collect();

        let selected = self.state.selected_date().map(|date| SelectedDay {
            date,
            label: display_label(date),
            events: index.events_on(date).to_vec(),
        });

        CalendarRender {
            today,
            month,
            title: month.title(),
            weekday_labels: self.options.week_start.labels(),
            cells,
            selected,
            upcoming: upcoming_events(&self.store, today, self.options.upcoming_limit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::date::parse_date;
    use crate::calendar::event::EventType;

    fn d(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    fn may_store() -> EventStore {
        EventStore::new(vec![
            Event::new(1i64, d("2025-05-06"), "Full SAT Mock Test", EventType::Test, "9:00 AM - 12:30 PM"),
            Event::new(2i64, d("2025-05-09"), "Essay Submission Due", EventType::Assignment, "11:59 PM"),
        ])
        .unwrap()
    }

    #[test]
    fn starts_on_todays_month_with_nothing_selected() {
        let state = CalendarViewState::new(d("2025-05-17"));
        assert_eq!(state.displayed_month(), YearMonth::new(2025, 4).unwrap());
        assert_eq!(state.selected_date(), None);
    }

    #[test]
    fn select_twice_toggles_off() {
        let mut state = CalendarViewState::new(d("2025-05-01"));
        let first = state.select_date(d("2025-05-06")).unwrap();
        assert_eq!(
            first,
            NavigationEvent::DateSelected {
                date: d("2025-05-06"),
                previous: None
            }
        );
        let second = state.select_date(d("2025-05-06")).unwrap();
        assert_eq!(second, NavigationEvent::SelectionCleared { date: d("2025-05-06") });
        assert_eq!(state.selected_date(), None);
    }

    #[test]
    fn selecting_another_date_replaces() {
        let mut state = CalendarViewState::new(d("2025-05-01"));
        state.select_date(d("2025-05-06")).unwrap();
        let event = state.select_date(d("2025-05-09")).unwrap();
        assert_eq!(
            event,
            NavigationEvent::DateSelected {
                date: d("2025-05-09"),
                previous: Some(d("2025-05-06"))
            }
        );
        assert_eq!(state.selected_date(), Some(d("2025-05-09")));
    }

    #[test]
    fn selecting_outside_displayed_month_is_rejected() {
        let mut state = CalendarViewState::new(d("2025-05-01"));
        state.select_date(d("2025-05-06")).unwrap();
        let err = state.select_date(d("2025-06-06")).unwrap_err();
        assert!(matches!(err, ValidationError::DateOutsideDisplayedMonth { .. }));
        assert_eq!(state.selected_date(), Some(d("2025-05-06")));
    }

    #[test]
    fn navigation_clears_selection() {
        let mut state = CalendarViewState::new(d("2025-05-01"));
        state.select_date(d("2025-05-06")).unwrap();
        let event = state.go_to_next_month().unwrap();
        assert_eq!(
            event,
            NavigationEvent::MonthChanged {
                from: YearMonth::new(2025, 4).unwrap(),
                to: YearMonth::new(2025, 5).unwrap(),
                cleared_selection: Some(d("2025-05-06")),
            }
        );
        assert_eq!(state.selected_date(), None);

        state.select_date(d("2025-06-02")).unwrap();
        state.go_to_previous_month().unwrap();
        assert_eq!(state.displayed_month(), YearMonth::new(2025, 4).unwrap());
        assert_eq!(state.selected_date(), None);
    }

    #[test]
    fn navigation_rolls_over_year_boundaries() {
        let mut state = CalendarViewState::new(d("2025-01-15"));
        state.go_to_previous_month().unwrap();
        assert_eq!(state.displayed_month(), YearMonth::new(2024, 11).unwrap());
        state.go_to_next_month().unwrap();
        state.go_to_next_month().unwrap();
        assert_eq!(state.displayed_month(), YearMonth::new(2025, 1).unwrap());
    }

    #[test]
    fn navigation_past_calendar_range_fails_without_moving() {
        let mut last = CalendarViewState::new(NaiveDate::MAX);
        last.select_date(NaiveDate::MAX).unwrap();
        let before = last.clone();
        assert!(matches!(
            last.go_to_next_month(),
            Err(ValidationError::InvalidValue { ref field, .. }) if field == "year"
        ));
        assert_eq!(last, before);
        assert_eq!(last.selected_date(), Some(NaiveDate::MAX));

        let mut first = CalendarViewState::new(NaiveDate::MIN);
        first.select_date(NaiveDate::MIN).unwrap();
        let before = first.clone();
        assert!(first.go_to_previous_month().is_err());
        assert_eq!(first, before);
    }

    #[test]
    fn renders_at_calendar_range_edges() {
        for today in [NaiveDate::MIN, NaiveDate::MAX] {
            let view = CalendarView::new(EventStore::empty(), today, ViewOptions::default());
            let frame = view.render(today);
            let days = frame.cells.iter().filter(|c| c.day().is_some()).count();
            assert_eq!(days as u32, YearMonth::from_date(today).days_in_month());
            assert!(frame.upcoming.is_empty());
        }
    }

    #[test]
    fn go_to_same_month_keeps_selection() {
        let mut state = CalendarViewState::new(d("2025-05-01"));
        state.select_date(d("2025-05-06")).unwrap();
        assert!(state.go_to_month(YearMonth::new(2025, 4).unwrap()).is_none());
        assert_eq!(state.selected_date(), Some(d("2025-05-06")));

        assert!(state.go_to_month(YearMonth::new(2030, 0).unwrap()).is_some());
        assert_eq!(state.selected_date(), None);
        assert!(state.go_to_today(d("2025-05-01")).is_some());
        assert_eq!(state.displayed_month(), YearMonth::new(2025, 4).unwrap());
    }

    #[test]
    fn render_marks_today_selection_and_events() {
        let mut view = CalendarView::new(may_store(), d("2025-05-01"), ViewOptions::default());
        view.select_date(d("2025-05-06")).unwrap();
        let frame = view.render(d("2025-05-01"));

        assert_eq!(frame.title, "May 2025");
        assert_eq!(frame.weekday_labels[0], "Sun");
        assert_eq!(frame.cells.len(), 4 + 31);

        let today_cell = &frame.cells[4];
        assert!(matches!(today_cell, RenderedCell::Day { day: 1, is_today: true, .. }));

        match &frame.cells[4 + 5] {
            RenderedCell::Day {
                day,
                is_selected,
                events,
                remainder,
                ..
            } => {
                assert_eq!(*day, 6);
                assert!(*is_selected);
                assert_eq!(events.len(), 1);
                assert_eq!(*remainder, 0);
            }
            RenderedCell::Empty => panic!("expected a day cell"),
        }

        let selected = frame.selected.expect("selected day panel");
        assert_eq!(selected.label, "Tue, May 6");
        assert_eq!(selected.events.len(), 1);
        assert_eq!(selected.events[0].title, "Full SAT Mock Test");

        assert_eq!(frame.upcoming.len(), 2);
    }

    #[test]
    fn render_serializes_cells_with_kind_tag() {
        let view = CalendarView::new(may_store(), d("2025-05-01"), ViewOptions::default());
        let frame = view.render(d("2025-05-01"));
        let json = serde_json::to_value(&frame).unwrap();
        assert_eq!(json["month"]["year"], 2025);
        assert_eq!(json["cells"][0]["kind"], "empty");
        assert_eq!(json["cells"][9]["kind"], "day");
        assert_eq!(json["cells"][9]["date"], "2025-05-06");
        assert_eq!(json["today"], "2025-05-01");
    }

    #[test]
    fn replacing_store_keeps_state() {
        let mut view = CalendarView::new(may_store(), d("2025-05-01"), ViewOptions::default());
        view.select_date(d("2025-05-06")).unwrap();
        view.replace_store(EventStore::empty());
        assert_eq!(view.state().selected_date(), Some(d("2025-05-06")));
        let frame = view.render(d("2025-05-01"));
        assert!(frame.upcoming.is_empty());
        assert!(frame.selected.unwrap().events.is_empty());
    }
}

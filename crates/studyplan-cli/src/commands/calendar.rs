use std::path::PathBuf;

use clap::Subcommand;
use studyplan_core::calendar::{display_label, parse_date, upcoming_events, DateEventIndex};
use studyplan_core::storage::{load_event_store, read_event_store};
use studyplan_core::{CalendarRender, CalendarView, Config, Event, EventStore, EventType, RenderedCell, YearMonth};
use tracing::debug;

use super::resolve_today;

#[derive(Subcommand)]
pub enum CalendarAction {
    /// Show a month grid with today, selection and upcoming events
    Show {
        /// Month to show as YYYY-MM (defaults to today's month)
        #[arg(long)]
        month: Option<String>,
        /// Reference date as YYYY-MM-DD (defaults to the local date)
        #[arg(long)]
        today: Option<String>,
        /// Step back this many months before rendering
        #[arg(long, default_value_t = 0)]
        prev: u32,
        /// Step forward this many months before rendering
        #[arg(long, default_value_t = 0)]
        next: u32,
        /// Click a date (YYYY-MM-DD); repeat the same date to toggle it off
        #[arg(long)]
        select: Vec<String>,
        /// JSON file of events (overrides config)
        #[arg(long)]
        events: Option<PathBuf>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List every event on one date
    Day {
        /// Date as YYYY-MM-DD
        date: String,
        /// JSON file of events (overrides config)
        #[arg(long)]
        events: Option<PathBuf>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Next events on or after today
    Upcoming {
        /// Reference date as YYYY-MM-DD (defaults to the local date)
        #[arg(long)]
        today: Option<String>,
        /// Maximum number of events (defaults to config)
        #[arg(long)]
        limit: Option<usize>,
        /// JSON file of events (overrides config)
        #[arg(long)]
        events: Option<PathBuf>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Event type legend
    Legend,
}

fn load_store(events: Option<&PathBuf>, config: &Config) -> Result<EventStore, Box<dyn std::error::Error>> {
    let store = match events {
        Some(path) => {
            debug!(path = %path.display(), "reading events from --events");
            read_event_store(path)?
        }
        None => load_event_store(config)?,
    };
    Ok(store)
}

pub fn run(action: CalendarAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();

    match action {
        CalendarAction::Show {
            month,
            today,
            prev,
            next,
            select,
            events,
            json,
        } => {
            let today = resolve_today(today.as_deref())?;
            let store = load_store(events.as_ref(), &config)?;
            debug!(%today, events = store.len(), "rendering calendar");
            let mut view = CalendarView::new(store, today, config.view_options());

            if let Some(month) = month {
                let month: YearMonth = month.parse()?;
                view.go_to_month(month);
            }
            for _ in 0..prev {
                view.go_to_previous_month()?;
            }
            for _ in 0..next {
                view.go_to_next_month()?;
            }
            for date in &select {
                view.select_date(parse_date(date)?)?;
            }

            let frame = view.render(today);
            if json {
                println!("{}", serde_json::to_string_pretty(&frame)?);
            } else {
                print_frame(&frame);
            }
        }
        CalendarAction::Day { date, events, json } => {
            let date = parse_date(&date)?;
            let store = load_store(events.as_ref(), &config)?;
            let index = DateEventIndex::build(&store);
            let on_day = index.events_on(date);

            if json {
                println!("{}", serde_json::to_string_pretty(&on_day)?);
            } else {
                println!("Events on {}", display_label(date));
                if on_day.is_empty() {
                    println!("  No events");
                }
                for event in on_day {
                    print_event(event);
                }
            }
        }
        CalendarAction::Upcoming {
            today,
            limit,
            events,
            json,
        } => {
            let today = resolve_today(today.as_deref())?;
            let store = load_store(events.as_ref(), &config)?;
            let limit = limit.unwrap_or(config.calendar.upcoming_limit);
            let upcoming = upcoming_events(&store, today, limit);

            if json {
                println!("{}", serde_json::to_string_pretty(&upcoming)?);
            } else {
                print_upcoming(&upcoming);
            }
        }
        CalendarAction::Legend => {
            for ty in EventType::ALL {
                let badge = ty.badge();
                println!("{:<11} {}", ty.as_str(), badge.dot);
            }
        }
    }
    Ok(())
}

/// Cell text, 5 columns wide: `[dd]` today, `<dd>` selected, `*` marks events.
fn cell_text(cell: &RenderedCell<'_>) -> String {
    match cell {
        RenderedCell::Empty => "     ".to_string(),
        RenderedCell::Day {
            day,
            is_today,
            is_selected,
            events,
            ..
        } => {
            let (open, close) = match (*is_today, *is_selected) {
                (_, true) => ('<', '>'),
                (true, false) => ('[', ']'),
                (false, false) => (' ', ' '),
            };
            let marker = if events.is_empty() { ' ' } else { '*' };
            format!("{open}{day:>2}{close}{marker}")
        }
    }
}

fn print_frame(frame: &CalendarRender<'_>) {
    println!("{:^35}", frame.title);
    let header: Vec<String> = frame
        .weekday_labels
        .iter()
        .map(|label| format!(" {label} "))
        .collect();
    println!("{}", header.join(""));
    for week in frame.cells.chunks(7) {
        let line: String = week.iter().map(cell_text).collect();
        println!("{}", line.trim_end());
    }

    let busy: Vec<String> = frame
        .cells
        .iter()
        .filter_map(|cell| match cell {
            RenderedCell::Day {
                day,
                remainder,
                events,
                ..
            } if *remainder > 0 => Some(format!(
                "{day}: {} +{remainder} more",
                events
                    .iter()
                    .map(|e| e.title.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            )),
            _ => None,
        })
        .collect();
    if !busy.is_empty() {
        println!();
        for line in busy {
            println!("{line}");
        }
    }

    if let Some(selected) = &frame.selected {
        println!();
        println!("Events on {}", selected.label);
        if selected.events.is_empty() {
            println!("  No events");
        }
        for event in &selected.events {
            print_event(event);
        }
    }

    println!();
    print_upcoming(&frame.upcoming);
}

fn print_event(event: &Event) {
    println!("  [{}] {} ({})", event.event_type, event.title, event.time);
}

fn print_upcoming(upcoming: &[&Event]) {
    println!("Upcoming Events");
    if upcoming.is_empty() {
        println!("  No upcoming events");
        return;
    }
    for event in upcoming {
        println!(
            "  {:<12} [{}] {} ({})",
            display_label(event.date),
            event.event_type,
            event.title,
            event.time
        );
    }
}

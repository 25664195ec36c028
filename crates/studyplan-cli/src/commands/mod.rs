pub mod calendar;
pub mod config;
pub mod milestones;

use chrono::{Local, NaiveDate};
use studyplan_core::calendar::parse_date;

/// `--today` if given, otherwise the local date, read once per invocation.
pub fn resolve_today(today: Option<&str>) -> Result<NaiveDate, Box<dyn std::error::Error>> {
    match today {
        Some(s) => Ok(parse_date(s)?),
        None => Ok(Local::now().date_naive()),
    }
}

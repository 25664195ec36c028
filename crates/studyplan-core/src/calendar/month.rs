//! Month arithmetic and the month grid generator.
//!
//! Months are zero-indexed (0 = January) at the API boundary, matching how the
//! portal addresses them. A grid is the leading blank cells followed by one
//! cell per day; there is no trailing padding.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// First column of the rendered week.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

const LABELS_FROM_SUNDAY: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

impl WeekStart {
    /// Column index (0..7) of `weekday` under this week start.
    pub fn column_of(&self, weekday: Weekday) -> u32 {
        match self {
            Self::Sunday => weekday.num_days_from_sunday(),
            Self::Monday => weekday.num_days_from_monday(),
        }
    }

    /// Header labels, first column first.
    pub fn labels(&self) -> [&'static str; 7] {
        let mut labels = LABELS_FROM_SUNDAY;
        if *self == Self::Monday {
            labels.rotate_left(1);
        }
        labels
    }
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Days in a zero-indexed month under proleptic Gregorian rules.
pub fn days_in_month(year: i32, month0: u32) -> Result<u32, ValidationError> {
    let days = match month0 {
        0 | 2 | 4 | 6 | 7 | 9 | 11 => 31,
        3 | 5 | 8 | 10 => 30,
        1 if is_leap_year(year) => 29,
        1 => 28,
        month => return Err(ValidationError::InvalidMonth { month }),
    };
    Ok(days)
}

/// A year + month anchor; the day of month is irrelevant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct YearMonth {
    year: i32,
    /// Zero-indexed, 0..=11.
    month0: u32,
}

impl YearMonth {
    /// Build an anchor, rejecting month indices past 11 and years `chrono`
    /// cannot represent.
    pub fn new(year: i32, month0: u32) -> Result<Self, ValidationError> {
        if month0 > 11 {
            return Err(ValidationError::InvalidMonth { month: month0 });
        }
        if NaiveDate::from_ymd_opt(year, month0 + 1, 1).is_none() {
            return Err(ValidationError::invalid(
                "year",
                format!("{year} is outside the representable calendar range"),
            ));
        }
        Ok(Self { year, month0 })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month0: date.month0(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Zero-indexed month.
    pub fn month0(&self) -> u32 {
        self.month0
    }

    /// One-indexed month.
    pub fn month(&self) -> u32 {
        self.month0 + 1
    }

    pub fn first_day(&self) -> NaiveDate {
        // `new`/`from_date` guarantee the first of the month exists.
        NaiveDate::from_ymd_opt(self.year, self.month(), 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year, self.month0).unwrap_or(31)
    }

    /// The date for `day` in this month, if it exists.
    pub fn date(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month(), day)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month0() == self.month0
    }

    /// The previous month; January rolls back to December of the prior year.
    pub fn pred(&self) -> Result<Self, ValidationError> {
        if self.month0 == 0 {
            Self::new(self.year - 1, 11)
        } else {
            Self::new(self.year, self.month0 - 1)
        }
    }

    /// The next month; December rolls over to January of the next year.
    pub fn succ(&self) -> Result<Self, ValidationError> {
        if self.month0 == 11 {
            Self::new(self.year + 1, 0)
        } else {
            Self::new(self.year, self.month0 + 1)
        }
    }

    /// Heading text, e.g. `May 2025`.
    pub fn title(&self) -> String {
        self.first_day().format("%B %Y").to_string()
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month())
    }
}

/// Parses `YYYY-MM` (one-indexed month).
impl FromStr for YearMonth {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::invalid("month", format!("'{s}' is not in YYYY-MM form"));
        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        if month == 0 {
            return Err(invalid());
        }
        Self::new(year, month - 1)
    }
}

/// One cell of a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "day", rename_all = "lowercase")]
pub enum DayCell {
    /// Padding before the 1st.
    Empty,
    Day(u32),
}

impl DayCell {
    pub fn day(&self) -> Option<u32> {
        match self {
            Self::Empty => None,
            Self::Day(n) => Some(*n),
        }
    }
}

/// The cells of one month laid out for a 7-column grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    month: YearMonth,
    week_start: WeekStart,
    leading_blanks: u32,
    cells: Vec<DayCell>,
}

impl MonthGrid {
    pub fn generate(month: YearMonth, week_start: WeekStart) -> Self {
        let leading_blanks = week_start.column_of(month.first_day().weekday());
        let days = month.days_in_month();

        let mut cells = Vec::with_capacity((leading_blanks + days) as usize);
        cells.extend((0..leading_blanks).map(|_| DayCell::Empty));
        cells.extend((1..=days).map(DayCell::Day));

        Self {
            month,
            week_start,
            leading_blanks,
            cells,
        }
    }

    pub fn month(&self) -> YearMonth {
        self.month
    }

    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }

    pub fn leading_blanks(&self) -> u32 {
        self.leading_blanks
    }

    pub fn days_in_month(&self) -> u32 {
        self.month.days_in_month()
    }

    pub fn cells(&self) -> &[DayCell] {
        &self.cells
    }

    /// Cells split into weeks; the final week may be short.
    pub fn weeks(&self) -> std::slice::Chunks<'_, DayCell> {
        self.cells.chunks(7)
    }
}

/// Grid for a zero-indexed `(year, month)`.
pub fn month_grid(
    year: i32,
    month0: u32,
    week_start: WeekStart,
) -> Result<MonthGrid, ValidationError> {
    Ok(MonthGrid::generate(YearMonth::new(year, month0)?, week_start))
}

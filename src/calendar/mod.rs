//! Month grid projection.
//!
//! [`project`] turns a month cursor and the current meeting list into the
//! cells of one calendar page. It reads nothing but its arguments, so the
//! same inputs always give the same grid.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};

use crate::models::Meeting;

pub mod state;

pub use state::{CalendarState, DraftField, MeetingDraft, ModalState};

pub const WEEKDAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const ISO_DATE: &str = "%Y-%m-%d";

pub fn iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE).to_string()
}

/// The (year, month) page the calendar shows. `month` is 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthCursor {
    year: i32,
    month: u32,
}

impl MonthCursor {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (month < 12).then_some(Self { year, month })
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month0(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Moves by `delta` months, carrying into the year.
    pub fn shift(self, delta: i32) -> Self {
        let total = i64::from(self.year) * 12 + i64::from(self.month) + i64::from(delta);
        let year = total.div_euclid(12).clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
        Self {
            year,
            month: total.rem_euclid(12) as u32,
        }
    }

    /// `None` once the cursor has been moved past what chrono can represent.
    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
    }

    /// The day before the first of the following month.
    pub fn last_day(&self) -> Option<NaiveDate> {
        self.shift(1).first_day()?.pred_opt()
    }
}

/// One square of the grid. Padding cells carry no day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    pub day: Option<u32>,
    pub iso_date: Option<String>,
    pub has_meeting: bool,
    pub is_today: bool,
}

impl DayCell {
    fn padding() -> Self {
        Self {
            day: None,
            iso_date: None,
            has_meeting: false,
            is_today: false,
        }
    }

    pub fn is_padding(&self) -> bool {
        self.day.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarGrid {
    pub month_label: String,
    pub weekday_headers: [&'static str; 7],
    pub cells: Vec<DayCell>,
}

impl CalendarGrid {
    /// Cells grouped into week rows; the last row may be short.
    pub fn weeks(&self) -> std::slice::Chunks<'_, DayCell> {
        self.cells.chunks(7)
    }

    pub fn cell_for_day(&self, day: u32) -> Option<&DayCell> {
        self.cells.iter().find(|cell| cell.day == Some(day))
    }
}

/// Builds the page for `cursor`.
///
/// Leading padding puts day 1 under its weekday (Sunday first); there is no
/// trailing padding. A day is marked when some meeting's `date` text equals
/// the day's `YYYY-MM-DD` form.
pub fn project(cursor: MonthCursor, meetings: &[Meeting], today: NaiveDate) -> CalendarGrid {
    let (Some(first), Some(last)) = (cursor.first_day(), cursor.last_day()) else {
        return CalendarGrid {
            month_label: format!("{}-{:02}", cursor.year, cursor.month + 1),
            weekday_headers: WEEKDAY_HEADERS,
            cells: Vec::new(),
        };
    };

    let meeting_dates: HashSet<&str> = meetings.iter().map(|m| m.date.as_str()).collect();
    let today_iso = iso_date(today);

    let lead = first.weekday().num_days_from_sunday() as usize;
    let mut cells = Vec::with_capacity(lead + last.day() as usize);
    cells.extend(std::iter::repeat_with(DayCell::padding).take(lead));

    for date in first.iter_days().take_while(|d| *d <= last) {
        let iso = iso_date(date);
        cells.push(DayCell {
            day: Some(date.day()),
            has_meeting: meeting_dates.contains(iso.as_str()),
            is_today: iso == today_iso,
            iso_date: Some(iso),
        });
    }

    CalendarGrid {
        month_label: first.format("%B %Y").to_string(),
        weekday_headers: WEEKDAY_HEADERS,
        cells,
    }
}

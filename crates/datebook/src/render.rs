//! Text rendering of month grids and per-day event listings.
//!
//! The month view is laid out as:
//!
//! ```text
//!
//!      March 2024
//! Su Mo Tu We Th Fr Sa
//!                 1  2
//!  3  4  5  6  7  8  9
//! ...
//! 31
//!
//! Events on 15/03/2024:
//!   - Team meeting
//! ```
//!
//! The first header line is five spaces. Each day occupies a right-aligned
//! two-character field plus a trailing space, and rows stop after the last day
//! (no padding cells after it).

use crate::date::{self, CalendarDate, WEEKDAY_LABELS};
use crate::error::Result;
use crate::store::EventStore;

/// Indentation used before the month/year title.
const HEADER_INDENT: &str = "     ";

/// Width of one grid cell, including its trailing separator.
const CELL: &str = "   ";

/// The 7-column weekly layout of one month, Sunday first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub month: u32,
    pub year: i32,
    /// Column of day 1 (0 = Sunday).
    pub first_weekday: u32,
    /// Number of days in the month.
    pub days: u32,
    /// One entry per week row; `None` marks cells outside the month.
    pub weeks: Vec<[Option<u32>; 7]>,
}

impl MonthGrid {
    /// Lay out `month` of `year` so day 1 falls in its real weekday column.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidArgument` if `month` is outside 1..=12.
    pub fn new(month: u32, year: i32) -> Result<Self> {
        let days = date::days_in_month(month, year)?;
        let first_weekday = date::day_of_week(1, month, year)?;

        let rows = (first_weekday + days).div_ceil(7) as usize;
        let mut weeks = vec![[None; 7]; rows];
        for day in 1..=days {
            let pos = (first_weekday + day - 1) as usize;
            weeks[pos / 7][pos % 7] = Some(day);
        }

        Ok(Self {
            month,
            year,
            first_weekday,
            days,
            weeks,
        })
    }

    /// Row and column of `day`, or `None` if the month has no such day.
    pub fn position_of(&self, day: u32) -> Option<(usize, usize)> {
        if !(1..=self.days).contains(&day) {
            return None;
        }
        let pos = (self.first_weekday + day - 1) as usize;
        Some((pos / 7, pos % 7))
    }

    /// Render the grid rows (without header) as text.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for week in &self.weeks {
            // Cells after the last day of the month are not printed.
            let end = week.iter().rposition(Option::is_some).map_or(0, |i| i + 1);
            for cell in &week[..end] {
                match cell {
                    Some(day) => out.push_str(&format!("{:>2} ", day)),
                    None => out.push_str(CELL),
                }
            }
            out.push('\n');
        }
        out
    }
}

/// Render the calendar view of `month` of `year` with the store's events for
/// that month listed below the grid, in date then insertion order.
pub fn render_month(store: &EventStore, month: u32, year: i32) -> Result<String> {
    let grid = MonthGrid::new(month, year)?;
    let name = date::month_name(month)?;
    tracing::trace!(month, year, "rendering month");

    let mut out = String::new();
    out.push_str(HEADER_INDENT);
    out.push('\n');
    out.push_str(&format!("{}{} {}\n", HEADER_INDENT, name, year));
    out.push_str(&WEEKDAY_LABELS.join(" "));
    out.push('\n');
    out.push_str(&grid.to_text());

    for (date, events) in store.events_in_month(month, year)? {
        out.push('\n');
        out.push_str(&format!("Events on {}:\n", date));
        for event in events {
            out.push_str(&format!("  - {}\n", event));
        }
    }

    Ok(out)
}

/// Render the events stored under one date, one description per line.
pub fn render_day(store: &EventStore, date: &CalendarDate) -> String {
    match store.view_events(date) {
        Some(events) => {
            let mut out = format!("Events on {}:\n", date);
            for event in events {
                out.push_str(&event.description);
                out.push('\n');
            }
            out
        }
        None => format!("No events on {}.\n", date),
    }
}

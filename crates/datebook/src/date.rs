//! Proleptic Gregorian calendar arithmetic and the [`CalendarDate`] value type.
//!
//! All functions here are pure. Month and day arguments are checked against the
//! real calendar and rejected with [`CalendarError::InvalidArgument`] instead of
//! producing a nonsensical result.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, Result};

/// Month lengths for a common (non-leap) year, January first.
const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Per-month offsets for the closed-form weekday computation.
const MONTH_OFFSETS: [i64; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];

/// English month names, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Two-letter weekday labels, Sunday first (index matches [`day_of_week`]).
pub const WEEKDAY_LABELS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Returns true for Gregorian leap years.
///
/// A year is a leap year when it is divisible by 4, except centuries, which
/// must also be divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in `month` (1-12) of `year`, accounting for leap Februaries.
///
/// # Errors
/// Returns `CalendarError::InvalidArgument` if `month` is outside 1..=12.
pub fn days_in_month(month: u32, year: i32) -> Result<u32> {
    check_month(month)?;
    if month == 2 && is_leap_year(year) {
        return Ok(29);
    }
    Ok(DAYS_IN_MONTH[(month - 1) as usize])
}

/// Weekday of a date as an index in 0..=6, where 0 is Sunday.
///
/// January and February are treated as the last months of the previous year
/// so the leap day falls at the end of the cycle.
///
/// # Errors
/// Returns `CalendarError::InvalidArgument` if the month or day does not exist.
pub fn day_of_week(day: u32, month: u32, year: i32) -> Result<u32> {
    check_day(day, month, year)?;
    Ok(weekday_index(day, month, year))
}

/// English name of `month` (1-12).
pub fn month_name(month: u32) -> Result<&'static str> {
    check_month(month)?;
    Ok(MONTH_NAMES[(month - 1) as usize])
}

/// Closed-form weekday for an already validated date.
///
/// Floor division and a Euclidean remainder keep negative years on the
/// proleptic calendar (the formula repeats every 400 years).
fn weekday_index(day: u32, month: u32, year: i32) -> u32 {
    let y = if month < 3 {
        i64::from(year) - 1
    } else {
        i64::from(year)
    };
    let raw = y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        + MONTH_OFFSETS[(month - 1) as usize]
        + i64::from(day);
    raw.rem_euclid(7) as u32
}

fn check_month(month: u32) -> Result<()> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(CalendarError::InvalidArgument(format!(
            "month {} is outside 1..=12",
            month
        )))
    }
}

fn check_day(day: u32, month: u32, year: i32) -> Result<()> {
    let last = days_in_month(month, year)?;
    if (1..=last).contains(&day) {
        Ok(())
    } else {
        Err(CalendarError::InvalidArgument(format!(
            "day {} is outside 1..={} for {} {}",
            day,
            last,
            MONTH_NAMES[(month - 1) as usize],
            year
        )))
    }
}

/// An immutable day/month/year triple on the proleptic Gregorian calendar.
///
/// Field order makes the derived ordering compare by (year, month, day).
/// Values can only be obtained through checked constructors, so every
/// `CalendarDate` names a day that exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct CalendarDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CalendarDate {
    /// Build a date, rejecting months outside 1..=12 and days past the end of
    /// the month.
    pub fn new(day: u32, month: u32, year: i32) -> Result<Self> {
        check_day(day, month, year)?;
        Ok(Self { year, month, day })
    }

    /// Today's date on the local clock.
    pub fn today() -> Self {
        chrono::Local::now().date_naive().into()
    }

    /// First day of the given month.
    pub fn first_of_month(month: u32, year: i32) -> Result<Self> {
        Self::new(1, month, year)
    }

    /// Last day of the given month.
    pub fn last_of_month(month: u32, year: i32) -> Result<Self> {
        let day = days_in_month(month, year)?;
        Ok(Self { year, month, day })
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Weekday index in 0..=6, 0 = Sunday.
    pub fn weekday(&self) -> u32 {
        weekday_index(self.day, self.month, self.year)
    }

    /// True when this date falls in `month` of `year`.
    pub fn is_in_month(&self, month: u32, year: i32) -> bool {
        self.month == month && self.year == year
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/{:04}", self.day, self.month, self.year)
    }
}

impl FromStr for CalendarDate {
    type Err = CalendarError;

    /// Parse `D/M/Y` (e.g. `15/03/2024` or `1/1/2000`).
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || CalendarError::InvalidArgument(format!("'{}' is not a DD/MM/YYYY date", s));

        let mut parts = s.trim().split('/');
        let (Some(day), Some(month), Some(year), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };

        let day: u32 = day.trim().parse().map_err(|_| invalid())?;
        let month: u32 = month.trim().parse().map_err(|_| invalid())?;
        let year: i32 = year.trim().parse().map_err(|_| invalid())?;

        Self::new(day, month, year)
    }
}

impl From<CalendarDate> for String {
    fn from(date: CalendarDate) -> Self {
        date.to_string()
    }
}

impl TryFrom<String> for CalendarDate {
    type Error = CalendarError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

impl TryFrom<CalendarDate> for NaiveDate {
    type Error = CalendarError;

    /// Fails only for years beyond chrono's supported range.
    fn try_from(date: CalendarDate) -> Result<Self> {
        NaiveDate::from_ymd_opt(date.year, date.month, date.day).ok_or_else(|| {
            CalendarError::InvalidArgument(format!("{} is outside the supported year range", date))
        })
    }
}

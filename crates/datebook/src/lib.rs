//! # datebook
//!
//! A personal calendar core: a date-indexed event store plus a month-grid
//! renderer built on proleptic Gregorian arithmetic.
//!
//! ## Quick start
//!
//! ```rust
//! use datebook::{CalendarDate, EventStore};
//!
//! let mut store = EventStore::new();
//! let date = CalendarDate::new(15, 3, 2024).unwrap();
//! store.add_event(date, "Team meeting");
//!
//! let view = store.display_calendar(3, 2024).unwrap();
//! assert!(view.contains("Events on 15/03/2024:\n  - Team meeting\n"));
//! ```
//!
//! ## Modules
//!
//! - [`date`] - `CalendarDate`, leap years, month lengths, day of week
//! - [`event`] - the free-text `Event` record
//! - [`store`] - `EventStore`, the ordered date → events mapping
//! - [`render`] - `MonthGrid` layout and text rendering
//! - [`error`] - Error types

pub mod date;
pub mod error;
pub mod event;
pub mod render;
pub mod store;

pub use date::{day_of_week, days_in_month, is_leap_year, month_name, CalendarDate};
pub use error::CalendarError;
pub use event::Event;
pub use render::MonthGrid;
pub use store::{DayEvents, EventStore};

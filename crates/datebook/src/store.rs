//! Date-indexed, in-memory event storage.
//!
//! Events are kept in a `BTreeMap` keyed by [`CalendarDate`], so dates iterate
//! in calendar order and every month occupies one contiguous key range.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::date::CalendarDate;
use crate::error::Result;
use crate::event::Event;
use crate::render;

/// Result of looking up a single date.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DayEvents {
    /// Whether any event is filed under the date.
    pub found: bool,
    /// The events in the order they were added (empty when `found` is false).
    pub events: Vec<Event>,
}

/// In-memory mapping from dates to the events filed under them.
///
/// A date is present as a key only once at least one event has been added to
/// it; lookups never insert. The store only grows.
#[derive(Debug, Clone, Default)]
pub struct EventStore {
    events: BTreeMap<CalendarDate, Vec<Event>>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `event` to the events of `date`, after any already stored there.
    pub fn add_event(&mut self, date: CalendarDate, event: impl Into<Event>) {
        let event = event.into();
        tracing::debug!(%date, description = %event.description, "adding event");
        self.events.entry(date).or_default().push(event);
    }

    /// Events filed under exactly `date`, in insertion order, or `None` if
    /// nothing was ever added for it.
    pub fn view_events(&self, date: &CalendarDate) -> Option<&[Event]> {
        tracing::trace!(%date, "looking up events");
        self.events.get(date).map(Vec::as_slice)
    }

    /// Owned lookup result carrying an explicit `found` flag.
    pub fn lookup(&self, date: &CalendarDate) -> DayEvents {
        match self.view_events(date) {
            Some(events) => DayEvents {
                found: true,
                events: events.to_vec(),
            },
            None => DayEvents::default(),
        }
    }

    /// Stored dates falling in `month` of `year`, in date order.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidArgument` if `month` is outside 1..=12.
    pub fn events_in_month(
        &self,
        month: u32,
        year: i32,
    ) -> Result<impl Iterator<Item = (&CalendarDate, &[Event])>> {
        let first = CalendarDate::first_of_month(month, year)?;
        let last = CalendarDate::last_of_month(month, year)?;
        Ok(self
            .events
            .range(first..=last)
            .map(|(date, events)| (date, events.as_slice())))
    }

    /// Render the month grid for `month` of `year`, followed by the events
    /// stored in that month.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidArgument` if `month` is outside 1..=12.
    pub fn display_calendar(&self, month: u32, year: i32) -> Result<String> {
        render::render_month(self, month, year)
    }

    /// Render the events of one date as text.
    pub fn render_day(&self, date: &CalendarDate) -> String {
        render::render_day(self, date)
    }

    /// All stored dates with their events, in date order.
    pub fn iter(&self) -> impl Iterator<Item = (&CalendarDate, &[Event])> {
        self.events
            .iter()
            .map(|(date, events)| (date, events.as_slice()))
    }

    /// Total number of events across all dates.
    pub fn len(&self) -> usize {
        self.events.values().map(Vec::len).sum()
    }

    /// Number of distinct dates holding at least one event.
    pub fn date_count(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

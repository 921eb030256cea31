//! A single free-text calendar entry.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A text description filed under one [`CalendarDate`](crate::CalendarDate).
///
/// Events carry no identity of their own; two events with the same text are
/// indistinguishable, and both are kept when added to the same date.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Event {
    pub description: String,
}

impl Event {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

impl From<&str> for Event {
    fn from(description: &str) -> Self {
        Self::new(description)
    }
}

impl From<String> for Event {
    fn from(description: String) -> Self {
        Self::new(description)
    }
}

//! The append-only event log.

use chrono::NaiveDateTime;

use crate::event::{Event, Record};
use crate::task::{self, Task};

/// An ordered, append-only collection of events.
///
/// Insertion order is preserved, including for events sharing a timestamp,
/// so task derivation stays deterministic. Nothing is ever removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    /// Creates an empty log.
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Appends an event at the end of the log.
    pub fn append(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Appends a raw storage record as an event.
    pub fn append_record(&mut self, record: Record) {
        self.append(Event::from(record));
    }

    /// Number of events in the log.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.events.iter()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Returns the events with `start <= timestamp < end`, in log order.
    ///
    /// `None` leaves that side of the interval unbounded. An empty or inverted
    /// interval produces an empty log.
    pub fn find(&self, start: Option<NaiveDateTime>, end: Option<NaiveDateTime>) -> Self {
        self.events
            .iter()
            .filter(|event| start.is_none_or(|s| s <= event.timestamp))
            .filter(|event| end.is_none_or(|e| event.timestamp < e))
            .cloned()
            .collect()
    }

    /// Derives one task per pair of adjacent events.
    pub fn to_tasks(&self) -> Vec<Task> {
        task::to_tasks(&self.events).collect()
    }

    /// Converts the log into storage records, in log order.
    pub fn records(&self) -> impl Iterator<Item = Record> + '_ {
        self.events.iter().map(Event::to_record)
    }
}

impl FromIterator<Event> for EventLog {
    fn from_iter<I: IntoIterator<Item = Event>>(iter: I) -> Self {
        Self {
            events: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a EventLog {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

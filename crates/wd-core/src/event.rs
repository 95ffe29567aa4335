//! Logged activity events.

use chrono::NaiveDateTime;

use crate::task::Task;
use crate::types::Label;

/// A raw `(timestamp, label)` pair as exchanged with a storage adaptor.
pub type Record = (NaiveDateTime, String);

/// The moment the user started doing something.
///
/// Timestamps are naive local wall-clock values. Any timezone conversion
/// happens at the storage boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// When the activity started.
    pub timestamp: NaiveDateTime,
    /// What the user was doing.
    pub label: Label,
}

impl Event {
    pub const fn new(timestamp: NaiveDateTime, label: Label) -> Self {
        Self { timestamp, label }
    }

    /// Builds the task spanning from this event until `next`.
    ///
    /// The duration is the signed difference, so an out-of-order `next`
    /// yields a negative duration.
    pub fn task_until(&self, next: &Self) -> Task {
        Task::new(next.timestamp - self.timestamp, self.label.clone())
    }

    /// Converts the event back into a storage record.
    pub fn to_record(&self) -> Record {
        (self.timestamp, self.label.as_str().to_string())
    }
}

impl From<Record> for Event {
    fn from((timestamp, label): Record) -> Self {
        Self::new(timestamp, Label::from(label))
    }
}

//! Tasks derived from adjacent events.
//!
//! A task is the time spent on one label between an event and its successor.
//! Tasks are never authored directly; they only come out of [`to_tasks`].

use chrono::Duration;

use crate::event::Event;
use crate::types::{Label, ModelError};

/// Time spent on a single activity.
///
/// Two tasks compare equal when their labels match, regardless of duration.
#[derive(Debug, Clone)]
pub struct Task {
    /// Signed time span until the next event.
    pub duration: Duration,
    /// The activity this time was spent on.
    pub label: Label,
}

impl Task {
    pub const fn new(duration: Duration, label: Label) -> Self {
        Self { duration, label }
    }

    /// Combines two tasks for the same label into one with the summed duration.
    pub fn merge(&self, other: &Self) -> Result<Self, ModelError> {
        if self.label != other.label {
            return Err(ModelError::LabelMismatch {
                expected: self.label.to_string(),
                found: other.label.to_string(),
            });
        }
        Ok(Self::new(self.duration + other.duration, self.label.clone()))
    }
}

impl PartialEq for Task {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label
    }
}

impl Eq for Task {}

/// Pairs every event with its successor.
///
/// Yields `events.len() - 1` tasks (none for zero or one events). The label of
/// the last event is dropped because its duration is still open. Events are
/// expected in chronological order; a pair that goes backwards in time yields
/// a negative duration and is reported with a warning.
pub fn to_tasks(events: &[Event]) -> impl Iterator<Item = Task> + '_ {
    events.windows(2).map(|pair| {
        let task = pair[0].task_until(&pair[1]);
        if task.duration < Duration::zero() {
            tracing::warn!(
                label = %task.label,
                from = %pair[0].timestamp,
                to = %pair[1].timestamp,
                "events out of order, task has negative duration"
            );
        }
        task
    })
}

//! Grouping of tasks by label.

use std::collections::HashMap;

use chrono::Duration;

use crate::task::Task;
use crate::types::Label;

/// Total time per label, in the order each label first appeared.
#[derive(Debug, Clone, Default)]
pub struct TaskSummary {
    entries: Vec<Task>,
}

impl TaskSummary {
    /// Iterates over the per-label totals in first-occurrence order.
    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.entries.iter()
    }

    /// Number of distinct labels.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total duration recorded for `label`, if it appeared at all.
    pub fn get(&self, label: &str) -> Option<Duration> {
        self.entries
            .iter()
            .find(|task| task.label.as_str() == label)
            .map(|task| task.duration)
    }

    /// Sum of every label's total.
    pub fn total(&self) -> Duration {
        self.entries
            .iter()
            .fold(Duration::zero(), |acc, task| acc + task.duration)
    }
}

impl IntoIterator for TaskSummary {
    type Item = Task;
    type IntoIter = std::vec::IntoIter<Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a TaskSummary {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Sums task durations per label in a single pass.
///
/// A label's position is fixed the first time it is seen; durations are added
/// in arrival order.
pub fn summarise<I>(tasks: I) -> TaskSummary
where
    I: IntoIterator<Item = Task>,
{
    let mut positions: HashMap<Label, usize> = HashMap::new();
    let mut entries: Vec<Task> = Vec::new();

    for task in tasks {
        let index = *positions.entry(task.label.clone()).or_insert_with(|| {
            entries.push(Task::new(Duration::zero(), task.label.clone()));
            entries.len() - 1
        });
        let entry = &mut entries[index];
        entry.duration = entry.duration + task.duration;
    }

    tracing::trace!(labels = entries.len(), "summarised tasks");
    TaskSummary { entries }
}

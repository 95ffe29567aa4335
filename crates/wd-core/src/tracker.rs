//! The tracker facade: recording events and summarising a day.

use chrono::{Duration, Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

use crate::event::Event;
use crate::event_log::EventLog;
use crate::summary::summarise;
use crate::types::Label;

/// Source of the current local time.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Reads the system's local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock stuck at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Hours spent on one label, as reported to the user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelHours {
    pub label: String,
    /// Fractional hours, not truncated.
    pub hours: f64,
}

/// Owns the event log for a session and exposes the two user-facing operations.
#[derive(Debug)]
pub struct Tracker<C = SystemClock> {
    log: EventLog,
    clock: C,
}

impl Tracker<SystemClock> {
    /// Creates a tracker reading the local system clock.
    pub const fn new(log: EventLog) -> Self {
        Self::with_clock(log, SystemClock)
    }
}

impl<C: Clock> Tracker<C> {
    pub const fn with_clock(log: EventLog, clock: C) -> Self {
        Self { log, clock }
    }

    /// Records that the user started doing `label` right now.
    pub fn log_event(&mut self, label: &str) -> &Event {
        let event = Event::new(self.clock.now(), Label::new(label));
        tracing::debug!(label = %event.label, timestamp = %event.timestamp, "logging event");
        self.log.append(event);
        &self.log.events()[self.log.len() - 1]
    }

    /// The clock's current date.
    pub fn today(&self) -> NaiveDate {
        self.clock.now().date()
    }

    /// Hours spent per label on `day`, in the order labels first appeared.
    ///
    /// Only events inside `[midnight, next midnight)` take part, so the last
    /// activity of the day has no successor and contributes nothing. On the
    /// last representable date the interval is left open at the end.
    pub fn task_summary_by_day(&self, day: NaiveDate) -> Vec<LabelHours> {
        let start = day.and_time(NaiveTime::MIN);
        let end = start.checked_add_signed(Duration::days(1));

        let events = self.log.find(Some(start), end);
        let summary = summarise(events.to_tasks());
        tracing::debug!(%day, events = events.len(), labels = summary.len(), "summarised day");

        summary
            .into_iter()
            .map(|task| LabelHours {
                hours: hours(task.duration),
                label: task.label.into(),
            })
            .collect()
    }

    pub const fn log(&self) -> &EventLog {
        &self.log
    }

    /// Releases the log, e.g. to hand it to storage.
    pub fn into_log(self) -> EventLog {
        self.log
    }
}

#[allow(clippy::cast_precision_loss)]
fn hours(duration: Duration) -> f64 {
    duration.num_milliseconds() as f64 / Duration::hours(1).num_milliseconds() as f64
}

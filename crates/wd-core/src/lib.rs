//! Core domain logic for the whatdo time tracker.
//!
//! This crate contains the fundamental types and logic for:
//! - The event log: an append-only list of timestamped activity labels
//! - Task derivation: turning adjacent events into durations
//! - Aggregation: summing durations per label in first-seen order
//! - The tracker facade and the storage port used to load and save the log

mod event;
mod event_log;
pub mod storage;
mod summary;
mod task;
mod tracker;
mod types;

pub use event::{Event, Record};
pub use event_log::EventLog;
pub use storage::{EventStore, Storage};
pub use summary::{TaskSummary, summarise};
pub use task::{Task, to_tasks};
pub use tracker::{Clock, FixedClock, LabelHours, SystemClock, Tracker};
pub use types::{Label, ModelError};

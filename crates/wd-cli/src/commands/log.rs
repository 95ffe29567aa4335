//! Records what the user is doing now.

use wd_core::{Clock, Tracker};

/// Runs the log command.
pub fn run<C: Clock>(tracker: &mut Tracker<C>, label: &str) {
    let event = tracker.log_event(label);
    tracing::info!(label = %event.label, timestamp = %event.timestamp, "event recorded");
}

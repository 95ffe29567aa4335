//! Today command: where did the day go.
//!
//! Prints one line per label, in the order the labels were first logged:
//!
//! ```text
//! 1h 45m	Writing
//! 15m	Review
//! ```

use std::fmt::Write as _;
use std::io::Write;

use anyhow::Result;
use wd_core::{Clock, LabelHours, Tracker};

/// Formats fractional hours as whole hours and minutes, truncating both.
///
/// A zero component is left out; a duration under a minute prints `0m`.
/// Negative totals carry a single leading `-`.
#[allow(clippy::cast_possible_truncation)]
pub fn format_hours(hours: f64) -> String {
    // Round to whole seconds first so 1/60 h is one minute, not 59.99 seconds.
    let seconds = (hours * 3600.0).round() as i64;
    let sign = if seconds < 0 { "-" } else { "" };
    let seconds = seconds.unsigned_abs();
    let h = seconds / 3600;
    let m = seconds % 3600 / 60;

    let mut parts = Vec::new();
    if h != 0 {
        parts.push(format!("{h}h"));
    }
    if m != 0 {
        parts.push(format!("{m}m"));
    }
    if parts.is_empty() {
        return "0m".to_string();
    }
    format!("{sign}{}", parts.join(" "))
}

/// Formats the summary as `<duration>\t<label>` lines.
pub fn format_summary(summary: &[LabelHours]) -> String {
    let mut output = String::new();
    for entry in summary {
        writeln!(output, "{}\t{}", format_hours(entry.hours), entry.label).unwrap();
    }
    output
}

/// Formats the summary as a JSON array of `{label, hours}` objects.
pub fn format_summary_json(summary: &[LabelHours]) -> Result<String> {
    Ok(serde_json::to_string_pretty(summary)?)
}

/// Runs the today command.
pub fn run<C: Clock, W: Write>(writer: &mut W, tracker: &Tracker<C>, json: bool) -> Result<()> {
    let summary = tracker.task_summary_by_day(tracker.today());

    if json {
        writeln!(writer, "{}", format_summary_json(&summary)?)?;
    } else {
        write!(writer, "{}", format_summary(&summary))?;
    }

    Ok(())
}

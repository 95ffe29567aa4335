//! Core type definitions.

use std::fmt;

use thiserror::Error;

/// Errors raised by the domain model.
///
/// Offering something other than an [`Event`](crate::Event) to the log is ruled
/// out by `EventLog::append` taking an `Event`, so the only runtime failure is
/// combining tasks that belong to different activities.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// Two tasks with different labels were combined.
    #[error("expected task label to be {expected:?}, got {found:?}")]
    LabelMismatch { expected: String, found: String },
}

/// An activity label.
///
/// Labels are free text typed by the user and kept exactly as given. Any
/// string is a valid label, including the empty one; rejecting blank input is
/// up to whoever collects it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Label(String);

impl Label {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Returns the label as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Label {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Label {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<Label> for String {
    fn from(label: Label) -> Self {
        label.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Label {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

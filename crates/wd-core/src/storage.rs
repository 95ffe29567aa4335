//! Storage port.
//!
//! Adaptors move `(timestamp, label)` records in and out of some persistent
//! medium. The model never sees how; it only rebuilds its log from whatever
//! [`EventStore::retrieve`] yields and hands the whole log back on persist.

use crate::event::Record;
use crate::event_log::EventLog;

/// A place events are loaded from and saved to.
pub trait EventStore {
    /// Adaptor failure.
    type Error;

    /// Reads every persisted record, in stored order.
    ///
    /// Each call is one complete, finite pass. A store with nothing persisted
    /// yet returns an empty sequence rather than an error.
    fn retrieve(&self) -> Result<Vec<Record>, Self::Error>;

    /// Replaces everything persisted with `records`.
    fn store(&mut self, records: Vec<Record>) -> Result<(), Self::Error>;
}

/// Connects an [`EventStore`] to the event log.
#[derive(Debug)]
pub struct Storage<S> {
    adaptor: S,
}

impl<S: EventStore> Storage<S> {
    pub const fn new(adaptor: S) -> Self {
        Self { adaptor }
    }

    /// Rebuilds an event log from the adaptor's records, in delivered order.
    pub fn restore(&self) -> Result<EventLog, S::Error> {
        let mut log = EventLog::new();
        for record in self.adaptor.retrieve()? {
            log.append_record(record);
        }
        tracing::debug!(events = log.len(), "restored event log");
        Ok(log)
    }

    /// Writes the full log back through the adaptor.
    pub fn persist(&mut self, log: &EventLog) -> Result<(), S::Error> {
        self.adaptor.store(log.records().collect())?;
        tracing::debug!(events = log.len(), "persisted event log");
        Ok(())
    }

    pub const fn adaptor(&self) -> &S {
        &self.adaptor
    }

    pub fn into_adaptor(self) -> S {
        self.adaptor
    }
}

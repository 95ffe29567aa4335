//! Storage adaptors for the time tracker.
//!
//! Both adaptors implement [`wd_core::EventStore`] with full-replace
//! semantics: `store` overwrites whatever was persisted before.
//!
//! - [`MemoryStore`] keeps records in a `Vec`, for tests and dry runs.
//! - [`CsvStore`] keeps records in a CSV file, one row per event.
//!
//! # CSV Format
//!
//! ```text
//! timestamp,label
//! 1985-10-26T01:21:00,Destination Time
//! 1985-10-26T01:22:00,"Present Time, roughly"
//! ```
//!
//! Timestamps are naive local time (`%Y-%m-%dT%H:%M:%S%.f`). Labels containing
//! commas, quotes, or line breaks are quoted with embedded quotes doubled.

mod csv;
mod memory;

use thiserror::Error;

pub use csv::CsvStore;
pub use memory::MemoryStore;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("i/o error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// A row in the backing file could not be understood.
    #[error("malformed row at line {line}: {message}")]
    Parse { line: usize, message: String },
}

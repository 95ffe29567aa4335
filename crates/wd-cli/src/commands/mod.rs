//! CLI command implementations.

pub mod log;
pub mod today;

//! whatdo CLI library.
//!
//! This crate provides the command-line interface for the time tracker.

mod cli;
pub mod commands;
mod config;

pub use cli::{Action, Cli, TODAY, UsageError};
pub use config::Config;

//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

/// The word that asks for a summary instead of logging an event.
pub const TODAY: &str = "today";

/// Log what you are doing right now.
///
/// Every invocation records an event; the time until the next event is the
/// time spent on it. Run `whatdo today` to see where today went.
#[derive(Debug, Parser)]
#[command(name = "whatdo", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the `today` summary as JSON.
    #[arg(long)]
    pub json: bool,

    /// What you are doing, or `today` for a summary of today.
    ///
    /// Flags may appear anywhere; put words starting with `-` after `--`.
    #[arg(value_name = "WHAT", num_args = 1..)]
    pub words: Vec<String>,
}

/// What the user asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Record an event with this label.
    Log { label: String },
    /// Print today's summary.
    Today,
}

/// Problems with how the tool was invoked.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UsageError {
    #[error("tell me what you are doing, e.g. `whatdo writing docs`, or run `whatdo today`")]
    MissingArguments,
}

impl Cli {
    /// Resolves the positional words into an action.
    ///
    /// Words that are all blank count as no words at all.
    pub fn action(&self) -> Result<Action, UsageError> {
        match self.words.as_slice() {
            [word] if word == TODAY => Ok(Action::Today),
            words => {
                let label = words.join(" ");
                if label.trim().is_empty() {
                    return Err(UsageError::MissingArguments);
                }
                Ok(Action::Log { label })
            }
        }
    }
}

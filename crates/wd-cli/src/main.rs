use std::path::Path;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use wd_cli::commands::{log, today};
use wd_cli::{Action, Cli, Config};
use wd_core::{Storage, Tracker};
use wd_store::CsvStore;

/// Load config and open the timesheet it points at.
fn open_storage(config_path: Option<&Path>) -> Result<Storage<CsvStore>> {
    let config = Config::load_from(config_path).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");
    Ok(Storage::new(CsvStore::new(config.timesheet_path)))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Logs go to stderr so summaries on stdout stay clean
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let action = match cli.action() {
        Ok(action) => action,
        Err(err) => Cli::command()
            .error(ErrorKind::MissingRequiredArgument, err)
            .exit(),
    };

    let mut storage = open_storage(cli.config.as_deref())?;
    let events = storage.restore().with_context(|| {
        format!(
            "failed to read timesheet {}",
            storage.adaptor().path().display()
        )
    })?;
    let mut tracker = Tracker::new(events);

    match action {
        Action::Log { label } => log::run(&mut tracker, &label),
        Action::Today => today::run(&mut std::io::stdout().lock(), &tracker, cli.json)?,
    }

    storage.persist(tracker.log()).with_context(|| {
        format!(
            "failed to save timesheet {}",
            storage.adaptor().path().display()
        )
    })?;

    Ok(())
}

//! Where the timesheet lives.
//!
//! The only setting is the timesheet path. It is resolved from, lowest
//! priority first:
//!
//! 1. `<data dir>/whatdo/timesheet.csv`
//! 2. `<config dir>/whatdo/config.toml`
//! 3. the file passed with `--config`
//! 4. `WHATDO_TIMESHEET_PATH`
//!
//! Missing files are skipped, so a fresh install needs no configuration.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

const APP_DIR: &str = "whatdo";
const ENV_PREFIX: &str = "WHATDO_";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// CSV file events are read from and written back to.
    pub timesheet_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timesheet_path: default_timesheet_path(),
        }
    }
}

impl Config {
    /// Stacks every source on top of the defaults.
    pub fn figment(config_path: Option<&Path>) -> Figment {
        let files = user_config_file().into_iter().chain(config_path.map(Path::to_path_buf));

        files
            .fold(
                Figment::from(Serialized::defaults(Self::default())),
                |figment, file| figment.merge(Toml::file(file)),
            )
            .merge(Env::prefixed(ENV_PREFIX))
    }

    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        Self::figment(config_path).extract()
    }
}

/// The per-user `config.toml`, if the platform has a config directory.
fn user_config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
}

/// The timesheet used when nothing else is configured.
///
/// Falls back to the working directory on platforms without a data directory.
fn default_timesheet_path() -> PathBuf {
    dirs::data_dir()
        .map_or_else(|| PathBuf::from("."), |dir| dir.join(APP_DIR))
        .join("timesheet.csv")
}

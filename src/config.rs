use crate::consts;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct Config {
    /// Milliseconds between steps at the start of a game
    tick_interval_ms: u64,

    /// Number of cells a drag must cover before it registers as a swipe
    swipe_threshold: u16,

    /// Whether to fire confetti when the score reaches a multiple of ten
    pub(crate) confetti: bool,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            tick_interval_ms: consts::INITIAL_TICK_MS,
            swipe_threshold: consts::SWIPE_THRESHOLD,
            confetti: true,
        }
    }
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("confetti-snake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }

    /// The configured starting step interval, clamped to the speed ceiling
    pub(crate) fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms).max(consts::MIN_TICK_PERIOD)
    }

    /// The configured swipe threshold; a zero threshold would fire on any
    /// drag, so it is bumped up to one.
    pub(crate) fn swipe_threshold(&self) -> u16 {
        self.swipe_threshold.max(1)
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}

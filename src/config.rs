use std::{
    io,
    path::{Path, PathBuf},
};

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::schedule;

/// a fatal configuration problem, reported before any alarm is scheduled
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("couldn't find a configuration file at {0}")]
    Missing(PathBuf),
    #[error("couldn't read configuration file {path}: {source}")]
    Read {
        path: PathBuf,
        source: io::Error,
    },
    #[error("couldn't parse configuration file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("couldn't write configuration file {path}: {source}")]
    Write {
        path: PathBuf,
        source: io::Error,
    },
    #[error("couldn't serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid alarm time {0:?}, expected 24-hour HH:MM")]
    InvalidTime(String),
    #[error("alarm sound file {0} does not exist")]
    MissingSound(PathBuf),
    #[error("couldn't determine the configuration directory")]
    ConfigDir,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// alarm times of day in 24-hour "HH:MM" format
    pub times: Vec<String>,
    /// sound file played when an alarm fires
    #[serde(default = "default_sound")]
    pub sound: PathBuf,
}

fn default_sound() -> PathBuf {
    PathBuf::from("chime.mp3")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            times: vec![],
            sound: default_sound(),
        }
    }
}

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// # Errors
    /// when the file is missing, unreadable or not valid TOML
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::Missing(path.to_path_buf()));
        }
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// # Errors
    /// when the config dir can't be created or the file can't be written
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let raw = toml::to_string(self)?;
        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        std::fs::write(path, raw).map_err(write_err)
    }

    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "chime")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// parses every configured time, failing fast on the first bad entry
    ///
    /// # Errors
    /// when any entry isn't a well-formed in-range "HH:MM" time
    pub fn alarm_times(&self) -> Result<Vec<NaiveTime>, ConfigError> {
        self.times
            .iter()
            .map(|time| {
                schedule::parse_time(time).map_err(|_| ConfigError::InvalidTime(time.clone()))
            })
            .collect()
    }

    /// # Errors
    /// when the configured sound file doesn't exist
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sound.exists() {
            Ok(())
        } else {
            Err(ConfigError::MissingSound(self.sound.clone()))
        }
    }
}

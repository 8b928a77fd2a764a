//! Configuration loading for the interop demo.
//!
//! Settings live in `~/.interop/config.toml`, or wherever `INTEROP_CONFIG`
//! points. Every key is optional; the resolved accessors fill in defaults.

use serde::Deserialize;
use std::{
    env, fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;
use toml::de::Error as TomlError;

pub const CONFIG_ENV_VAR: &str = "INTEROP_CONFIG";

pub const DEFAULT_NAME: &str = "Ann";
pub const DEFAULT_AGE: i32 = 30;
pub const DEFAULT_TRIALS: u32 = 10_000;

#[derive(Debug, Default, Deserialize)]
pub struct InteropConfig {
    pub person: Option<PersonConfig>,
    pub demo: Option<DemoConfig>,
}

/// Initial state of the record the demo constructs.
#[derive(Debug, Default, Deserialize)]
pub struct PersonConfig {
    pub name: Option<String>,
    pub age: Option<i32>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DemoConfig {
    /// Draws per operation for `interop stats`.
    pub trials: Option<u32>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: TomlError,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

impl InteropConfig {
    /// Load from the default location. A missing file is not an error.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let Some(path) = config_path() else {
            return Ok(None);
        };
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file");
            return Ok(None);
        }
        Self::load_from(&path).map(Some)
    }

    /// Like [`Self::load`], but a broken file only costs a warning.
    #[must_use]
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config.unwrap_or_default(),
            Err(err) => {
                tracing::warn!(path = %err.path().display(), "ignoring config: {err}");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(config),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    #[must_use]
    pub fn person_name(&self) -> &str {
        self.person
            .as_ref()
            .and_then(|p| p.name.as_deref())
            .unwrap_or(DEFAULT_NAME)
    }

    #[must_use]
    pub fn person_age(&self) -> i32 {
        self.person
            .as_ref()
            .and_then(|p| p.age)
            .unwrap_or(DEFAULT_AGE)
    }

    /// Never zero: a ratio over no trials is meaningless.
    #[must_use]
    pub fn trials(&self) -> u32 {
        self.demo
            .as_ref()
            .and_then(|d| d.trials)
            .unwrap_or(DEFAULT_TRIALS)
            .max(1)
    }
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    if let Some(explicit) = env::var_os(CONFIG_ENV_VAR).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(explicit));
    }
    dirs::home_dir().map(|home| home.join(".interop").join("config.toml"))
}

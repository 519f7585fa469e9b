//! User configuration loaded from a TOML file.

use crate::error::ConfigError;
use crate::render::RenderOptions;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Settings read from `config.toml`. Every field is optional.
///
/// ```toml
/// corpus = "~/docs/selenium.json"
/// start_section = "advanced-waits"
/// examples = true
/// notes = false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// JSON corpus to load instead of the bundled one
    pub corpus: Option<PathBuf>,
    /// Section to open when a session starts
    pub start_section: Option<String>,
    pub examples: Option<bool>,
    pub notes: Option<bool>,
}

impl Config {
    /// Default location: `<config dir>/docnav/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("docnav").join("config.toml"))
    }

    /// Parse a config file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load configuration.
    ///
    /// An explicitly given path must exist. Without one, the default location
    /// is tried and a missing file yields the default configuration.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_path(path);
        }

        match Self::default_path() {
            Some(path) if path.is_file() => {
                tracing::debug!("Using config at {}", path.display());
                Self::from_path(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        let defaults = RenderOptions::default();
        RenderOptions {
            examples: self.examples.unwrap_or(defaults.examples),
            notes: self.notes.unwrap_or(defaults.notes),
        }
    }
}

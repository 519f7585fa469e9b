//! Error handling types and utilities.

use std::path::PathBuf;
use thiserror::Error;

/// A specialized Result type for the `docnav` binary.
///
/// Library operations return their own error enums; the front end wraps them
/// with `.context()` and `.with_context()` through this alias.
pub type Result<T> = anyhow::Result<T>;

/// Error returned when a navigation action is rejected.
///
/// A rejected action leaves the session untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    /// The requested section id does not exist in the corpus.
    #[error("Unknown section '{id}'{}", format_suggestions(suggestions))]
    InvalidSection {
        id: String,
        /// Known section ids that look like the requested one, best first.
        suggestions: Vec<String>,
    },
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(". Did you mean: {}?", suggestions.join(", "))
    }
}

/// Error returned when loading or indexing a corpus fails.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// The corpus file could not be read.
    #[error("Failed to read corpus at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The corpus is not valid JSON or does not match the expected shape.
    #[error("Failed to parse corpus: {0}")]
    Parse(#[from] serde_json::Error),
    /// Same as `Parse`, for a corpus read from a file.
    #[error("Failed to parse corpus at {}: {source}", path.display())]
    ParseFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The corpus has no sections, so there is nothing to navigate.
    #[error("Corpus contains no sections")]
    Empty,
    /// Two sections share the same id.
    #[error("Duplicate section id '{0}'")]
    DuplicateSection(String),
    /// Two items share the same id, possibly in different sections.
    #[error("Duplicate item id '{id}' (in sections '{first}' and '{second}')")]
    DuplicateItem {
        id: String,
        first: String,
        second: String,
    },
}

/// Error returned when loading the configuration file fails.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

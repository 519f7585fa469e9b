//! Corpus loading from the bundled dataset or a JSON file.

use super::model::Corpus;
use crate::error::CorpusError;
use std::borrow::Cow;
use std::path::Path;

/// The Selenium WebDriver documentation corpus, compiled into the binary.
const BUNDLED_CORPUS: &str = include_str!("../../data/documentation.json");

/// Expands a leading `~` component to the user's home directory.
///
/// - `~/foo` becomes `/home/user/foo`
/// - `~` becomes `/home/user`
/// - Other paths are returned unchanged, byte for byte
pub fn expand_tilde(path: &Path) -> Cow<'_, Path> {
    if let Ok(rest) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        if rest.as_os_str().is_empty() {
            return Cow::Owned(home);
        }
        return Cow::Owned(home.join(rest));
    }
    Cow::Borrowed(path)
}

impl Corpus {
    /// Parse a corpus from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, CorpusError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a corpus file. A leading `~` is expanded.
    pub fn from_path(path: &Path) -> Result<Self, CorpusError> {
        let path = expand_tilde(path);

        let json = std::fs::read_to_string(&path).map_err(|source| CorpusError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let corpus: Self =
            serde_json::from_str(&json).map_err(|source| CorpusError::ParseFile {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::info!(
            "Loaded corpus from {} ({} sections)",
            path.display(),
            corpus.sections.len()
        );
        Ok(corpus)
    }

    /// The corpus shipped with the binary.
    pub fn bundled() -> Result<Self, CorpusError> {
        Self::from_json(BUNDLED_CORPUS)
    }
}

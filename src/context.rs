//! Application context: the loaded corpus plus resolved settings.

use crate::config::Config;
use crate::corpus::{ContentIndex, Corpus};
use crate::error::CorpusError;
use crate::navigation::Session;
use crate::render::RenderOptions;
use std::path::Path;
use std::sync::Arc;

/// Everything a front end needs to start sessions.
///
/// The corpus is loaded and indexed once; each session shares it.
/// This is intentionally simple - no persistence, just in-memory state.
#[derive(Debug, Clone)]
pub struct AppContext {
    index: Arc<ContentIndex>,
    /// Section new sessions open on, already checked against the corpus
    start_section: Option<String>,
    render_options: RenderOptions,
}

impl AppContext {
    /// Build a context from configuration. `corpus_override` takes precedence
    /// over the configured corpus path; without either, the bundled corpus is
    /// used.
    pub fn load(config: &Config, corpus_override: Option<&Path>) -> Result<Self, CorpusError> {
        let corpus = match corpus_override.or(config.corpus.as_deref()) {
            Some(path) => Corpus::from_path(path)?,
            None => Corpus::bundled()?,
        };
        let index = ContentIndex::new(corpus)?;

        let start_section = config.start_section.as_deref().and_then(|id| {
            if index.section(id).is_some() {
                Some(id.to_string())
            } else {
                tracing::warn!("Ignoring unknown start_section '{}' from config", id);
                None
            }
        });

        Ok(Self {
            index: Arc::new(index),
            start_section,
            render_options: config.render_options(),
        })
    }

    pub fn index(&self) -> &ContentIndex {
        &self.index
    }

    pub fn render_options(&self) -> RenderOptions {
        self.render_options
    }

    pub fn set_render_options(&mut self, options: RenderOptions) {
        self.render_options = options;
    }

    /// Start a new session, opened on the configured start section if any.
    pub fn new_session(&self) -> Session {
        let mut session = Session::new(Arc::clone(&self.index));
        if let Some(id) = &self.start_section
            && let Err(e) = session.set_active_section(id)
        {
            // Validated in `load`
            tracing::warn!("{}", e);
        }
        session
    }
}

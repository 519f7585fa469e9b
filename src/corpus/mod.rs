//! The documentation corpus: data model, loading, and the read-only index.
//!
//! A corpus is an ordered list of sections, each holding an ordered list of
//! items with their code examples. It is loaded once at startup and never
//! mutated afterwards.

pub(crate) mod index;
pub(crate) mod load;
pub(crate) mod model;

pub use index::ContentIndex;
pub use model::{Corpus, DEFAULT_SYNTAX_LANGUAGE, Example, Item, Section};

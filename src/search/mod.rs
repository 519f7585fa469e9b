//! Query matching for the navigation filter.
//!
//! Search is plain case-insensitive substring containment over an item's
//! title and description. Results keep corpus order; there is no ranking.

pub(crate) mod matcher;
pub(crate) mod suggest;

pub use matcher::QueryMatcher;
pub use suggest::suggest_sections;

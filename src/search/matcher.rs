//! Case-insensitive substring predicate over documentation items.

use crate::corpus::Item;

/// A search query prepared for matching against many items.
///
/// The query is lowercased once up front; each candidate field is lowercased
/// at match time with the same Unicode-aware `str::to_lowercase`, then tested
/// with `contains`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryMatcher {
    needle: String,
}

impl QueryMatcher {
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.to_lowercase(),
        }
    }

    /// True if the query is empty and therefore matches every item.
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Whether `text` contains the query, ignoring case.
    pub fn matches_text(&self, text: &str) -> bool {
        self.needle.is_empty() || text.to_lowercase().contains(&self.needle)
    }

    /// Whether an item's title or description contains the query.
    pub fn matches(&self, item: &Item) -> bool {
        self.matches_text(&item.title) || self.matches_text(&item.description)
    }

    /// Filter items, preserving their order.
    pub fn filter<'a, I>(&self, items: I) -> Vec<&'a Item>
    where
        I: IntoIterator<Item = &'a Item>,
    {
        items.into_iter().filter(|item| self.matches(item)).collect()
    }
}

//! The derived snapshot handed to the presentation layer.

use crate::corpus::{Item, Section};
use std::fmt;

/// Position of the active section among all sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionPosition {
    /// Zero-based index
    pub index: usize,
    pub total: usize,
}

/// Displays one-based, e.g. `3 / 13`.
impl fmt::Display for SectionPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.index + 1, self.total)
    }
}

/// What the visible item list represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// No query: every item of the active section.
    Browse,
    /// A query with at least one match.
    Results,
    /// A query with no matches. The empty list is final; callers must not
    /// fall back to the unfiltered items.
    NoResults,
}

/// Everything the presentation layer needs after a state change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View<'a> {
    pub active_section: &'a Section,
    pub active_item_id: Option<&'a str>,
    pub visible_items: Vec<&'a Item>,
    pub position: SectionPosition,
    pub mode: ViewMode,
    pub query: &'a str,
    pub can_step_previous: bool,
    pub can_step_next: bool,
}

impl View<'_> {
    /// Whether an item should be rendered with highlight emphasis.
    pub fn is_highlighted(&self, item: &Item) -> bool {
        self.active_item_id == Some(item.id.as_str())
    }
}

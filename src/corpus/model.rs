use serde::{Deserialize, Serialize};

/// Language used to highlight an item's `syntax` block.
///
/// Items carry no language of their own, so their syntax summary is always
/// shown as Java.
pub const DEFAULT_SYNTAX_LANGUAGE: &str = "java";

/// A complete corpus as stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Corpus {
    pub sections: Vec<Section>,
}

/// Top-level grouping of related documentation items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub items: Vec<Item>,
}

/// A single documented topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique across the whole corpus, not just within its section
    pub id: String,
    pub title: String,
    pub description: String,
    pub syntax: String,
    #[serde(default)]
    pub examples: Vec<Example>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// One illustrative code sample attached to an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    pub title: String,
    pub description: String,
    pub code: String,
    pub language: String,
}

impl Section {
    /// Anchor fragment for this section, e.g. `#basics`.
    pub fn anchor(&self) -> String {
        format!("#{}", self.id)
    }
}

impl Item {
    /// Anchor fragment for this item, e.g. `#implicit-wait`.
    pub fn anchor(&self) -> String {
        format!("#{}", self.id)
    }
}

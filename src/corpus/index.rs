//! Read-only lookups over a loaded corpus.

use super::model::{Corpus, Item, Section};
use crate::error::CorpusError;
use ahash::AHashMap;

/// Position of an item: (section position, item position within that section).
type ItemSlot = (usize, usize);

/// Immutable index over the documentation corpus.
///
/// Built once at startup and shared read-only for the lifetime of the
/// process. Lookups never fail beyond returning `None`.
#[derive(Debug, Clone)]
pub struct ContentIndex {
    sections: Vec<Section>,
    /// Map from section id to its position in `sections`
    section_positions: AHashMap<String, usize>,
    /// Map from item id to its slot, across all sections
    item_slots: AHashMap<String, ItemSlot>,
}

impl ContentIndex {
    /// Index a corpus, checking the id invariants lookups rely on.
    ///
    /// Section ids must be unique, item ids must be unique across all
    /// sections, and there must be at least one section to navigate to.
    pub fn new(corpus: Corpus) -> Result<Self, CorpusError> {
        let sections = corpus.sections;
        if sections.is_empty() {
            return Err(CorpusError::Empty);
        }

        let mut section_positions = AHashMap::with_capacity(sections.len());
        let mut item_slots = AHashMap::new();

        for (section_pos, section) in sections.iter().enumerate() {
            if section_positions
                .insert(section.id.clone(), section_pos)
                .is_some()
            {
                return Err(CorpusError::DuplicateSection(section.id.clone()));
            }

            for (item_pos, item) in section.items.iter().enumerate() {
                if let Some((first_section, _)) =
                    item_slots.insert(item.id.clone(), (section_pos, item_pos))
                {
                    return Err(CorpusError::DuplicateItem {
                        id: item.id.clone(),
                        first: sections[first_section].id.clone(),
                        second: section.id.clone(),
                    });
                }
            }
        }

        tracing::debug!(
            "Indexed corpus ({} sections, {} items)",
            sections.len(),
            item_slots.len()
        );

        Ok(Self {
            sections,
            section_positions,
            item_slots,
        })
    }

    /// All sections in corpus order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Look up a section by id.
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.section_index(id).map(|index| &self.sections[index])
    }

    /// Position of a section in [`sections`](Self::sections), if it exists.
    pub fn section_index(&self, id: &str) -> Option<usize> {
        self.section_positions.get(id).copied()
    }

    /// Section at a given position.
    pub fn section_at(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    /// The first section; a corpus is never empty once indexed.
    pub fn first(&self) -> &Section {
        &self.sections[0]
    }

    /// Look up an item anywhere in the corpus, along with its section.
    pub fn item(&self, id: &str) -> Option<(&Section, &Item)> {
        let &(section_pos, item_pos) = self.item_slots.get(id)?;
        let section = &self.sections[section_pos];
        Some((section, &section.items[item_pos]))
    }

    /// Section ids in corpus order.
    pub fn section_ids(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.id.as_str())
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Always false for an indexed corpus; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Total number of items across all sections.
    pub fn item_count(&self) -> usize {
        self.item_slots.len()
    }
}

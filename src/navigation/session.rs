use super::action::{Action, Direction};
use super::view::{SectionPosition, View, ViewMode};
use crate::corpus::{ContentIndex, Item, Section};
use crate::error::NavError;
use crate::search::{QueryMatcher, suggest_sections};
use ahash::AHashSet;
use std::sync::Arc;

/// Navigation and filter state for one browsing session.
///
/// Created at first render and discarded when the session ends. The corpus
/// is shared read-only; everything mutable lives here and is only changed
/// through the setters below.
#[derive(Debug, Clone)]
pub struct Session {
    index: Arc<ContentIndex>,
    /// Position of the active section in the corpus
    active_section: usize,
    /// Highlighted item. Not validated and not cleared on section change.
    active_item_id: Option<String>,
    search_query: String,
    /// Sections expanded in the sidebar tree
    expanded: AHashSet<String>,
}

impl Session {
    /// Start a session on the first section with no highlight and no query.
    pub fn new(index: Arc<ContentIndex>) -> Self {
        let first = index.first().id.clone();
        Self {
            index,
            active_section: 0,
            active_item_id: None,
            search_query: String::new(),
            expanded: AHashSet::from_iter([first]),
        }
    }

    /// The corpus this session navigates.
    pub fn index(&self) -> &ContentIndex {
        &self.index
    }

    pub fn active_section(&self) -> &Section {
        &self.index.sections()[self.active_section]
    }

    pub fn active_section_id(&self) -> &str {
        &self.active_section().id
    }

    pub fn active_item_id(&self) -> Option<&str> {
        self.active_item_id.as_deref()
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// True while a non-empty query is filtering the active section.
    pub fn is_searching(&self) -> bool {
        !self.search_query.is_empty()
    }

    /// Make `id` the active section.
    ///
    /// The search query and the highlighted item are kept as they are, so an
    /// active query re-scopes to the new section's items.
    pub fn set_active_section(&mut self, id: &str) -> Result<(), NavError> {
        let Some(position) = self.index.section_index(id) else {
            tracing::warn!("Rejected navigation to unknown section '{}'", id);
            return Err(NavError::InvalidSection {
                id: id.to_string(),
                suggestions: suggest_sections(id, &self.index),
            });
        };

        tracing::debug!(
            "Active section: '{}' -> '{}'",
            self.active_section_id(),
            id
        );
        self.active_section = position;
        Ok(())
    }

    /// Record the highlighted item. Any id is accepted; one that is not
    /// visible simply renders without emphasis.
    pub fn set_active_item(&mut self, id: Option<&str>) {
        tracing::debug!("Active item: {:?}", id);
        self.active_item_id = id.map(str::to_string);
    }

    /// Replace the search query verbatim.
    pub fn set_search_query(&mut self, query: &str) {
        tracing::debug!("Search query: {:?}", query);
        query.clone_into(&mut self.search_query);
    }

    pub fn clear_search(&mut self) {
        self.set_search_query("");
    }

    /// Whether stepping in `direction` would move to another section.
    pub fn can_step(&self, direction: Direction) -> bool {
        self.neighbour(direction).is_some()
    }

    /// Move to the adjacent section. At either end of the corpus this is a
    /// no-op; it never wraps around.
    pub fn step_section(&mut self, direction: Direction) {
        match self.neighbour(direction) {
            Some(position) => {
                tracing::debug!(
                    "Stepped {} from section {} to {}",
                    direction,
                    self.active_section,
                    position
                );
                self.active_section = position;
            }
            None => tracing::debug!("No {} section, staying put", direction),
        }
    }

    fn neighbour(&self, direction: Direction) -> Option<usize> {
        let position = match direction {
            Direction::Previous => self.active_section.checked_sub(1)?,
            Direction::Next => self.active_section + 1,
        };
        (position < self.index.len()).then_some(position)
    }

    pub fn position(&self) -> SectionPosition {
        SectionPosition {
            index: self.active_section,
            total: self.index.len(),
        }
    }

    /// Items of the active section that match the current query, in corpus
    /// order. An empty query returns every item; a query without matches
    /// returns an empty list.
    pub fn visible_items(&self) -> Vec<&Item> {
        let items = &self.active_section().items;
        let matcher = QueryMatcher::new(&self.search_query);
        if matcher.is_empty() {
            return items.iter().collect();
        }
        matcher.filter(items)
    }

    /// Expand a collapsed section in the sidebar, or collapse an expanded one.
    pub fn toggle_expanded(&mut self, id: &str) {
        if !self.expanded.remove(id) {
            self.expanded.insert(id.to_string());
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    /// Clicking a section in the sidebar both selects it and toggles its
    /// expansion.
    pub fn select_from_sidebar(&mut self, id: &str) -> Result<(), NavError> {
        self.set_active_section(id)?;
        self.toggle_expanded(id);
        Ok(())
    }

    /// Apply a user event. Only an unknown section id is rejected; the
    /// session is unchanged in that case.
    pub fn dispatch(&mut self, action: Action) -> Result<(), NavError> {
        match action {
            Action::SelectSection(id) => self.set_active_section(&id)?,
            Action::SelectItem(id) => self.set_active_item(id.as_deref()),
            Action::Search(query) => self.set_search_query(&query),
            Action::ClearSearch => self.clear_search(),
            Action::Step(direction) => self.step_section(direction),
            Action::ToggleSection(id) => self.select_from_sidebar(&id)?,
        }
        Ok(())
    }

    /// Snapshot of the current state for rendering.
    pub fn view(&self) -> View<'_> {
        let visible_items = self.visible_items();
        let mode = if !self.is_searching() {
            ViewMode::Browse
        } else if visible_items.is_empty() {
            ViewMode::NoResults
        } else {
            ViewMode::Results
        };

        View {
            active_section: self.active_section(),
            active_item_id: self.active_item_id(),
            visible_items,
            position: self.position(),
            mode,
            query: &self.search_query,
            can_step_previous: self.can_step(Direction::Previous),
            can_step_next: self.can_step(Direction::Next),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::{Corpus, Section};
    use assert2::{check, let_assert};

    fn item(id: &str, title: &str, description: &str) -> Item {
        Item {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            syntax: String::new(),
            examples: vec![],
            notes: None,
        }
    }

    fn session() -> Session {
        let corpus = Corpus {
            sections: vec![
                Section {
                    id: "basics".to_string(),
                    title: "WebDriver Basics".to_string(),
                    description: String::new(),
                    items: vec![
                        item("implicit-wait", "Implicit Wait", "Global timeout"),
                        item("explicit-wait", "Explicit Wait", "Per-condition timeout"),
                        item("window-management", "Window Management", "Resize windows"),
                    ],
                },
                Section {
                    id: "advanced-waits".to_string(),
                    title: "Advanced Waits".to_string(),
                    description: String::new(),
                    items: vec![
                        item("expected-conditions", "Expected Conditions", "Wait helpers"),
                        item("page-load-wait", "Page Load Wait", "Timeout for page loads"),
                    ],
                },
            ],
        };
        Session::new(Arc::new(ContentIndex::new(corpus).unwrap()))
    }

    fn titles(items: &[&Item]) -> Vec<String> {
        items.iter().map(|i| i.title.clone()).collect()
    }

    #[test]
    fn starts_on_first_section() {
        let session = session();
        check!(session.active_section_id() == "basics");
        check!(session.active_item_id().is_none());
        check!(session.search_query().is_empty());
        check!(session.is_expanded("basics"));
        check!(!session.is_expanded("advanced-waits"));
    }

    #[test]
    fn select_item_is_not_validated() {
        let mut session = session();
        session.set_active_item(Some("does-not-exist"));
        check!(session.active_item_id() == Some("does-not-exist"));
        check!(session.active_section_id() == "basics");
        session.set_active_item(None);
        check!(session.active_item_id().is_none());
    }

    #[test]
    fn section_change_keeps_highlight() {
        let mut session = session();
        session.set_active_item(Some("implicit-wait"));
        session.set_active_section("advanced-waits").unwrap();
        check!(session.active_item_id() == Some("implicit-wait"));

        let view = session.view();
        check!(!view.visible_items.iter().any(|i| view.is_highlighted(i)));
    }

    #[test]
    fn unknown_section_leaves_state_unchanged() {
        let mut session = session();
        session.set_search_query("wait");
        let_assert!(
            Err(NavError::InvalidSection { id, suggestions }) =
                session.set_active_section("advanced-wait")
        );
        check!(id == "advanced-wait");
        check!(suggestions == ["advanced-waits"]);
        check!(session.active_section_id() == "basics");
        check!(session.search_query() == "wait");
    }

    #[test]
    fn stepping_stops_at_both_ends() {
        let mut session = session();
        check!(!session.can_step(Direction::Previous));
        check!(session.can_step(Direction::Next));

        session.step_section(Direction::Next);
        check!(session.active_section_id() == "advanced-waits");
        check!(!session.can_step(Direction::Next));

        session.step_section(Direction::Next);
        check!(session.active_section_id() == "advanced-waits");

        session.step_section(Direction::Previous);
        session.step_section(Direction::Previous);
        check!(session.active_section_id() == "basics");
    }

    #[test]
    fn stepping_keeps_query_and_highlight() {
        let mut session = session();
        session.set_search_query("wait");
        session.set_active_item(Some("explicit-wait"));
        session.step_section(Direction::Next);
        check!(session.search_query() == "wait");
        check!(session.active_item_id() == Some("explicit-wait"));
    }

    #[test]
    fn query_is_stored_verbatim() {
        let mut session = session();
        session.set_search_query("  Wait ");
        check!(session.search_query() == "  Wait ");
        check!(session.visible_items().is_empty());
    }

    #[test]
    fn search_matches_description_too() {
        let mut session = session();
        session.set_search_query("RESIZE");
        check!(titles(&session.visible_items()) == ["Window Management"]);
    }

    #[test]
    fn view_modes() {
        let mut session = session();
        check!(session.view().mode == ViewMode::Browse);

        session.set_search_query("wait");
        check!(session.view().mode == ViewMode::Results);

        session.set_search_query("zzz-no-match");
        let view = session.view();
        check!(view.mode == ViewMode::NoResults);
        check!(view.visible_items.is_empty());

        session.clear_search();
        check!(session.view().mode == ViewMode::Browse);
    }

    #[test]
    fn view_reports_position_and_buttons() {
        let mut session = session();
        session.step_section(Direction::Next);
        let view = session.view();
        check!(view.position == SectionPosition { index: 1, total: 2 });
        check!(view.can_step_previous);
        check!(!view.can_step_next);
        check!(view.active_section.id == "advanced-waits");
    }

    #[test]
    fn sidebar_toggles_expansion() {
        let mut session = session();
        session.select_from_sidebar("advanced-waits").unwrap();
        check!(session.active_section_id() == "advanced-waits");
        check!(session.is_expanded("advanced-waits"));

        session.select_from_sidebar("advanced-waits").unwrap();
        check!(!session.is_expanded("advanced-waits"));

        session.toggle_expanded("basics");
        check!(!session.is_expanded("basics"));
    }

    #[test]
    fn sidebar_rejects_unknown_section_without_expanding() {
        let mut session = session();
        check!(session.select_from_sidebar("nope").is_err());
        check!(!session.is_expanded("nope"));
    }

    #[test]
    fn dispatch_toggle_selects_and_expands() {
        let mut session = session();
        session.set_search_query("wait");
        session
            .dispatch(Action::ToggleSection("advanced-waits".into()))
            .unwrap();
        check!(session.active_section_id() == "advanced-waits");
        check!(session.is_expanded("advanced-waits"));
        check!(session.search_query() == "wait");

        session
            .dispatch(Action::ToggleSection("advanced-waits".into()))
            .unwrap();
        check!(session.active_section_id() == "advanced-waits");
        check!(!session.is_expanded("advanced-waits"));
    }

    #[test]
    fn dispatch_applies_actions() {
        let mut session = session();
        session
            .dispatch(Action::SelectSection("advanced-waits".into()))
            .unwrap();
        session.dispatch(Action::Search("load".into())).unwrap();
        session
            .dispatch(Action::SelectItem(Some("page-load-wait".into())))
            .unwrap();

        check!(titles(&session.visible_items()) == ["Page Load Wait"]);
        check!(session.active_item_id() == Some("page-load-wait"));

        session.dispatch(Action::ClearSearch).unwrap();
        session.dispatch(Action::Step(Direction::Previous)).unwrap();
        check!(session.active_section_id() == "basics");
        check!(session.visible_items().len() == 3);

        check!(
            session
                .dispatch(Action::SelectSection("unknown-id".into()))
                .is_err()
        );
        check!(session.active_section_id() == "basics");
    }
}

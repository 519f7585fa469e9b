//! Shared test fixtures for integration tests.
//!
//! # Available Fixtures
//!
//! - `scenario_session`: a small two-section corpus whose first section holds
//!   "Implicit Wait", "Explicit Wait" and "Window Management"
//! - `bundled_session`: a session over the corpus compiled into the binary

use docnav::{ContentIndex, Corpus, Example, Item, Section, Session};
use rstest::fixture;
use std::sync::Arc;

/// Build an item with a single Java example.
pub fn item(id: &str, title: &str, description: &str) -> Item {
    Item {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        syntax: format!("// {}", title),
        examples: vec![Example {
            title: format!("{} example", title),
            description: String::new(),
            code: "driver.get(\"https://example.com\");".to_string(),
            language: "java".to_string(),
        }],
        notes: None,
    }
}

pub fn section(id: &str, title: &str, items: Vec<Item>) -> Section {
    Section {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("All about {}", title),
        items,
    }
}

pub fn scenario_corpus() -> Corpus {
    Corpus {
        sections: vec![
            section(
                "basics",
                "WebDriver Basics",
                vec![
                    item(
                        "implicit-wait",
                        "Implicit Wait",
                        "Global timeout for findElement",
                    ),
                    item(
                        "explicit-wait",
                        "Explicit Wait",
                        "Wait for a specific condition",
                    ),
                    item(
                        "window-management",
                        "Window Management",
                        "Maximize, resize and position browser windows",
                    ),
                ],
            ),
            section(
                "advanced-waits",
                "Advanced Waits",
                vec![
                    item(
                        "expected-conditions",
                        "Expected Conditions",
                        "Built-in conditions for explicit waits",
                    ),
                    item("page-load-wait", "Page Load Wait", "Timeout for page loads"),
                    item("fluent-wait", "Fluent Wait", "Polling interval and ignored exceptions"),
                ],
            ),
        ],
    }
}

#[fixture]
pub fn scenario_session() -> Session {
    let index = ContentIndex::new(scenario_corpus()).expect("scenario corpus is valid");
    Session::new(Arc::new(index))
}

#[fixture]
pub fn bundled_session() -> Session {
    let corpus = Corpus::bundled().expect("bundled corpus parses");
    let index = ContentIndex::new(corpus).expect("bundled corpus is valid");
    Session::new(Arc::new(index))
}

/// Titles of a list of items, for readable assertions.
pub fn titles(items: &[&Item]) -> Vec<String> {
    items.iter().map(|item| item.title.clone()).collect()
}

pub mod cli;
pub mod config;
pub mod context;
pub mod corpus;
pub mod error;
pub mod navigation;
pub mod render;
pub mod repl;
pub mod search;
pub mod tracing;

pub use context::AppContext;
pub use corpus::{ContentIndex, Corpus, Example, Item, Section};
pub use error::{ConfigError, CorpusError, NavError};
pub use navigation::{Action, Direction, SectionPosition, Session, View, ViewMode};

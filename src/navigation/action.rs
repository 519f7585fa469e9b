//! User events and their textual command form.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Direction for stepping between adjacent sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// A single user event applied to a [`Session`](super::Session).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Make a section active. Fails for unknown ids.
    SelectSection(String),
    /// Highlight an item, or clear the highlight with `None`.
    SelectItem(Option<String>),
    /// Replace the search query verbatim.
    Search(String),
    /// Reset the search query to empty.
    ClearSearch,
    /// Move to the previous or next section if there is one.
    Step(Direction),
    /// Select a section and expand or collapse it, like a sidebar click.
    /// Fails for unknown ids.
    ToggleSection(String),
}

/// Error returned when a command line cannot be parsed into an [`Action`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseActionError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command '{0}'")]
    UnknownCommand(String),
    #[error("Command '{0}' needs an argument")]
    MissingArgument(&'static str),
}

impl FromStr for Action {
    type Err = ParseActionError;

    /// Parse the REPL command language.
    ///
    /// - `section <id>` / `toggle <id>`
    /// - `item <id>` (no id clears the highlight)
    /// - `search <text>`: everything after the first space is kept verbatim
    /// - `clear`, `next`, `prev`
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_start();
        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
        let argument = rest.trim();

        let required = |name: &'static str| {
            if argument.is_empty() {
                Err(ParseActionError::MissingArgument(name))
            } else {
                Ok(argument.to_string())
            }
        };

        match command.trim_end() {
            "" => Err(ParseActionError::Empty),
            "section" | "s" => required("section").map(Self::SelectSection),
            "toggle" | "t" => required("toggle").map(Self::ToggleSection),
            "item" | "i" => Ok(Self::SelectItem(
                (!argument.is_empty()).then(|| argument.to_string()),
            )),
            "search" | "/" => Ok(Self::Search(rest.to_string())),
            "clear" => Ok(Self::ClearSearch),
            "next" | "n" => Ok(Self::Step(Direction::Next)),
            "prev" | "previous" | "p" => Ok(Self::Step(Direction::Previous)),
            other => Err(ParseActionError::UnknownCommand(other.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Previous => f.write_str("previous"),
            Self::Next => f.write_str("next"),
        }
    }
}

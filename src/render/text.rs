//! Text rendering for views, items and the sidebar.

use super::highlight::{Highlighter, normalize_language};
use crate::corpus::{ContentIndex, DEFAULT_SYNTAX_LANGUAGE, Item};
use crate::navigation::{Session, View, ViewMode};
use std::fmt::{self, Write as _};

/// Which optional parts of an item to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub examples: bool,
    pub notes: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            examples: true,
            notes: true,
        }
    }
}

/// Render a full page for the current view.
pub fn render_view(
    output: &mut String,
    view: &View<'_>,
    highlighter: &dyn Highlighter,
    options: RenderOptions,
) -> fmt::Result {
    let section = view.active_section;

    match view.mode {
        // Header only while browsing; a search replaces it with results.
        ViewMode::Browse => {
            writeln!(output, "# {}", section.title)?;
            writeln!(output)?;
            if !section.description.is_empty() {
                writeln!(output, "{}", section.description)?;
                writeln!(output)?;
            }
            writeln!(output, "[{} Topics]", view.visible_items.len())?;
            writeln!(output)?;
        }
        ViewMode::Results => {
            writeln!(
                output,
                "Results for \"{}\" in {} ({})",
                view.query,
                section.title,
                view.visible_items.len()
            )?;
            writeln!(output)?;
        }
        ViewMode::NoResults => {
            writeln!(output, "No results found for \"{}\"", view.query)?;
            writeln!(output, "(use `clear` to clear the search)")?;
            writeln!(output)?;
        }
    }

    for item in &view.visible_items {
        render_item(output, item, view.is_highlighted(item), highlighter, options)?;
        writeln!(output)?;
    }

    render_footer(output, view)
}

/// Render one item card.
pub fn render_item(
    output: &mut String,
    item: &Item,
    highlighted: bool,
    highlighter: &dyn Highlighter,
    options: RenderOptions,
) -> fmt::Result {
    let marker = if highlighted { ">> " } else { "" };
    writeln!(output, "{}## {}  ({})", marker, item.title, item.anchor())?;
    writeln!(output)?;
    writeln!(output, "{}", item.description)?;
    writeln!(output)?;

    writeln!(output, "Syntax:")?;
    write_code_block(output, &item.syntax, DEFAULT_SYNTAX_LANGUAGE, highlighter)?;

    if options.examples && !item.examples.is_empty() {
        writeln!(output)?;
        writeln!(output, "Examples:")?;
        for (i, example) in item.examples.iter().enumerate() {
            writeln!(output)?;
            writeln!(output, "{}. {}", i + 1, example.title)?;
            if !example.description.is_empty() {
                writeln!(output, "   {}", example.description)?;
            }
            write_code_block(output, &example.code, &example.language, highlighter)?;
        }
    }

    if options.notes
        && let Some(notes) = &item.notes
        && !notes.is_empty()
    {
        writeln!(output)?;
        writeln!(output, "Notes: {}", notes)?;
    }

    Ok(())
}

fn write_code_block(
    output: &mut String,
    code: &str,
    language: &str,
    highlighter: &dyn Highlighter,
) -> fmt::Result {
    let language = normalize_language(language);
    writeln!(output, "```{}", language)?;
    let markup = highlighter.highlight(code, &language);
    output.push_str(markup.trim_end_matches('\n'));
    writeln!(output)?;
    writeln!(output, "```")
}

fn render_footer(output: &mut String, view: &View<'_>) -> fmt::Result {
    let previous = if view.can_step_previous {
        "<- Previous"
    } else {
        "   --      "
    };
    let next = if view.can_step_next { "Next ->" } else { "  --   " };
    writeln!(output, "{}    {}    {}", previous, view.position, next)
}

/// Render the navigation tree: every section, with the items of expanded
/// sections listed underneath.
pub fn render_sidebar(output: &mut String, session: &Session) -> fmt::Result {
    let active = session.active_section_id();
    for section in session.index().sections() {
        let marker = if section.id == active { '*' } else { ' ' };
        let fold = match (section.items.is_empty(), session.is_expanded(&section.id)) {
            (true, _) => ' ',
            (false, true) => 'v',
            (false, false) => '>',
        };
        writeln!(
            output,
            "{} {} {}  ({})",
            marker,
            fold,
            section.title,
            section.anchor()
        )?;

        if session.is_expanded(&section.id) {
            for item in &section.items {
                let highlight = if session.active_item_id() == Some(item.id.as_str()) {
                    "> "
                } else {
                    "- "
                };
                writeln!(output, "      {}{}  ({})", highlight, item.title, item.anchor())?;
            }
        }
    }
    Ok(())
}

/// Render a flat table of sections with their positions and item counts.
pub fn render_section_list(output: &mut String, index: &ContentIndex) -> fmt::Result {
    let width = index.section_ids().map(str::len).max().unwrap_or(0);
    for (i, section) in index.sections().iter().enumerate() {
        writeln!(
            output,
            "{:>2}. {:<width$}  {} ({} items)",
            i + 1,
            section.id,
            section.title,
            section.items.len(),
            width = width
        )?;
    }
    Ok(())
}

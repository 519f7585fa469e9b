//! Interactive line-oriented session.
//!
//! Each input line is either a navigation [`Action`] (see its `FromStr`
//! impl) or one of the display commands below. After every accepted action
//! the current view is rendered again.

use crate::context::AppContext;
use crate::navigation::{Action, Session};
use crate::render::{PlainHighlighter, render_section_list, render_sidebar, render_view};
use std::io::{self, BufRead, Write};

const PROMPT: &str = "docnav> ";

const HELP: &str = "\
Commands:
  section <id>    switch to a section (search query is kept)
  next | prev     step to the adjacent section
  search <text>   filter the current section by title or description
  clear           clear the search
  item [<id>]     highlight an item (no id clears the highlight)
  toggle <id>     select a section and expand/collapse it in the sidebar
  sidebar         show the navigation tree
  sections        list all sections
  show            render the current view again
  help            show this help
  quit            leave
";

/// Run a session until `quit` or end of input.
pub fn run<R, W>(context: &AppContext, input: R, output: &mut W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut session = context.new_session();
    tracing::info!("Session started on '{}'", session.active_section_id());

    write_view(context, &session, output)?;
    write!(output, "{}", PROMPT)?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;

        match line.trim() {
            "quit" | "exit" | "q" => break,
            "" => {}
            "help" | "?" => write!(output, "{}", HELP)?,
            "show" => write_view(context, &session, output)?,
            "sidebar" => {
                let mut page = String::new();
                render_sidebar(&mut page, &session).map_err(io::Error::other)?;
                write!(output, "{}", page)?;
            }
            "sections" => {
                let mut page = String::new();
                render_section_list(&mut page, session.index()).map_err(io::Error::other)?;
                write!(output, "{}", page)?;
            }
            _ => match line.parse::<Action>() {
                Ok(action) => match session.dispatch(action) {
                    Ok(()) => write_view(context, &session, output)?,
                    Err(e) => writeln!(output, "error: {}", e)?,
                },
                Err(e) => writeln!(output, "error: {} (type `help` for commands)", e)?,
            },
        }

        write!(output, "{}", PROMPT)?;
        output.flush()?;
    }

    writeln!(output)?;
    Ok(())
}

fn write_view<W: Write>(context: &AppContext, session: &Session, output: &mut W) -> io::Result<()> {
    let mut page = String::new();
    render_view(
        &mut page,
        &session.view(),
        &PlainHighlighter,
        context.render_options(),
    )
    .map_err(io::Error::other)?;
    write!(output, "{}", page)
}

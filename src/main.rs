use anyhow::{Context, bail};
use clap::Parser;
use docnav::AppContext;
use docnav::cli::{Cli, Commands};
use docnav::config::Config;
use docnav::error::Result;
use docnav::render::{
    PlainHighlighter, RenderOptions, render_item, render_section_list, render_view,
};
use std::io::{self, Write};

fn main() -> Result<()> {
    let cli = Cli::parse();
    docnav::tracing::init(cli.verbose);

    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    let mut context =
        AppContext::load(&config, cli.corpus.as_deref()).context("Failed to load corpus")?;

    let defaults = context.render_options();
    context.set_render_options(RenderOptions {
        examples: defaults.examples && !cli.no_examples,
        notes: defaults.notes && !cli.no_notes,
    });

    tracing::info!(
        "Corpus ready ({} sections, {} items)",
        context.index().len(),
        context.index().item_count()
    );

    let mut page = String::new();
    match cli.command {
        Commands::Sections => render_section_list(&mut page, context.index())?,
        Commands::Show {
            section,
            query,
            item,
        } => {
            let mut session = context.new_session();
            if let Some(id) = section {
                session.set_active_section(&id)?;
            }
            if let Some(query) = query {
                session.set_search_query(&query);
            }
            session.set_active_item(item.as_deref());
            render_view(
                &mut page,
                &session.view(),
                &PlainHighlighter,
                context.render_options(),
            )?;
        }
        Commands::Item { id } => {
            let Some((section, item)) = context.index().item(&id) else {
                bail!("Unknown item '{}'", id);
            };
            tracing::debug!("Item '{}' found in section '{}'", id, section.id);
            render_item(
                &mut page,
                item,
                false,
                &PlainHighlighter,
                context.render_options(),
            )?;
        }
        Commands::Repl => {
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            return docnav::repl::run(&context, stdin.lock(), &mut stdout)
                .context("Interactive session failed");
        }
    }

    let mut stdout = io::stdout().lock();
    stdout.write_all(page.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

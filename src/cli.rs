use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "docnav")]
#[command(about = "Browse and search a documentation corpus", long_about = None)]
pub struct Cli {
    /// JSON corpus to load instead of the bundled one
    #[arg(long, global = true)]
    pub corpus: Option<PathBuf>,
    /// Config file (default: <config dir>/docnav/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Hide code examples
    #[arg(long, global = true)]
    pub no_examples: bool,
    /// Hide notes
    #[arg(long, global = true)]
    pub no_notes: bool,
    /// Log progress to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List all sections
    Sections,
    /// Render one section, optionally filtered by a query
    Show {
        /// Section id (default: the start section)
        section: Option<String>,
        #[arg(short, long)]
        query: Option<String>,
        /// Item id to highlight
        #[arg(short, long)]
        item: Option<String>,
    },
    /// Render a single item wherever it lives
    Item { id: String },
    /// Interactive session reading commands from stdin
    Repl,
}

use std::path::PathBuf;

use biblia_types::{Pick, Selection};
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "biblia", version, about = "Read a Bible corpus and count its words")]
pub struct Cli {
    /// Corpus JSON file, overrides the configured path
    #[arg(long, global = true)]
    pub corpus: Option<PathBuf>,

    /// JSON config file (default: ./biblia.json when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Stop-word language code
    #[arg(long, global = true)]
    pub language: Option<String>,

    /// Print JSON for an external renderer instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List books with chapter and verse counts
    Books,
    /// Print the verses of a selection
    Read(SelectionArgs),
    /// Most frequent words of a selection, with word-cloud weights
    Words {
        #[command(flatten)]
        selection: SelectionArgs,
        /// Number of bars, overrides the configured top_n
        #[arg(long)]
        top: Option<usize>,
        /// Extra stop word for this request, repeatable
        #[arg(long = "stop-word")]
        stop_words: Vec<String>,
    },
    /// Verse lengths, chapter totals and corpus share of a selection
    Stats(SelectionArgs),
    /// Each book's share of the corpus
    Shares,
}

#[derive(Debug, Clone, Args)]
pub struct SelectionArgs {
    /// Book abbreviation (gn, ex, ...)
    pub book: String,

    /// Chapter number or "all"
    #[arg(short, long, default_value = "all")]
    pub chapter: Pick,

    /// Verse number or "all"
    #[arg(short, long, default_value = "all")]
    pub verse: Pick,
}

impl SelectionArgs {
    pub fn to_selection(&self) -> Selection {
        Selection::book(self.book.clone())
            .with_chapter(self.chapter)
            .with_verse(self.verse)
    }
}

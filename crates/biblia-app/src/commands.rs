use std::io::Write;

use serde::Serialize;

use crate::cli::Command;
use crate::output::{OutputFormat, write_json};
use crate::state::AppState;

pub mod read;
pub mod shares;
pub mod stats;
pub mod words;

use read::handle_read;
use shares::handle_shares;
use stats::handle_stats;
use words::handle_words;

/// Run one command. Each call is a fresh, side-effect-free computation over the cached corpus.
pub fn handle_command(
    state: &AppState,
    command: &Command,
    format: OutputFormat,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    tracing::debug!("Handling {command:?}");
    match command {
        Command::Books => handle_books(state, format, out),
        Command::Read(args) => handle_read(state, &args.to_selection(), format, out),
        Command::Words {
            selection,
            top,
            stop_words,
        } => handle_words(
            state,
            &selection.to_selection(),
            *top,
            stop_words,
            format,
            out,
        ),
        Command::Stats(args) => handle_stats(state, &args.to_selection(), format, out),
        Command::Shares => handle_shares(state, format, out),
    }
}

#[derive(Serialize)]
struct BookSummary<'a> {
    abbrev: &'a str,
    name: String,
    chapters: usize,
    verses: usize,
}

fn handle_books(state: &AppState, format: OutputFormat, out: &mut impl Write) -> anyhow::Result<()> {
    let books: Vec<BookSummary> = state
        .corpus
        .books()
        .iter()
        .map(|book| BookSummary {
            abbrev: book.abbrev(),
            name: state.display_name(book.abbrev()),
            chapters: book.chapter_count(),
            verses: book.verse_count(),
        })
        .collect();

    match format {
        OutputFormat::Json => write_json(out, &books)?,
        OutputFormat::Text => {
            for book in &books {
                writeln!(
                    out,
                    "{:<6} {:<20} {:>4} chapters {:>6} verses",
                    book.abbrev, book.name, book.chapters, book.verses
                )?;
            }
        }
    }

    Ok(())
}

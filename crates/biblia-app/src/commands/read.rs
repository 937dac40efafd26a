use std::io::Write;

use biblia_core::extract_verses;
use biblia_types::{Pick, Selection};
use serde_json::json;

use crate::output::{OutputFormat, write_json};
use crate::state::AppState;

pub fn handle_read(
    state: &AppState,
    selection: &Selection,
    format: OutputFormat,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let book = state.corpus.find_book(&selection.book)?;
    let verses = extract_verses(book, selection.chapter.index(), selection.verse.index())?;
    let name = state.display_name(book.abbrev());
    tracing::debug!("{selection}: {} verses", verses.len());

    if format == OutputFormat::Json {
        return write_json(out, &json!({ "book": name, "selection": selection, "verses": verses }));
    }

    if verses.is_empty() {
        writeln!(out, "{name} has no verses")?;
        return Ok(());
    }

    let mut current_chapter = None;
    for verse in &verses {
        if current_chapter != Some(verse.chapter) {
            if current_chapter.is_some() {
                writeln!(out)?;
            }
            writeln!(out, "### {name} {}", verse.chapter)?;
            current_chapter = Some(verse.chapter);
        }
        writeln!(out, "*{}* {}", verse.verse, verse.text)?;
    }

    if selection.chapter == Pick::All {
        writeln!(out)?;
        writeln!(out, "{} chapters, {} verses", book.chapter_count(), verses.len())?;
    }

    Ok(())
}

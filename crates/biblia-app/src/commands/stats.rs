use std::io::Write;

use biblia_core::analyze;
use biblia_types::Selection;
use serde_json::json;

use super::words::selection_suffix;
use crate::output::{OutputFormat, bar, write_json};
use crate::state::AppState;

pub fn handle_stats(
    state: &AppState,
    selection: &Selection,
    format: OutputFormat,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let report = analyze(state.corpus, selection, &state.stop_words, state.analysis_options())?;
    let name = state.display_name(state.corpus.find_book(&selection.book)?.abbrev());

    if format == OutputFormat::Json {
        return write_json(
            out,
            &json!({
                "book": name,
                "selection": report.selection,
                "verse_lengths": report.verse_lengths,
                "length_summary": report.length_summary,
                "histogram": report.histogram,
                "chapter_totals": report.chapter_totals,
                "book_words": report.book_words,
                "corpus_share": report.corpus_share,
            }),
        );
    }

    writeln!(out, "### Statistics: {name} {}", selection_suffix(selection))?;
    match &report.length_summary {
        Some(summary) => writeln!(
            out,
            "{} verses, {}..{} words per verse, mean {:.1}",
            summary.count, summary.min, summary.max, summary.mean
        )?,
        None => writeln!(out, "no verses selected")?,
    }

    if !report.histogram.is_empty() {
        writeln!(out)?;
        writeln!(out, "Verse length (words)")?;
        let max = report.histogram.iter().map(|b| b.count).max().unwrap_or(0);
        for bin in &report.histogram {
            writeln!(
                out,
                "{:>4}-{:<4} {:>5} {}",
                bin.lower,
                bin.upper,
                bin.count,
                bar(bin.count, max)
            )?;
        }
    }

    if !report.chapter_totals.is_empty() {
        writeln!(out)?;
        writeln!(out, "Words per chapter")?;
        let max = report.chapter_totals.iter().copied().max().unwrap_or(0);
        for (idx, total) in report.chapter_totals.iter().enumerate() {
            writeln!(out, "{:>4} {:>7} {}", idx + 1, total, bar(*total, max))?;
        }
    }

    writeln!(out)?;
    writeln!(
        out,
        "{name}: {} words, {:.2}% of the corpus",
        report.book_words, report.corpus_share
    )?;

    Ok(())
}

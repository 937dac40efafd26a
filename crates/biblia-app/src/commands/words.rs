use std::io::Write;

use biblia_core::analyze;
use biblia_types::Selection;
use serde_json::json;

use crate::output::{OutputFormat, bar, write_json};
use crate::state::AppState;

pub fn handle_words(
    state: &AppState,
    selection: &Selection,
    top: Option<usize>,
    extra_stop_words: &[String],
    format: OutputFormat,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let mut options = state.analysis_options();
    if let Some(top) = top {
        options.top_n = top;
    }

    let report = if extra_stop_words.is_empty() {
        analyze(state.corpus, selection, &state.stop_words, options)?
    } else {
        let mut stop_words = state.stop_words.clone();
        stop_words.extend(extra_stop_words);
        analyze(state.corpus, selection, &stop_words, options)?
    };
    let name = state.display_name(state.corpus.find_book(&selection.book)?.abbrev());

    if format == OutputFormat::Json {
        return write_json(
            out,
            &json!({
                "book": name,
                "selection": report.selection,
                "total_tokens": report.total_tokens,
                "distinct_tokens": report.distinct_tokens,
                "top_words": report.top_words,
                "cloud": report.cloud,
                "book_cloud": report.book_cloud,
                "cloud_config": state.config.cloud,
            }),
        );
    }

    writeln!(out, "### Most frequent words: {name} {}", selection_suffix(selection))?;
    if report.top_words.is_empty() {
        writeln!(out, "(no words left after stop-word removal)")?;
        return Ok(());
    }

    let max = report.top_words[0].count;
    let width = report
        .top_words
        .iter()
        .map(|w| w.word.chars().count())
        .max()
        .unwrap_or(0);
    for word in &report.top_words {
        writeln!(
            out,
            "{:<width$} {:>6} {}",
            word.word,
            word.count,
            bar(word.count, max)
        )?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "{} words ({} distinct) after stop-word removal; cloud of {} words, book cloud of {}",
        report.total_tokens,
        report.distinct_tokens,
        report.cloud.len(),
        report.book_cloud.len()
    )?;

    Ok(())
}

pub(crate) fn selection_suffix(selection: &Selection) -> String {
    match (selection.chapter.index(), selection.verse.index()) {
        (None, None) => "(all chapters)".to_string(),
        (Some(c), None) => format!("{c}"),
        (Some(c), Some(v)) => format!("{c}:{v}"),
        (None, Some(v)) => format!("?:{v}"),
    }
}

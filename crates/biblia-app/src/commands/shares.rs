use std::io::Write;

use biblia_core::stats::book_shares;
use serde_json::json;

use crate::output::{OutputFormat, bar, write_json};
use crate::state::AppState;

pub fn handle_shares(state: &AppState, format: OutputFormat, out: &mut impl Write) -> anyhow::Result<()> {
    let shares = book_shares(state.corpus)?;

    if format == OutputFormat::Json {
        let named: Vec<_> = shares
            .iter()
            .map(|share| {
                json!({
                    "abbrev": share.abbrev,
                    "name": state.display_name(&share.abbrev),
                    "words": share.words,
                    "percent": share.percent,
                })
            })
            .collect();
        return write_json(out, &named);
    }

    let max = shares.iter().map(|s| s.words).max().unwrap_or(0);
    for share in &shares {
        writeln!(
            out,
            "{:<20} {:>8} {:>6.2}% {}",
            state.display_name(&share.abbrev),
            share.words,
            share.percent,
            bar(share.words, max)
        )?;
    }
    writeln!(out, "{} words in {} books", state.corpus.word_count(), shares.len())?;

    Ok(())
}

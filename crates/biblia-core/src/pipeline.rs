use biblia_types::{Selection, SelectionReport, VerseRef};

use crate::cloud::CloudInput;
use crate::corpus::{Book, Corpus};
use crate::error::{AnalysisError, SelectionError};
use crate::frequency::{FrequencyTable, frequency_table};
use crate::preprocess::normalize;
use crate::stats;
use crate::stopwords::StopWords;

/// Knobs for [`analyze`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisOptions {
    /// Bars in the frequency chart
    pub top_n: usize,
    /// Words in each cloud
    pub cloud_words: usize,
    pub histogram_bins: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            top_n: 20,
            cloud_words: 200,
            histogram_bins: 10,
        }
    }
}

// (chapter, verse, text), all positions 1-based
fn select<'a>(
    book: &'a Book,
    chapter: Option<usize>,
    verse: Option<usize>,
) -> Result<Vec<(usize, usize, &'a str)>, SelectionError> {
    let numbered = |c: usize, verses: &'a [String]| {
        verses
            .iter()
            .enumerate()
            .map(move |(v, text)| (c, v + 1, text.as_str()))
    };

    match (chapter, verse) {
        (None, None) => Ok(book
            .chapters()
            .iter()
            .enumerate()
            .flat_map(|(c, verses)| numbered(c + 1, verses.as_slice()))
            .collect()),
        (None, Some(_)) => Err(SelectionError::VerseWithoutChapter(
            book.abbrev().to_string(),
        )),
        (Some(c), None) => Ok(numbered(c, book.chapter(c)?.as_slice()).collect()),
        (Some(c), Some(v)) => Ok(vec![(c, v, book.verse(c, v)?)]),
    }
}

/// Verse texts of a selection, chapter-then-verse order
pub fn extract_text(
    book: &Book,
    chapter: Option<usize>,
    verse: Option<usize>,
) -> Result<Vec<&str>, SelectionError> {
    Ok(select(book, chapter, verse)?
        .into_iter()
        .map(|(_, _, text)| text)
        .collect())
}

/// Same selection as [`extract_text`], with verse numbers for display
pub fn extract_verses(
    book: &Book,
    chapter: Option<usize>,
    verse: Option<usize>,
) -> Result<Vec<VerseRef>, SelectionError> {
    Ok(select(book, chapter, verse)?
        .into_iter()
        .map(|(chapter, verse, text)| VerseRef {
            chapter,
            verse,
            text: text.to_string(),
        })
        .collect())
}

/// Normalized, order-preserving tokens with stop words removed
pub fn tokenize(text: &str, stop_words: &StopWords) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .filter(|token| !stop_words.contains(token))
        .map(str::to_string)
        .collect()
}

/// Counts over every token of every verse
pub fn count_words<S: AsRef<str>>(verses: &[S], stop_words: &StopWords) -> FrequencyTable {
    frequency_table(
        verses
            .iter()
            .flat_map(|verse| tokenize(verse.as_ref(), stop_words)),
    )
}

/// Resolve a selection and compute everything the renderer shows for it
pub fn analyze(
    corpus: &Corpus,
    selection: &Selection,
    stop_words: &StopWords,
    options: AnalysisOptions,
) -> Result<SelectionReport, AnalysisError> {
    let book = corpus.find_book(&selection.book)?;
    let verses = extract_verses(book, selection.chapter.index(), selection.verse.index())?;
    let texts: Vec<&str> = verses.iter().map(|v| v.text.as_str()).collect();

    let table = count_words(&texts, stop_words);
    tracing::debug!(
        "{selection}: {} verses, {} tokens, {} distinct",
        texts.len(),
        table.total(),
        table.len()
    );

    let book_cloud = if selection.chapter.is_all() {
        CloudInput::from_table(&table, options.cloud_words)
    } else {
        let book_table = count_words(&extract_text(book, None, None)?, stop_words);
        CloudInput::from_table(&book_table, options.cloud_words)
    };

    let verse_lengths = stats::verse_lengths(&texts);
    let book_words = stats::book_word_count(book);
    let corpus_share = stats::corpus_share(book_words, stats::corpus_word_count(corpus))?;

    Ok(SelectionReport {
        selection: selection.clone(),
        total_tokens: table.total(),
        distinct_tokens: table.len(),
        top_words: table.top_word_counts(options.top_n),
        cloud: CloudInput::from_table(&table, options.cloud_words).into_words(),
        book_cloud: book_cloud.into_words(),
        length_summary: stats::summarize(&verse_lengths),
        histogram: stats::histogram(&verse_lengths, options.histogram_bins),
        verse_lengths,
        chapter_totals: stats::chapter_word_totals(book),
        book_words,
        corpus_share,
        verses,
    })
}

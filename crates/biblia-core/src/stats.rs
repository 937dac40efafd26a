use biblia_types::{BookShare, HistogramBin, LengthSummary};

use crate::corpus::{Book, Corpus};
use crate::error::StatsError;

/// Whitespace-separated words in a raw verse, stop words included
pub fn word_count(verse: &str) -> usize {
    verse.split_whitespace().count()
}

/// Word count per verse, in input order
pub fn verse_lengths<S: AsRef<str>>(verses: &[S]) -> Vec<usize> {
    verses.iter().map(|v| word_count(v.as_ref())).collect()
}

/// Word count per chapter, in chapter order
pub fn chapter_word_totals(book: &Book) -> Vec<usize> {
    book.chapters()
        .iter()
        .map(|chapter| chapter.iter().map(|v| word_count(v)).sum())
        .collect()
}

pub fn book_word_count(book: &Book) -> usize {
    chapter_word_totals(book).into_iter().sum()
}

pub fn corpus_word_count(corpus: &Corpus) -> usize {
    corpus.word_count()
}

/// Percentage of the corpus taken by a book: `100 * book / total`
pub fn corpus_share(book_word_count: usize, total_corpus_word_count: usize) -> Result<f64, StatsError> {
    if total_corpus_word_count == 0 {
        return Err(StatsError::DivisionUndefined);
    }
    if book_word_count > total_corpus_word_count {
        return Err(StatsError::ShareExceedsTotal {
            book: book_word_count,
            total: total_corpus_word_count,
        });
    }

    Ok(100.0 * book_word_count as f64 / total_corpus_word_count as f64)
}

/// Share of every book, in corpus order
pub fn book_shares(corpus: &Corpus) -> Result<Vec<BookShare>, StatsError> {
    let total = corpus.word_count();

    corpus
        .books()
        .iter()
        .map(|book| {
            let words = book_word_count(book);
            Ok(BookShare {
                abbrev: book.abbrev().to_string(),
                words,
                percent: corpus_share(words, total)?,
            })
        })
        .collect()
}

pub fn summarize(lengths: &[usize]) -> Option<LengthSummary> {
    let min = *lengths.iter().min()?;
    let max = *lengths.iter().max()?;
    let sum: usize = lengths.iter().sum();

    Some(LengthSummary {
        count: lengths.len(),
        min,
        max,
        mean: sum as f64 / lengths.len() as f64,
    })
}

/// Equal-width integer bins spanning `min..=max`.
/// Fewer than `bins` come back when the range is narrower than `bins`.
pub fn histogram(values: &[usize], bins: usize) -> Vec<HistogramBin> {
    let (Some(&min), Some(&max)) = (values.iter().min(), values.iter().max()) else {
        return Vec::new();
    };
    if bins == 0 {
        return Vec::new();
    }

    let span = max - min + 1;
    let width = span.div_ceil(bins);
    let mut out: Vec<HistogramBin> = (0..span.div_ceil(width))
        .map(|i| {
            let lower = min + i * width;
            HistogramBin {
                lower,
                upper: (lower + width - 1).min(max),
                count: 0,
            }
        })
        .collect();

    for &v in values {
        out[(v - min) / width].count += 1;
    }

    out
}

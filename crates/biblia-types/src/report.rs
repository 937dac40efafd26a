use serde::{Deserialize, Serialize};

use crate::selection::Selection;

/// A verse with its 1-based position, for `*n* text` style display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseRef {
    pub chapter: usize,
    pub verse: usize,
    pub text: String,
}

/// Frequency bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Word-cloud entry. `weight` is relative to the most frequent word, in (0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloudWord {
    pub word: String,
    pub count: usize,
    pub weight: f64,
}

/// Histogram bucket covering `lower..=upper` words
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub lower: usize,
    pub upper: usize,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LengthSummary {
    pub count: usize,
    pub min: usize,
    pub max: usize,
    pub mean: f64,
}

/// One slice of the corpus proportion chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookShare {
    pub abbrev: String,
    pub words: usize,
    pub percent: f64,
}

/// Everything the renderer needs for one selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionReport {
    pub selection: Selection,
    pub verses: Vec<VerseRef>,
    /// Tokens left after stop-word removal
    pub total_tokens: usize,
    pub distinct_tokens: usize,
    pub top_words: Vec<WordCount>,
    pub cloud: Vec<CloudWord>,
    /// Cloud over the whole book, regardless of chapter/verse
    pub book_cloud: Vec<CloudWord>,
    pub verse_lengths: Vec<usize>,
    pub length_summary: Option<LengthSummary>,
    pub histogram: Vec<HistogramBin>,
    pub chapter_totals: Vec<usize>,
    pub book_words: usize,
    pub corpus_share: f64,
}

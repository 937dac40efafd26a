use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::Deserialize;

use crate::error::{LoadError, SelectionError};
use crate::stats;

/// Verses of one chapter, in order
pub type Chapter = Vec<String>;

/// A book of the corpus, keyed by its abbreviation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    abbrev: String,
    chapters: Vec<Chapter>,
}

impl Book {
    pub fn new(abbrev: impl Into<String>, chapters: Vec<Chapter>) -> Self {
        Self {
            abbrev: abbrev.into(),
            chapters,
        }
    }

    pub fn abbrev(&self) -> &str {
        &self.abbrev
    }

    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    pub fn chapter_count(&self) -> usize {
        self.chapters.len()
    }

    pub fn verse_count(&self) -> usize {
        self.chapters.iter().map(Vec::len).sum()
    }

    /// No verses at all
    pub fn is_empty(&self) -> bool {
        self.verse_count() == 0
    }

    /// Chapter by 1-based number
    pub fn chapter(&self, number: usize) -> Result<&Chapter, SelectionError> {
        number
            .checked_sub(1)
            .and_then(|idx| self.chapters.get(idx))
            .ok_or_else(|| SelectionError::ChapterOutOfRange {
                book: self.abbrev.clone(),
                chapter: number,
                available: self.chapters.len(),
            })
    }

    /// Verse by 1-based chapter and verse numbers
    pub fn verse(&self, chapter: usize, verse: usize) -> Result<&str, SelectionError> {
        let verses = self.chapter(chapter)?;
        verse
            .checked_sub(1)
            .and_then(|idx| verses.get(idx))
            .map(String::as_str)
            .ok_or_else(|| SelectionError::VerseOutOfRange {
                book: self.abbrev.clone(),
                chapter,
                verse,
                available: verses.len(),
            })
    }
}

// On-disk layout: `[{"abbrev": "gn", "chapters": [["verse", ...], ...]}, ...]`
#[derive(Debug, Deserialize)]
struct BookJson {
    abbrev: String,
    chapters: Vec<Vec<String>>,
}

/// The whole text collection. Immutable once loaded.
#[derive(Debug, Clone)]
pub struct Corpus {
    books: Vec<Book>,
    index: HashMap<String, usize>,
    word_count: usize,
}

impl Corpus {
    /// Build from books in display order. Abbreviations must be unique and non-empty,
    /// and the corpus must hold at least one word.
    pub fn from_books(books: Vec<Book>) -> Result<Self, LoadError> {
        if books.is_empty() {
            return Err(LoadError::InvalidFormat("corpus has no books".to_string()));
        }

        let mut index = HashMap::with_capacity(books.len());

        for (idx, book) in books.iter().enumerate() {
            if book.abbrev.trim().is_empty() {
                return Err(LoadError::InvalidFormat(format!(
                    "book #{} has an empty abbreviation",
                    idx + 1
                )));
            }
            if index.insert(book.abbrev.clone(), idx).is_some() {
                return Err(LoadError::InvalidFormat(format!(
                    "duplicate book abbreviation '{}'",
                    book.abbrev
                )));
            }
        }

        let word_count = books.iter().map(stats::book_word_count).sum();
        if word_count == 0 {
            return Err(LoadError::InvalidFormat("corpus has no words".to_string()));
        }

        Ok(Self {
            books,
            index,
            word_count,
        })
    }

    /// Parse the JSON corpus. A leading byte-order mark is ignored.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let json = json.strip_prefix('\u{feff}').unwrap_or(json);
        let data: Vec<BookJson> = serde_json::from_str(json)?;

        let books = data
            .into_iter()
            .map(|b| Book::new(b.abbrev, b.chapters))
            .collect();

        Self::from_books(books)
    }

    /// Read and parse the corpus file
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        if !path.exists() {
            return Err(LoadError::FileNotFound(path.display().to_string()));
        }

        tracing::info!("Loading corpus from file: {}", path.display());
        let json = std::fs::read_to_string(path)?;
        let corpus = Self::from_json(&json)?;
        tracing::info!(
            "Loaded {} books, {} verses, {} words",
            corpus.len(),
            corpus.verse_count(),
            corpus.word_count()
        );
        Ok(corpus)
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn verse_count(&self) -> usize {
        self.books.iter().map(Book::verse_count).sum()
    }

    /// Whitespace-separated words across every verse
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Book by abbreviation. Exact match first, then trimmed and lowercased.
    pub fn find_book(&self, abbrev: &str) -> Result<&Book, SelectionError> {
        self.index
            .get(abbrev)
            .or_else(|| self.index.get(abbrev.trim().to_lowercase().as_str()))
            .map(|&idx| &self.books[idx])
            .ok_or_else(|| SelectionError::BookNotFound(abbrev.to_string()))
    }
}

static SHARED: OnceLock<(PathBuf, Corpus)> = OnceLock::new();

/// Process-wide corpus, read from disk on the first call only
pub fn shared(path: &Path) -> Result<&'static Corpus, LoadError> {
    if let Some((loaded_from, corpus)) = SHARED.get() {
        if loaded_from != path {
            tracing::warn!(
                "Corpus already loaded from {}, ignoring {}",
                loaded_from.display(),
                path.display()
            );
        }
        return Ok(corpus);
    }

    let corpus = Corpus::load(path)?;
    let (_, corpus) = SHARED.get_or_init(|| (path.to_path_buf(), corpus));
    Ok(corpus)
}

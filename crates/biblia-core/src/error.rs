/// Corpus could not be loaded. Fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Corpus file not found: {0}")]
    FileNotFound(String),

    #[error("Invalid corpus format: {0}")]
    InvalidFormat(String),

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Selection does not resolve against the corpus. Recoverable, shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("Unknown book '{0}'")]
    BookNotFound(String),

    #[error("Chapter {chapter} out of range for '{book}' (1..={available})")]
    ChapterOutOfRange {
        book: String,
        chapter: usize,
        available: usize,
    },

    #[error("Verse {verse} out of range for '{book}' {chapter} (1..={available})")]
    VerseOutOfRange {
        book: String,
        chapter: usize,
        verse: usize,
        available: usize,
    },

    #[error("A verse was selected for '{0}' without a chapter")]
    VerseWithoutChapter(String),
}

/// Statistics over inconsistent counts. Internal fault, never user input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StatsError {
    #[error("Corpus share is undefined: total word count is zero")]
    DivisionUndefined,

    #[error("Book word count {book} exceeds corpus total {total}")]
    ShareExceedsTotal { book: usize, total: usize },
}

/// Anything that can abort a single selection request
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Stats(#[from] StatsError),
}

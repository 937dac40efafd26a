use crate::stopwords::StopWords;

/// Language-specific data for a corpus translation
pub trait Language: Send + Sync {
    /// ISO 639-1 code ("pt", ...)
    fn language_code(&self) -> &str;

    /// Base stop-word list for this language
    fn stop_words(&self) -> StopWords;

    /// Full book name for an abbreviation, if known
    fn book_name(&self, abbrev: &str) -> Option<&str>;

    /// Full book name, falling back to the abbreviation itself
    fn display_name(&self, abbrev: &str) -> String {
        self.book_name(abbrev)
            .map(str::to_string)
            .unwrap_or_else(|| abbrev.to_string())
    }
}

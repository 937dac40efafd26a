use std::collections::HashSet;
use std::path::Path;

use crate::preprocess::normalize_word;

/// Words excluded from frequency analysis. Stored in normalized (lowercase) form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// No filtering
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_list<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut stop_words = Self::empty();
        stop_words.extend(words);
        stop_words
    }

    /// Parse a list with one word per line. Blank lines and `#` comments are skipped.
    pub fn parse_list(content: &str) -> Self {
        Self::from_list(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    /// Load an external list (see [`StopWords::parse_list`])
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        let stop_words = Self::parse_list(&content);
        tracing::debug!(
            "Loaded {} stop words from {}",
            stop_words.len(),
            path.display()
        );
        Ok(stop_words)
    }

    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words
            .extend(words.into_iter().filter_map(|w| normalize_word(w.as_ref())));
    }

    pub fn remove(&mut self, word: &str) -> bool {
        normalize_word(word).is_some_and(|w| self.words.remove(&w))
    }

    /// Case-insensitive exact match
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word) || normalize_word(word).is_some_and(|w| self.words.contains(&w))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

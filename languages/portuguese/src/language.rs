use std::collections::HashMap;

use biblia_core::language::Language;
use biblia_core::stopwords::StopWords;

use crate::books::BOOK_NAMES;
use crate::stopwords::STOP_WORDS;

/// Portuguese (NVI) language data
pub struct PortugueseLanguage {
    book_names: HashMap<&'static str, &'static str>,
}

impl PortugueseLanguage {
    pub fn new() -> Self {
        let book_names: HashMap<_, _> = BOOK_NAMES.into_iter().collect();
        tracing::debug!("Portuguese language: {} book names", book_names.len());

        Self { book_names }
    }
}

impl Default for PortugueseLanguage {
    fn default() -> Self {
        Self::new()
    }
}

impl Language for PortugueseLanguage {
    fn language_code(&self) -> &str {
        "pt"
    }

    fn stop_words(&self) -> StopWords {
        StopWords::from_list(STOP_WORDS)
    }

    fn book_name(&self, abbrev: &str) -> Option<&str> {
        self.book_names.get(abbrev).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_every_book() {
        let pt = PortugueseLanguage::new();

        assert_eq!(pt.book_name("gn"), Some("Gênesis"));
        assert_eq!(pt.book_name("jó"), Some("Jó"));
        assert_eq!(pt.book_name("jo"), Some("João"));
        assert_eq!(pt.display_name("xyz"), "xyz");
        assert_eq!(pt.book_names.len(), 66);
    }

    #[test]
    fn stop_words_are_canonical() {
        let stop_words = PortugueseLanguage::new().stop_words();

        assert!(stop_words.contains("não"));
        assert!(stop_words.contains("À"));
        assert!(!stop_words.contains("deus"));
        assert_eq!(stop_words.len(), STOP_WORDS.len());
    }
}

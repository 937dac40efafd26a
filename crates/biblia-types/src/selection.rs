use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Sentinels accepted in place of an index to mean "every chapter/verse"
const ALL_SENTINELS: [&str; 3] = ["all", "todos", "*"];

/// One level of a selection: everything, or a single 1-based position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pick {
    #[default]
    All,
    Index(usize),
}

impl Pick {
    /// 1-based index, `None` for `All`
    pub fn index(&self) -> Option<usize> {
        match self {
            Pick::All => None,
            Pick::Index(n) => Some(*n),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Pick::All)
    }
}

impl From<Option<usize>> for Pick {
    fn from(value: Option<usize>) -> Self {
        value.map_or(Pick::All, Pick::Index)
    }
}

impl fmt::Display for Pick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pick::All => f.write_str("all"),
            Pick::Index(n) => write!(f, "{n}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PickParseError {
    #[error("empty chapter/verse value")]
    Empty,

    #[error("chapter and verse numbers start at 1")]
    Zero,

    #[error("expected a positive number or 'all', got '{0}'")]
    Invalid(String),
}

impl FromStr for Pick {
    type Err = PickParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(PickParseError::Empty);
        }

        let lowered = s.to_lowercase();
        if ALL_SENTINELS.contains(&lowered.as_str()) {
            return Ok(Pick::All);
        }

        match lowered.parse::<usize>() {
            Ok(0) => Err(PickParseError::Zero),
            Ok(n) => Ok(Pick::Index(n)),
            Err(_) => Err(PickParseError::Invalid(s.to_string())),
        }
    }
}

/// A (book, chapter?, verse?) query. Not stored anywhere, recomputed per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub book: String,
    #[serde(default)]
    pub chapter: Pick,
    #[serde(default)]
    pub verse: Pick,
}

impl Selection {
    /// Whole book
    pub fn book(abbrev: impl Into<String>) -> Self {
        Self {
            book: abbrev.into(),
            chapter: Pick::All,
            verse: Pick::All,
        }
    }

    /// Every verse of one chapter
    pub fn chapter(abbrev: impl Into<String>, chapter: usize) -> Self {
        Self::book(abbrev).with_chapter(Pick::Index(chapter))
    }

    /// A single verse
    pub fn verse(abbrev: impl Into<String>, chapter: usize, verse: usize) -> Self {
        Self::chapter(abbrev, chapter).with_verse(Pick::Index(verse))
    }

    pub fn with_chapter(mut self, chapter: Pick) -> Self {
        self.chapter = chapter;
        self
    }

    pub fn with_verse(mut self, verse: Pick) -> Self {
        self.verse = verse;
        self
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.chapter, self.verse) {
            (Pick::All, Pick::All) => write!(f, "{}", self.book),
            (Pick::Index(c), Pick::All) => write!(f, "{} {c}", self.book),
            (chapter, verse) => write!(f, "{} {chapter}:{verse}", self.book),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numbers_and_sentinels() {
        assert_eq!("3".parse::<Pick>(), Ok(Pick::Index(3)));
        assert_eq!(" 12 ".parse::<Pick>(), Ok(Pick::Index(12)));
        assert_eq!("all".parse::<Pick>(), Ok(Pick::All));
        assert_eq!("Todos".parse::<Pick>(), Ok(Pick::All));
        assert_eq!("*".parse::<Pick>(), Ok(Pick::All));
    }

    #[test]
    fn rejects_zero_and_garbage() {
        assert_eq!("0".parse::<Pick>(), Err(PickParseError::Zero));
        assert_eq!("".parse::<Pick>(), Err(PickParseError::Empty));
        assert_eq!(
            "-1".parse::<Pick>(),
            Err(PickParseError::Invalid("-1".to_string()))
        );
    }

    #[test]
    fn displays_like_a_reference() {
        assert_eq!(Selection::book("gn").to_string(), "gn");
        assert_eq!(Selection::chapter("gn", 1).to_string(), "gn 1");
        assert_eq!(Selection::verse("jo", 3, 16).to_string(), "jo 3:16");
        assert_eq!(
            Selection::book("gn").with_verse(Pick::Index(2)).to_string(),
            "gn all:2"
        );
    }

    #[test]
    fn deserializes_with_missing_picks() {
        let sel: Selection = serde_json::from_str(r#"{"book":"ex"}"#).unwrap();
        assert_eq!(sel, Selection::book("ex"));

        let sel: Selection =
            serde_json::from_str(r#"{"book":"ex","chapter":{"index":20}}"#).unwrap();
        assert_eq!(sel, Selection::chapter("ex", 20));
    }
}

pub mod books;
pub mod language;
pub mod stopwords;

pub use books::BOOK_NAMES;
pub use language::PortugueseLanguage;
pub use stopwords::STOP_WORDS;

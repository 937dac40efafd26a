pub mod cloud;
pub mod corpus;
pub mod error;
pub mod frequency;
pub mod language;
pub mod pipeline;
pub mod preprocess;
pub mod stats;
pub mod stopwords;

pub use corpus::{Book, Chapter, Corpus};
pub use error::{LoadError, SelectionError, StatsError};
pub use frequency::{FrequencyTable, frequency_table};
pub use language::Language;
pub use pipeline::{AnalysisOptions, analyze, extract_text, extract_verses, tokenize};
pub use stats::corpus_share;
pub use stopwords::StopWords;

#[cfg(test)]
mod tests {
    pub(crate) mod fixture;
    mod pipeline_tests;
    mod property_tests;
}

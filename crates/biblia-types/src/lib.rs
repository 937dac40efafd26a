pub mod report;
pub mod selection;

pub use report::{
    BookShare, CloudWord, HistogramBin, LengthSummary, SelectionReport, VerseRef, WordCount,
};
pub use selection::{Pick, PickParseError, Selection};

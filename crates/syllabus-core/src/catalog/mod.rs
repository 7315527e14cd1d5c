//! Course catalog field extraction.

pub mod extractor;
pub mod labels;
mod parser;

pub use extractor::{scan, Disposition, Scan, ScanState, ScanStats, Step};
pub use labels::{match_label, Field, Label, LabelMatch, LABELS};
pub use parser::{ExtractionResult, LabelParser};

/// Trait for catalog parsing.
///
/// Parsing is best-effort and infallible: unrecognized lines are dropped and
/// repeated labels overwrite earlier values.
pub trait CatalogParser {
    /// Parse course records from catalog text.
    fn parse(&self, text: &str) -> ExtractionResult;
}

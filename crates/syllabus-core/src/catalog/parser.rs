//! Label-table catalog parser.

use std::time::Instant;

use tracing::{debug, info, warn};

use crate::models::config::ExtractionConfig;
use crate::models::course::CourseRecord;

use super::extractor::{scan, ScanStats};
use super::CatalogParser;

/// Result of catalog extraction.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Extracted records in encounter order.
    pub records: Vec<CourseRecord>,
    /// Line counts from the scan.
    pub stats: ScanStats,
    /// Extraction warnings.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

impl ExtractionResult {
    /// Records that pass the emission gate.
    pub fn coded_records(&self) -> impl Iterator<Item = &CourseRecord> {
        self.records.iter().filter(|r| r.has_code())
    }
}

/// Parser driven by the fixed label table.
pub struct LabelParser {
    /// Whether to warn about labels repeated within one block.
    warn_on_duplicates: bool,
}

impl LabelParser {
    /// Create a new parser with default settings.
    pub fn new() -> Self {
        Self {
            warn_on_duplicates: true,
        }
    }

    /// Build a parser from extraction settings.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self::new().with_duplicate_warnings(config.warn_on_duplicate_labels)
    }

    /// Set duplicate-label warnings.
    pub fn with_duplicate_warnings(mut self, warn: bool) -> Self {
        self.warn_on_duplicates = warn;
        self
    }
}

impl Default for LabelParser {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogParser for LabelParser {
    fn parse(&self, text: &str) -> ExtractionResult {
        let start = Instant::now();
        let mut warnings = Vec::new();

        info!("Parsing catalog from {} characters of text", text.len());

        let scan = scan(text.lines());

        for (position, record) in scan.records.iter().enumerate() {
            if !record.has_code() {
                warnings.push(format!("Course block {} has an empty code", position + 1));
            }
        }

        if self.warn_on_duplicates {
            for (index, field) in &scan.repeated {
                let code = scan
                    .records
                    .get(*index)
                    .map(|r| r.code.as_str())
                    .unwrap_or_default();
                warnings.push(format!(
                    "Course {} repeats the {} label; last value kept",
                    code, field
                ));
            }
        }

        for warning in &warnings {
            warn!("{}", warning);
        }

        debug!(
            "Scanned {} lines: {} labels, {} continuations, {} discarded, {} blank",
            scan.stats.lines,
            scan.stats.labels,
            scan.stats.continuations,
            scan.stats.discarded,
            scan.stats.blank
        );

        ExtractionResult {
            records: scan.records,
            stats: scan.stats,
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}

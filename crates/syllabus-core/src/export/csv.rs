//! CSV export.

use std::io::Write;

use crate::models::course::{CourseRecord, COLUMNS};

use super::{RecordExporter, Result};

/// Writes one row per course with the fixed five-column header.
///
/// Quoting of delimiters, quotes and newlines follows the `csv` crate's
/// defaults, which quote only when needed.
#[derive(Debug, Clone)]
pub struct CsvExporter {
    delimiter: u8,
    include_header: bool,
    skip_empty_codes: bool,
}

impl CsvExporter {
    /// Comma-delimited, with header, skipping records without a code.
    pub fn new() -> Self {
        Self {
            delimiter: b',',
            include_header: true,
            skip_empty_codes: true,
        }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    pub fn with_skip_empty_codes(mut self, skip: bool) -> Self {
        self.skip_empty_codes = skip;
        self
    }
}

impl Default for CsvExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordExporter for CsvExporter {
    fn write_records(&self, records: &[CourseRecord], writer: &mut dyn Write) -> Result<usize> {
        let mut wtr = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(false)
            .from_writer(writer);

        if self.include_header {
            wtr.write_record(COLUMNS)?;
        }

        let mut written = 0;
        for record in records {
            if self.skip_empty_codes && !record.has_code() {
                continue;
            }
            wtr.write_record(record.as_row())?;
            written += 1;
        }

        wtr.flush()?;
        Ok(written)
    }
}

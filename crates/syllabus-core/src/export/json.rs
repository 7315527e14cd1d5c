//! JSON export.

use std::io::Write;

use crate::models::course::CourseRecord;

use super::{RecordExporter, Result};

/// Writes records as a JSON array keyed by column name.
#[derive(Debug, Clone)]
pub struct JsonExporter {
    skip_empty_codes: bool,
}

impl JsonExporter {
    pub fn new() -> Self {
        Self {
            skip_empty_codes: true,
        }
    }

    pub fn with_skip_empty_codes(mut self, skip: bool) -> Self {
        self.skip_empty_codes = skip;
        self
    }
}

impl Default for JsonExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordExporter for JsonExporter {
    fn write_records(&self, records: &[CourseRecord], writer: &mut dyn Write) -> Result<usize> {
        let selected: Vec<&CourseRecord> = records
            .iter()
            .filter(|r| !self.skip_empty_codes || r.has_code())
            .collect();

        serde_json::to_writer_pretty(&mut *writer, &selected)?;
        writer.write_all(b"\n")?;

        Ok(selected.len())
    }
}

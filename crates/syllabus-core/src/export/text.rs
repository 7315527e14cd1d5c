//! Plain text listing.

use std::io::Write;

use crate::models::course::CourseRecord;

use super::{RecordExporter, Result};

/// Writes a readable block per course.
#[derive(Debug, Clone)]
pub struct TextExporter {
    skip_empty_codes: bool,
}

impl TextExporter {
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

impl Default for TextExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordExporter for TextExporter {
    fn write_records(&self, records: &[CourseRecord], writer: &mut dyn Write) -> Result<usize> {
        let mut written = 0;

        for record in records {
            if self.skip_empty_codes && !record.has_code() {
                continue;
            }
            if written > 0 {
                writeln!(writer)?;
            }

            writeln!(writer, "Course: {}", record.code)?;
            if !record.title.is_empty() {
                writeln!(writer, "  Title:        {}", record.title)?;
            }
            if !record.credit_hour.is_empty() {
                writeln!(writer, "  Credit hour:  {}", record.credit_hour)?;
            }
            if !record.prerequisite.is_empty() {
                writeln!(writer, "  Prerequisite: {}", record.prerequisite)?;
            }
            if !record.content.is_empty() {
                writeln!(writer, "  Content:      {}", record.content)?;
            }
            written += 1;
        }

        Ok(written)
    }
}

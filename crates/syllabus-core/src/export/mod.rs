//! Record export to tabular and document formats.

mod csv;
mod json;
mod text;

pub use self::csv::CsvExporter;
pub use self::json::JsonExporter;
pub use self::text::TextExporter;

use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::ExportError;
use crate::models::config::SyllabusConfig;
use crate::models::course::CourseRecord;

/// Result type for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;

/// Supported output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Comma-separated rows with a header.
    #[default]
    Csv,
    /// JSON array of objects keyed by column name.
    Json,
    /// Plain text listing.
    Text,
}

impl ExportFormat {
    /// Conventional file extension.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Text => "txt",
        }
    }
}

/// Trait for record exporters.
pub trait RecordExporter {
    /// Write records and return how many were written.
    fn write_records(&self, records: &[CourseRecord], writer: &mut dyn Write) -> Result<usize>;

    /// Render records into a string.
    fn render(&self, records: &[CourseRecord]) -> Result<String> {
        let mut buf = Vec::new();
        self.write_records(records, &mut buf)?;
        String::from_utf8(buf).map_err(|e| ExportError::Encoding(e.to_string()))
    }
}

/// Build the exporter for a format using the configured output settings.
pub fn exporter_for(format: ExportFormat, config: &SyllabusConfig) -> Box<dyn RecordExporter> {
    let skip_empty = config.extraction.skip_empty_codes;
    match format {
        ExportFormat::Csv => Box::new(
            CsvExporter::new()
                .with_delimiter(config.output.delimiter_byte())
                .with_header(config.output.include_header)
                .with_skip_empty_codes(skip_empty),
        ),
        ExportFormat::Json => Box::new(JsonExporter::new().with_skip_empty_codes(skip_empty)),
        ExportFormat::Text => Box::new(TextExporter::new().with_skip_empty_codes(skip_empty)),
    }
}

/// Write records to `path` so that either every row lands or none does.
///
/// Output goes to a temporary file beside the destination, which is renamed
/// over it only after the exporter finished.
pub fn write_atomic(
    path: &Path,
    exporter: &dyn RecordExporter,
    records: &[CourseRecord],
) -> Result<usize> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut tmp = NamedTempFile::new_in(dir)?;
    let written = {
        let mut out = BufWriter::new(tmp.as_file_mut());
        let written = exporter.write_records(records, &mut out)?;
        out.flush()?;
        written
    };
    tmp.persist(path)?;

    debug!("Wrote {} records to {}", written, path.display());
    Ok(written)
}

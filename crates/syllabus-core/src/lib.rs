//! Core library for course catalog extraction.
//!
//! This crate provides:
//! - A label table and line-by-line record extractor for course catalogs
//! - The five-field course record model
//! - CSV, JSON and text exporters with atomic file output
//! - Configuration and the bundled catalog text

pub mod catalog;
pub mod error;
pub mod export;
pub mod models;

pub use catalog::{CatalogParser, ExtractionResult, LabelParser, ScanStats};
pub use error::{ExportError, Result, SyllabusError};
pub use export::{exporter_for, write_atomic, ExportFormat, RecordExporter};
pub use models::config::SyllabusConfig;
pub use models::course::{CourseRecord, COLUMNS};

//! Configuration structures for catalog conversion.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::SyllabusError;
use crate::export::ExportFormat;

/// Main configuration for the syllabus pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SyllabusConfig {
    /// Record extraction configuration.
    pub extraction: ExtractionConfig,

    /// Output configuration.
    pub output: OutputConfig,
}

/// Record extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Drop records whose code is empty when exporting.
    pub skip_empty_codes: bool,

    /// Report labels repeated inside one course block.
    pub warn_on_duplicate_labels: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            skip_empty_codes: true,
            warn_on_duplicate_labels: true,
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Destination file.
    pub path: PathBuf,

    /// Output format.
    pub format: ExportFormat,

    /// Field delimiter for CSV output.
    pub delimiter: char,

    /// Write the header row for CSV output.
    pub include_header: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("courses.csv"),
            format: ExportFormat::Csv,
            delimiter: ',',
            include_header: true,
        }
    }
}

impl OutputConfig {
    /// Delimiter as a single byte. Loaded configs are validated, so the comma
    /// fallback only applies to values built in code.
    pub fn delimiter_byte(&self) -> u8 {
        if self.delimiter.is_ascii() {
            self.delimiter as u8
        } else {
            b','
        }
    }

    /// Reject delimiters the CSV writer cannot round-trip.
    pub fn validate(&self) -> crate::Result<()> {
        match self.delimiter {
            '"' | '\n' | '\r' => Err(SyllabusError::Config(format!(
                "output.delimiter {:?} would break CSV quoting",
                self.delimiter
            ))),
            c if !c.is_ascii() => Err(SyllabusError::Config(format!(
                "output.delimiter {:?} must be a single ASCII character",
                c
            ))),
            _ => Ok(()),
        }
    }
}

impl SyllabusConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })
    }

    /// Per-user configuration file location.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("syllabus")
            .join("config.json")
    }

    /// Load from `path` when given, else from the per-user file if it exists,
    /// else use defaults.
    pub fn load_or_default(path: Option<&Path>) -> crate::Result<Self> {
        Self::load_with_fallback(path, &Self::default_path())
    }

    fn load_with_fallback(path: Option<&Path>, fallback: &Path) -> crate::Result<Self> {
        match path {
            Some(path) => Self::load_checked(path),
            None if fallback.exists() => {
                debug!("Loading configuration from {}", fallback.display());
                Self::load_checked(fallback)
            }
            None => Ok(Self::default()),
        }
    }

    fn load_checked(path: &Path) -> crate::Result<Self> {
        let config = Self::from_file(path)
            .map_err(|e| SyllabusError::Config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Check settings that serde alone cannot.
    pub fn validate(&self) -> crate::Result<()> {
        self.output.validate()
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }
}

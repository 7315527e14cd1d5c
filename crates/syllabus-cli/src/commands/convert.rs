//! Convert command - extract course records from a single catalog.

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use regex::Regex;
use tracing::{debug, info};

use syllabus_core::catalog::{CatalogParser, LabelParser};
use syllabus_core::export::{exporter_for, write_atomic, ExportFormat};
use syllabus_core::models::config::SyllabusConfig;
use syllabus_core::models::course::CourseRecord;
use syllabus_core::models::embedded::read_catalog;
use syllabus_core::ScanStats;

/// Arguments for the convert command.
#[derive(Args, Default)]
pub struct ConvertArgs {
    /// Catalog text file (default: built-in catalog)
    input: Option<PathBuf>,

    /// Output file (default: from config, courses.csv)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Keep only courses whose code matches this regex
    #[arg(long)]
    filter: Option<String>,

    /// Print to stdout instead of writing a file
    #[arg(long)]
    stdout: bool,

    /// Show scan statistics
    #[arg(long)]
    stats: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// CSV output
    Csv,
    /// JSON output
    Json,
    /// Plain text listing
    Text,
}

impl From<OutputFormat> for ExportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Csv => ExportFormat::Csv,
            OutputFormat::Json => ExportFormat::Json,
            OutputFormat::Text => ExportFormat::Text,
        }
    }
}

pub fn run(args: ConvertArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = SyllabusConfig::load_or_default(config_path.map(Path::new))?;
    let format = args
        .format
        .map(ExportFormat::from)
        .unwrap_or(config.output.format);

    match &args.input {
        Some(path) => info!("Reading catalog from {}", path.display()),
        None => info!("Using built-in catalog"),
    }
    let text = read_catalog(args.input.as_deref())?;

    let parser = LabelParser::from_config(&config.extraction);
    let result = parser.parse(&text);

    let records = match &args.filter {
        Some(pattern) => filter_records(result.records, pattern)?,
        None => result.records,
    };

    let exporter = exporter_for(format, &config);

    if args.stdout {
        print!("{}", exporter.render(&records)?);
    } else {
        let output_path = resolve_output_path(args.output, &config, format);
        let written = write_atomic(&output_path, exporter.as_ref(), &records)?;
        debug!("{} of {} records passed the code gate", written, records.len());

        println!(
            "{} Successfully converted {} courses to '{}'.",
            style("✓").green(),
            records.len(),
            output_path.display()
        );
    }

    if args.stats {
        print_stats(&result.stats, &result.warnings, result.processing_time_ms);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

/// Keep records whose code matches `pattern`, preserving order.
pub fn filter_records(
    records: Vec<CourseRecord>,
    pattern: &str,
) -> anyhow::Result<Vec<CourseRecord>> {
    let re = Regex::new(pattern)
        .map_err(|e| anyhow::anyhow!("Invalid filter pattern '{}': {}", pattern, e))?;

    let before = records.len();
    let kept: Vec<CourseRecord> = records.into_iter().filter(|r| re.is_match(&r.code)).collect();
    debug!("Filter '{}' kept {} of {} records", pattern, kept.len(), before);

    Ok(kept)
}

/// Explicit path wins; otherwise the configured path, re-suffixed when the
/// format differs from the configured one.
pub fn resolve_output_path(
    explicit: Option<PathBuf>,
    config: &SyllabusConfig,
    format: ExportFormat,
) -> PathBuf {
    explicit.unwrap_or_else(|| {
        let path = &config.output.path;
        if format == config.output.format {
            path.clone()
        } else {
            path.with_extension(format.extension())
        }
    })
}

fn print_stats(stats: &ScanStats, warnings: &[String], elapsed_ms: u64) {
    eprintln!();
    eprintln!(
        "{} Scanned {} lines in {} ms",
        style("ℹ").blue(),
        stats.lines,
        elapsed_ms
    );
    eprintln!("   labels:        {}", stats.labels);
    eprintln!("   continuations: {}", stats.continuations);
    eprintln!("   discarded:     {}", stats.discarded);
    eprintln!("   blank:         {}", stats.blank);

    if !warnings.is_empty() {
        eprintln!();
        eprintln!("{}", style("Warnings:").yellow());
        for warning in warnings {
            eprintln!("  - {}", warning);
        }
    }
}

//! Batch command - merge several catalog files into one table.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, warn};

use syllabus_core::catalog::{CatalogParser, LabelParser};
use syllabus_core::export::{exporter_for, write_atomic, ExportFormat};
use syllabus_core::models::config::SyllabusConfig;
use syllabus_core::models::course::CourseRecord;

use super::convert::{resolve_output_path, OutputFormat};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Glob pattern matching catalog text files
    #[arg(required = true)]
    input: String,

    /// Output file (default: from config, courses.csv)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

fn is_catalog_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("txt"))
        .unwrap_or(false)
}

/// Result of processing a single file.
struct FileResult {
    path: PathBuf,
    records: usize,
    error: Option<String>,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = SyllabusConfig::load_or_default(config_path.map(Path::new))?;
    let format = args
        .format
        .map(ExportFormat::from)
        .unwrap_or(config.output.format);

    let mut files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file() && is_catalog_file(p))
        .collect();
    files.sort();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} catalog files to process",
        style("ℹ").blue(),
        files.len()
    );

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let parser = LabelParser::from_config(&config.extraction);
    let mut records: Vec<CourseRecord> = Vec::new();
    let mut results = Vec::with_capacity(files.len());

    for path in files {
        match fs::read_to_string(&path) {
            Ok(text) => {
                let result = parser.parse(&text);
                debug!("{}: {} records", path.display(), result.records.len());
                results.push(FileResult {
                    path,
                    records: result.records.len(),
                    error: None,
                });
                records.extend(result.records);
            }
            Err(e) if args.continue_on_error => {
                warn!("Failed to read {}: {}", path.display(), e);
                results.push(FileResult {
                    path,
                    records: 0,
                    error: Some(e.to_string()),
                });
            }
            Err(e) => {
                error!("Failed to read {}: {}", path.display(), e);
                pb.abandon();
                anyhow::bail!("Processing failed: {}", e);
            }
        }

        pb.inc(1);
    }

    pb.finish_and_clear();

    let output_path = resolve_output_path(args.output, &config, format);
    let exporter = exporter_for(format, &config);
    write_atomic(&output_path, exporter.as_ref(), &records)?;

    let failed: Vec<&FileResult> = results.iter().filter(|r| r.error.is_some()).collect();

    println!(
        "{} Successfully converted {} courses to '{}'.",
        style("✓").green(),
        records.len(),
        output_path.display()
    );
    println!(
        "   {} files in {:?}: {} successful, {} failed",
        results.len(),
        start.elapsed(),
        style(results.len() - failed.len()).green(),
        style(failed.len()).red()
    );

    for result in results.iter().filter(|r| r.error.is_none()) {
        debug!("  {}: {} courses", result.path.display(), result.records);
    }

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for result in &failed {
            println!(
                "  - {}: {}",
                result.path.display(),
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

//! CLI application for converting course catalogs into tables.

mod commands;

use clap::{Parser, Subcommand};
use tracing::{error, Level};
use tracing_subscriber::FmtSubscriber;

use syllabus_core::ExportError;

use commands::{batch, config, convert};

/// Course catalog converter - Turn labeled course descriptions into CSV
#[derive(Parser)]
#[command(name = "syllabus")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a catalog (default: built-in) into a table
    Convert(convert::ConvertArgs),

    /// Merge several catalog files into one table
    Batch(batch::BatchArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let config_path = cli.config.as_deref();
    let result = match cli.command {
        Some(Commands::Convert(args)) => convert::run(args, config_path),
        Some(Commands::Batch(args)) => batch::run(args, config_path),
        Some(Commands::Config(args)) => config::run(args, config_path),
        None => convert::run(convert::ConvertArgs::default(), config_path),
    };

    // Output failures get one generic message; details go to the log.
    if let Err(err) = &result {
        if let Some(export_err) = err.downcast_ref::<ExportError>() {
            error!("{}", export_err);
            eprintln!("Error writing to file.");
            std::process::exit(1);
        }
    }

    result
}

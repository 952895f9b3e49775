//! Command-line interface for the harvester.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::CSV_OUTPUT_FILE;
use crate::error::{HarvesterError, Result};
use crate::harvester::{extract_file, run_harvest};
use crate::output::write_csv;

/// eCFR entity list harvester - Download Title 15 Part 744 Supplement No. 4 and extract it to CSV.
#[derive(Parser)]
#[command(name = "ecfr-harvester")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Defaults to a full harvest when no subcommand is given.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch the latest supplement XML and extract the entity table to CSV.
    Harvest {
        /// Revision date in YYYY-MM-DD format (default: latest published)
        #[arg(short, long)]
        date: Option<String>,

        /// Output directory for the XML and CSV files (default: current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Re-extract the entity table from an already-saved XML file, no network.
    Extract {
        /// Path to a previously saved supplement XML file
        input: PathBuf,

        /// Output directory for the CSV file (default: current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Harvest {
        date: None,
        output: None,
    }) {
        Commands::Harvest { date, output } => {
            harvest_command(date.as_deref(), output.as_deref())
        }
        Commands::Extract { input, output } => extract_command(&input, output.as_deref()),
    }
}

/// Validate that an output directory exists before doing any work.
fn check_output_dir(output: Option<&Path>) -> Result<PathBuf> {
    let Some(output_dir) = output else {
        return Ok(PathBuf::from("."));
    };
    if !output_dir.exists() {
        return Err(HarvesterError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Output directory does not exist: {}", output_dir.display()),
        )));
    }
    if !output_dir.is_dir() {
        return Err(HarvesterError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("Output path is not a directory: {}", output_dir.display()),
        )));
    }
    Ok(output_dir.to_path_buf())
}

/// Execute the harvest command.
fn harvest_command(date: Option<&str>, output: Option<&Path>) -> Result<()> {
    let output_dir = check_output_dir(output)?;

    println!(
        "{} Title 15 Part 744, {}",
        style("Harvesting").bold(),
        style("Supplement No. 4").cyan()
    );
    println!();

    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message("Downloading...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let outcome = match run_harvest(date, &output_dir) {
        Ok(outcome) => outcome,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.finish_and_clear();

    println!("  Revision date: {}", style(&outcome.revision_date).green());
    println!("  Records: {}", outcome.record_count);
    println!();
    println!(
        "{} {}",
        style("Saved XML to:").green().bold(),
        outcome.xml_path.display()
    );
    println!(
        "{} {}",
        style("Saved CSV to:").green().bold(),
        outcome.csv_path.display()
    );

    Ok(())
}

/// Execute the extract command.
fn extract_command(input: &Path, output: Option<&Path>) -> Result<()> {
    let output_dir = check_output_dir(output)?;

    println!(
        "{} {}",
        style("Extracting").bold(),
        style(input.display()).cyan()
    );

    let records = extract_file(input)?;
    let csv_path = write_csv(&records, &output_dir.join(CSV_OUTPUT_FILE))?;

    println!("  Records: {}", records.len());
    println!(
        "{} {}",
        style("Saved CSV to:").green().bold(),
        csv_path.display()
    );

    Ok(())
}

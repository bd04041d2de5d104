//! Command-line interface for the chunker.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::chunker::{chunk_law_files, ChunkReport};
use crate::chunking::{CoarseGrained, FineGrained};
use crate::config::default_output_name;
use crate::error::{ChunkerError, Result};
use crate::writer::save_chunks;

/// Chunking granularity selected per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Granularity {
    /// Paragraph and sub-paragraph splitting with contextual expansion.
    Fine,

    /// Paragraph-level splitting only.
    Coarse,
}

impl Granularity {
    /// Label used in output file names.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fine => "fine",
            Self::Coarse => "coarse",
        }
    }
}

/// Labor-law chunker - split statutory articles into citable passages.
#[derive(Parser)]
#[command(name = "twlabor-chunker")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Chunk law data files into an indexable chunk file.
    Chunk {
        /// Law data JSON files (scraper output)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Chunking granularity
        #[arg(short, long, value_enum, default_value_t = Granularity::Fine)]
        granularity: Granularity,

        /// Output file (default: tier_1_{granularity}.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Chunk {
            files,
            granularity,
            output,
        } => chunk_command(&files, granularity, output.as_deref()),
    }
}

/// Execute the chunk command.
fn chunk_command(
    files: &[PathBuf],
    granularity: Granularity,
    output: Option<&Path>,
) -> Result<()> {
    // Validate inputs before doing any work
    for file in files {
        if !file.is_file() {
            return Err(ChunkerError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Law data file does not exist: {}", file.display()),
            )));
        }
    }

    let output_path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(default_output_name(granularity.as_str())));

    println!(
        "{} {} file(s) at {} granularity",
        style("Chunking").bold(),
        style(files.len()).cyan(),
        style(granularity.as_str()).green()
    );
    println!();

    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message("Segmenting articles...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    // The hierarchy shape differs per policy, so each branch carries
    // its own chunk type through to serialization
    let (chunk_count, warnings) = match granularity {
        Granularity::Fine => {
            let report = chunk_law_files(files, FineGrained);
            finish_run(&pb, report, &output_path)?
        }
        Granularity::Coarse => {
            let report = chunk_law_files(files, CoarseGrained);
            finish_run(&pb, report, &output_path)?
        }
    };

    println!("  Chunks: {}", style(chunk_count).green());
    if !warnings.is_empty() {
        println!("  Warnings: {}", style(warnings.len()).yellow().bold());
        for warning in &warnings {
            println!("    {}", style(warning).yellow());
        }
    }
    println!();
    println!(
        "{} {}",
        style("Saved to:").green().bold(),
        output_path.display()
    );

    Ok(())
}

/// Save a finished report and clear the spinner.
fn finish_run<H: serde::Serialize>(
    pb: &ProgressBar,
    report: Result<ChunkReport<H>>,
    output_path: &Path,
) -> Result<(usize, Vec<String>)> {
    let report = match report {
        Ok(report) => report,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.set_message("Saving chunks...");
    if let Err(e) = save_chunks(&report.chunks, output_path) {
        pb.finish_and_clear();
        return Err(e);
    }

    pb.finish_and_clear();
    Ok((report.chunks.len(), report.warnings))
}

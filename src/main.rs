//! texdds CLI - drag-and-drop converter between TEX and DDS textures.
//!
//! Every path given on the command line is converted next to itself:
//! `.tex` files become `.dds` files and `.dds` files become `.tex` files.

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use texdds::prelude::*;

/// texdds - convert TEX textures to DDS and back
#[derive(Parser)]
#[command(name = "texdds")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// TEX or DDS files to convert
    paths: Vec<PathBuf>,

    /// Exit without waiting for Enter
    #[arg(long, env = "TEXDDS_NO_PAUSE")]
    no_pause: bool,

    /// Log conversion details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    if cli.paths.is_empty() {
        println!("Please drag and drop .tex or .dds files onto the executable.");
        wait_for_enter(cli.no_pause)?;
        return Ok(());
    }

    let pb = ProgressBar::new(cli.paths.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len}")?
            .progress_chars("#>-"),
    );

    let summary = convert_batch(&cli.paths, |path, result| {
        let name = display_name(path);
        match result {
            Ok(Outcome::Converted { output, .. }) => {
                pb.println(format!("Converted {} -> {}", name, output.display()));
            }
            Ok(Outcome::Skipped) => {
                pb.println(format!(
                    "Skipping {}: unsupported file format, use .tex or .dds files",
                    name
                ));
            }
            Err(e) => {
                pb.println(format!("Error processing {}: {}", name, e));
            }
        }
        pb.inc(1);
    });

    pb.finish_and_clear();

    println!("\nConversion complete!");
    println!("Successfully converted: {} file(s)", summary.succeeded);
    if summary.failed > 0 {
        println!("Failed to convert: {} file(s)", summary.failed);
    }

    wait_for_enter(cli.no_pause)?;

    if !summary.is_clean() {
        std::process::exit(1);
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose, rust_log.as_deref()))
        .with_writer(io::stderr)
        .init();
}

/// Filter from `RUST_LOG` directives; `verbose` only picks the level used when none are given.
fn log_filter(verbose: bool, directives: Option<&str>) -> EnvFilter {
    let default_level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    EnvFilter::builder()
        .with_default_directive(default_level.into())
        .parse_lossy(directives.unwrap_or_default())
}

/// Keep a console window opened by drag-and-drop visible until Enter is pressed.
///
/// Skipped when stdin is not a terminal so scripted runs never block.
fn wait_for_enter(no_pause: bool) -> Result<()> {
    if no_pause || !io::stdin().is_terminal() {
        return Ok(());
    }

    print!("\nPress Enter to exit...");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    Ok(())
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

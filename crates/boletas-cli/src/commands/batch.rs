//! Batch command - extract many notices into one spreadsheet.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::{glob, Pattern};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};

use boletas_core::export::{to_delimited, to_xlsx};
use boletas_core::models::record::Field;
use boletas_core::settlement::LayoutFamily;
use boletas_core::{BatchProcessor, PdfTextSource};

use super::load_config;

/// File name pattern used when the input is a directory.
const DIRECTORY_PATTERN: &str = "print-BOL *.pdf";

/// Output used when neither `--csv` nor `--xlsx` is given.
const DEFAULT_CSV: &str = "boletas.csv";

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Glob pattern, or a directory holding "print-BOL *.pdf" files
    #[arg(required = true)]
    input: String,

    /// Write a delimited text file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write an XLSX workbook
    #[arg(long)]
    xlsx: Option<PathBuf>,

    /// Document layout (overrides config)
    #[arg(long)]
    layout: Option<LayoutFamily>,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let mut config = load_config(config_path)?;
    if let Some(layout) = args.layout {
        config.extraction.layout = layout;
    }

    let files = collect_inputs(&args.input)?;
    if files.is_empty() {
        anyhow::bail!("No matching files found for: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("=>-"),
    );

    let source = PdfTextSource::from_config(&config.pdf);
    let processor = BatchProcessor::from_config(source, &config);

    let batch = processor
        .process_with(&files, |_, path, _| {
            pb.set_message(
                path.file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default(),
            );
            pb.inc(1);
        })
        .await;

    pb.finish_and_clear();

    let csv_path = match (&args.csv, &args.xlsx) {
        (None, None) => Some(PathBuf::from(DEFAULT_CSV)),
        (csv, _) => csv.clone(),
    };

    if let Some(path) = csv_path {
        let data = to_delimited(batch.records(), &Field::ALL, &config.export)?;
        fs::write(&path, data)?;
        println!("{} CSV written to {}", style("✓").green(), path.display());
    }

    if let Some(path) = &args.xlsx {
        let data = to_xlsx(batch.records(), &Field::ALL, &config.export)?;
        let written = write_with_fallback(path, &data)?;
        println!("{} XLSX written to {}", style("✓").green(), written.display());
    }

    let failures = batch.failures();
    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        batch.len(),
        start.elapsed()
    );
    println!(
        "   {} successful, {} failed",
        style(batch.len() - failures.len()).green(),
        style(failures.len()).red()
    );

    if !failures.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for failure in failures {
            println!("  - {}: {}", failure.file_name, failure.error);
        }
    }

    Ok(())
}

/// Expand the input into a sorted list of PDF files.
fn collect_inputs(input: &str) -> anyhow::Result<Vec<PathBuf>> {
    let dir = Path::new(input);
    let pattern = if dir.is_dir() {
        format!(
            "{}/{}",
            Pattern::escape(&dir.to_string_lossy()),
            DIRECTORY_PATTERN
        )
    } else {
        input.to_string()
    };
    debug!("Expanding input pattern {}", pattern);

    let mut files: Vec<PathBuf> = glob(&pattern)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            p.is_file()
                && p.extension()
                    .and_then(|e| e.to_str())
                    .is_some_and(|e| e.eq_ignore_ascii_case("pdf"))
        })
        .collect();

    files.sort();
    Ok(files)
}

/// Write `data` to `path`; if the target is locked, write `<stem>_out.<ext>`
/// next to it instead. Returns the path actually written.
fn write_with_fallback(path: &Path, data: &[u8]) -> anyhow::Result<PathBuf> {
    match fs::write(path, data) {
        Ok(()) => Ok(path.to_path_buf()),
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
            let alternate = alternate_path(path);
            warn!(
                "Cannot write {} ({}), using {}",
                path.display(),
                e,
                alternate.display()
            );
            fs::write(&alternate, data)?;
            Ok(alternate)
        }
        Err(e) => Err(e.into()),
    }
}

fn alternate_path(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "boletas".to_string());
    let name = match path.extension() {
        Some(ext) => format!("{}_out.{}", stem, ext.to_string_lossy()),
        None => format!("{}_out", stem),
    };
    path.with_file_name(name)
}

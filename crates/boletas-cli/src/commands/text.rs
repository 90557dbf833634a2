//! Text command - dump the extracted text of a PDF for inspection.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::debug;

use boletas_core::pdf::join_pages;
use boletas_core::{PdfTextSource, TextSource};

use super::load_config;

/// Arguments for the text command.
#[derive(Args)]
pub struct TextArgs {
    /// Input PDF file
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: next to the input, with a .txt extension)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub async fn run(args: TextArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let source = PdfTextSource::from_config(&config.pdf);
    let pages = source.page_texts(&args.input).await?;
    debug!("Read {} pages from {}", pages.len(), args.input.display());

    let text = join_pages(&pages);
    let output_path = args
        .output
        .unwrap_or_else(|| args.input.with_extension("txt"));

    fs::write(&output_path, &text)?;

    println!(
        "{} Wrote {} characters to {}",
        style("✓").green(),
        text.chars().count(),
        output_path.display()
    );

    Ok(())
}

//! Process command - extract data from a single settlement notice.

use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use boletas_core::export::to_delimited;
use boletas_core::models::record::{ExtractedRecord, Field};
use boletas_core::settlement::rules::{format_locale_amount_grouped, parse_locale_amount};
use boletas_core::settlement::LayoutFamily;
use boletas_core::{BatchProcessor, PdfTextSource};

use super::load_config;

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input PDF file
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Document layout (overrides config)
    #[arg(long)]
    layout: Option<LayoutFamily>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output (header + one row)
    Csv,
    /// Plain text summary
    Text,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let mut config = load_config(config_path)?;
    if let Some(layout) = args.layout {
        config.extraction.layout = layout;
    }

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message("Extracting fields...");

    let source = PdfTextSource::from_config(&config.pdf);
    let processor = BatchProcessor::from_config(source, &config);
    let result = processor.process_document(&args.input).await;

    pb.finish_and_clear();
    let record = result?;

    let output = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&record)?,
        OutputFormat::Csv => {
            let data = to_delimited(std::slice::from_ref(&record), &Field::ALL, &config.export)?;
            String::from_utf8(data)?
        }
        OutputFormat::Text => format_record_text(&record),
    };

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        print!("{}", output);
        if !output.ends_with('\n') {
            println!();
        }
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

fn is_amount(field: Field) -> bool {
    !matches!(
        field,
        Field::CheckNumber | Field::DueDate | Field::CheckCode | Field::DocumentDate
    )
}

/// Human-readable view: one labeled line per field, amounts with thousands groups.
pub(crate) fn format_record_text(record: &ExtractedRecord) -> String {
    let width = Field::ALL.iter().map(|f| f.label().len()).max().unwrap_or(0);

    let mut output = String::new();
    for (field, value) in record.iter() {
        let shown = if value.is_empty() {
            "-".to_string()
        } else if is_amount(field) {
            match parse_locale_amount(value) {
                Some(amount) => format_locale_amount_grouped(Some(amount)),
                None => value.to_string(),
            }
        } else {
            value.to_string()
        };
        output.push_str(&format!("{:<width$}  {}\n", field.label(), shown, width = width));
    }
    output
}

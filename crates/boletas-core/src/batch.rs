//! Batch processing: one record per input document, in input order.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::path::Path;
use std::time::Instant;

use futures_util::FutureExt;
use tracing::{debug, info, warn};

use crate::models::config::BoletasConfig;
use crate::models::record::{BatchResult, ExtractedRecord, Field};
use crate::pdf::{join_pages, TextSource};
use crate::settlement::rules::check_code_from_filename;
use crate::settlement::SettlementParser;

/// Runs text extraction, field extraction and derivation over a batch.
///
/// Documents are handled strictly one after another. A document that fails
/// is replaced by an error record and the batch carries on.
pub struct BatchProcessor<S> {
    source: S,
    parser: Box<dyn SettlementParser + Send + Sync>,
}

impl<S: TextSource> BatchProcessor<S> {
    /// Create a processor from a text source and a parser.
    pub fn new(source: S, parser: Box<dyn SettlementParser + Send + Sync>) -> Self {
        Self { source, parser }
    }

    /// Create a processor using the parser registered for the configured layout.
    pub fn from_config(source: S, config: &BoletasConfig) -> Self {
        let parser = config.extraction.layout.parser(&config.extraction);
        Self::new(source, parser)
    }

    /// Process a single document.
    pub async fn process_document(&self, path: &Path) -> crate::Result<ExtractedRecord> {
        let file_name = file_name_of(path);

        let pages = self.source.page_texts(path).await?;
        let text = join_pages(&pages);
        debug!("{}: {} pages, {} chars", file_name, pages.len(), text.len());

        let mut record = self.parser.parse(&text, &file_name)?;

        if self.parser.filename_fallback() && record.is_empty(Field::CheckCode) {
            if let Some(code) = check_code_from_filename(&file_name) {
                record.fill(Field::CheckCode, code);
            }
        }

        Ok(record)
    }

    /// Process every document in order.
    pub async fn process<P: AsRef<Path>>(&self, paths: &[P]) -> BatchResult {
        self.process_with(paths, |_, _, _| {}).await
    }

    /// Process every document in order, calling `on_document` after each one
    /// with its position, path and resulting record.
    pub async fn process_with<P, F>(&self, paths: &[P], mut on_document: F) -> BatchResult
    where
        P: AsRef<Path>,
        F: FnMut(usize, &Path, &ExtractedRecord),
    {
        let start = Instant::now();
        let mut batch = BatchResult::with_capacity(paths.len());

        info!("Processing {} documents", paths.len());

        for (index, path) in paths.iter().enumerate() {
            let path = path.as_ref();
            // A panic inside one document must not take the batch down.
            let outcome = AssertUnwindSafe(self.process_document(path))
                .catch_unwind()
                .await;

            match outcome {
                Ok(Ok(record)) => batch.push(record),
                Ok(Err(e)) => {
                    warn!("Failed to process {}: {}", path.display(), e);
                    batch.push_failure(&file_name_of(path), e.to_string());
                }
                Err(payload) => {
                    let reason = panic_message(&*payload);
                    warn!("Panicked while processing {}: {}", path.display(), reason);
                    batch.push_failure(&file_name_of(path), format!("panicked: {}", reason));
                }
            }

            if let Some(record) = batch.records().last() {
                on_document(index, path, record);
            }
        }

        info!(
            "Processed {} documents ({} failed) in {:?}",
            batch.len(),
            batch.failures().len(),
            start.elapsed()
        );

        batch
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

//! Batch aggregation: the sequential per-file pipeline.
//!
//! Files are processed strictly one at a time in input order. Every per-file
//! failure is contained here and surfaced as an error record; only an empty
//! working set aborts the run.

use std::io::Write;
use std::sync::Arc;

use tempfile::NamedTempFile;
use tracing::{info, warn};

use crate::client::OpenAiClient;
use crate::config::{Config, batch};
use crate::error::{BatchError, ExtractError, ExtractResult};
use crate::models::{ArticleRow, BatchReport, ErrorRecord, TokenUsage, UploadedFile, UsageSummary};
use crate::{parser, pdf, prompt};

/// Sequential batch processor.
///
/// Owns the client handle and per-run options for one run.
#[derive(Debug, Clone)]
pub struct BatchRunner {
    /// Completion client.
    client: Arc<OpenAiClient>,

    /// Pages read from the start of each PDF.
    page_limit: usize,

    /// Progress chunk size; `None` treats the batch as one chunk.
    chunk_size: Option<usize>,

    /// Whether to attach token/cost usage to the report.
    report_usage: bool,
}

/// Rows and usage from one successfully processed file.
struct FileOutcome {
    rows: Vec<ArticleRow>,
    usage: Option<TokenUsage>,
}

impl BatchRunner {
    /// Create a runner from a client and configuration.
    #[must_use]
    pub fn new(client: Arc<OpenAiClient>, config: &Config) -> Self {
        Self {
            client,
            page_limit: config.page_limit,
            chunk_size: config.chunk_size,
            report_usage: config.report_usage,
        }
    }

    /// Process an ordered set of uploaded files into one report.
    ///
    /// Files beyond the batch cap are ignored with a truncation warning.
    /// Success rows concatenate preserving per-file, per-row order; a report
    /// is always produced even when every file fails.
    ///
    /// # Errors
    ///
    /// Returns error only when `files` is empty.
    pub async fn run(&self, mut files: Vec<UploadedFile>) -> Result<BatchReport, BatchError> {
        if files.is_empty() {
            return Err(BatchError::NoInput);
        }
        if files.len() > batch::MAX_FILES {
            warn!(
                submitted = files.len(),
                cap = batch::MAX_FILES,
                "batch truncated, files beyond the cap are ignored"
            );
            files.truncate(batch::MAX_FILES);
        }

        let total = files.len();
        let chunk_size = self.chunk_size.unwrap_or(total).max(1);

        let mut rows = Vec::new();
        let mut errors = Vec::new();
        let mut total_tokens: u64 = 0;
        let mut processed = 0_usize;

        for (chunk_index, chunk) in files.chunks(chunk_size).enumerate() {
            if self.chunk_size.is_some() {
                info!(chunk = chunk_index + 1, files = chunk.len(), "processing chunk");
            }

            for file in chunk {
                processed += 1;
                info!(processed, total, file = %file.name, "processing file");

                match self.process_file(file).await {
                    Ok(outcome) => {
                        if let Some(usage) = outcome.usage {
                            total_tokens += usage.total_tokens;
                        }
                        rows.extend(outcome.rows);
                    }
                    Err(err) => {
                        warn!(file = %file.name, kind = err.kind(), error = %err, "file failed");
                        errors.push(ErrorRecord::new(&file.name, err.to_string()));
                    }
                }
            }
        }

        let usage = if self.report_usage {
            Some(UsageSummary { total_tokens, cost_estimate: self.client.daily_spend().await })
        } else {
            None
        };

        Ok(BatchReport { rows, errors, total_files: total, usage })
    }

    /// Run the per-file pipeline: spool, extract, prompt, complete, parse.
    ///
    /// The spooled temp file is removed on every exit path when its guard
    /// drops, including parser or client failure.
    async fn process_file(&self, file: &UploadedFile) -> ExtractResult<FileOutcome> {
        let spooled = self.spool(file)?;

        let text = pdf::extract_text(spooled.path(), self.page_limit)?;
        if text.is_empty() {
            return Err(ExtractError::EmptyText);
        }

        let completion = self.client.complete(prompt::build_messages(&text)).await?;
        let rows = parser::parse_table(&completion.content)?;
        Ok(FileOutcome { rows, usage: completion.usage })
    }

    /// Write the uploaded bytes to a scoped temporary file.
    fn spool(&self, file: &UploadedFile) -> ExtractResult<NamedTempFile> {
        let mut spooled = tempfile::Builder::new().prefix("panda-").suffix(".pdf").tempfile()?;
        spooled.write_all(&file.bytes)?;
        spooled.flush()?;
        Ok(spooled)
    }
}

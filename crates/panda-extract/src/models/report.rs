//! Batch report types: the aggregated outcome of one run.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::row::ArticleRow;

/// A per-file failure surfaced in the final report.
///
/// Never dropped: every failed file produces exactly one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRecord {
    /// Original filename of the failed file.
    pub file: String,

    /// Human-readable failure message.
    pub error: String,
}

impl ErrorRecord {
    /// Create a record from a filename and a failure message.
    #[must_use]
    pub fn new(file: impl Into<String>, error: impl Into<String>) -> Self {
        Self { file: file.into(), error: error.into() }
    }
}

/// Advisory token/cost accounting for one batch run.
///
/// Best-effort only: the cost estimate comes from the billing collaborator and
/// falls back to zero when that query fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct UsageSummary {
    /// Tokens consumed across all successful model calls.
    pub total_tokens: u64,

    /// Cumulative daily spend in USD, as reported by the billing endpoint.
    pub cost_estimate: f64,
}

/// Aggregated outcome of one batch run.
///
/// Built incrementally by the aggregator, handed off read-only afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchReport {
    /// Success rows, concatenated preserving per-file, per-row order.
    pub rows: Vec<ArticleRow>,

    /// One record per failed file.
    pub errors: Vec<ErrorRecord>,

    /// Files actually taken into the batch (after the cap).
    pub total_files: usize,

    /// Token/cost usage, when usage reporting is enabled.
    pub usage: Option<UsageSummary>,
}

impl BatchReport {
    /// Number of extracted rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of failed files.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Whether the batch produced nothing at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.errors.is_empty()
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} file(s) processed: {} row(s) extracted, {} error(s)",
            self.total_files,
            self.rows.len(),
            self.errors.len()
        )?;
        if let Some(usage) = &self.usage {
            write!(
                f,
                " | {} tokens used, ~US$ {:.2} spent today",
                usage.total_tokens, usage.cost_estimate
            )?;
        }
        Ok(())
    }
}

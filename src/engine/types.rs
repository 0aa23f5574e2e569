//! Engine types
//!
//! Pages, statistics and the report returned by an export run.

use crate::error::Error;
use crate::pagination::StopReason;
use crate::resources::Resource;
use serde_json::Value;
use std::path::PathBuf;

/// One page of records
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// Page number the records were requested with
    pub number: u32,
    /// Records in API order
    pub records: Vec<Value>,
}

impl Page {
    /// Number of records on the page
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the page has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Statistics from an export run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportStats {
    /// HTTP requests issued
    pub requests_made: u32,
    /// Non-empty pages received
    pub pages_fetched: u32,
    /// Rows written to the output
    pub records_written: usize,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

impl ExportStats {
    /// Create new stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a page
    pub fn add_page(&mut self) {
        self.pages_fetched += 1;
    }

    /// Add records
    pub fn add_records(&mut self, count: usize) {
        self.records_written += count;
    }

    /// Set duration
    pub fn set_duration(&mut self, ms: u64) {
        self.duration_ms = ms;
    }
}

/// How an export run ended
#[derive(Debug)]
pub enum ExportOutcome {
    /// Pagination ran to completion
    Complete(StopReason),
    /// Pagination stopped on an error; rows before it were written
    Interrupted(Error),
}

impl ExportOutcome {
    /// Check if pagination ran to completion
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }

    /// The error that stopped pagination, if any
    pub fn error(&self) -> Option<&Error> {
        match self {
            Self::Complete(_) => None,
            Self::Interrupted(e) => Some(e),
        }
    }
}

/// Result of exporting one resource
#[derive(Debug)]
pub struct ExportReport {
    /// Exported resource
    pub resource: Resource,
    /// File the rows were written to
    pub output: PathBuf,
    /// Run statistics
    pub stats: ExportStats,
    /// How the run ended
    pub outcome: ExportOutcome,
}

impl ExportReport {
    /// Turn an interrupted run into its error, keeping complete runs as-is
    pub fn into_result(self) -> crate::error::Result<Self> {
        match self.outcome {
            ExportOutcome::Interrupted(e) => Err(e),
            ExportOutcome::Complete(_) => Ok(self),
        }
    }
}

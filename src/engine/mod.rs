//! Execution engine module
//!
//! Export loop and resource orchestration.
//!
//! # Overview
//!
//! The engine module provides:
//! - `ExportEngine` - fetches every page of a resource and streams rows to CSV
//! - `Pages` - the lazy page sequence behind the export loop
//! - `ExportReport` - statistics and outcome of a run
//!
//! Rows are written and flushed page by page, so memory use is bounded by
//! one page regardless of how many records the API holds. When a request
//! fails part way, the rows already written stay in the file and the
//! error is carried in the report.

mod pages;
mod types;

pub use pages::Pages;
pub use types::{ExportOutcome, ExportReport, ExportStats, Page};

use crate::config::ExportConfig;
use crate::decode::JsonDecoder;
use crate::error::Result;
use crate::http::{HttpClient, HttpClientConfig};
use crate::output::CsvWriter;
use crate::pagination::{PageNumberPaginator, StopReason};
use crate::resources::Resource;
use crate::schema::{flatten, Schema};
use futures::StreamExt;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Export engine for one configured API account
pub struct ExportEngine {
    /// HTTP client
    client: HttpClient,
    /// Run configuration
    config: ExportConfig,
}

impl ExportEngine {
    /// Validate the config and build the HTTP client
    pub fn new(config: ExportConfig) -> Result<Self> {
        config.validate()?;

        let http_config = HttpClientConfig::builder()
            .base_url(config.base_url.clone())
            .maybe_timeout(config.timeout)
            .build();
        let client = HttpClient::with_auth(http_config, config.auth())?;

        Ok(Self { client, config })
    }

    /// Run configuration
    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Page size used for `resource`
    pub fn page_size(&self, resource: Resource) -> u32 {
        self.config
            .page_size
            .unwrap_or_else(|| resource.default_page_size())
    }

    /// Output path used for `resource`
    pub fn output_path(&self, resource: Resource) -> PathBuf {
        self.config
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(resource.default_output()))
    }

    /// Lazy page sequence for `resource`
    pub fn pages(&self, resource: Resource) -> Pages<'_> {
        let paginator = PageNumberPaginator::new(self.page_size(resource));
        Pages::new(&self.client, resource.path(), paginator, JsonDecoder::new())
            .with_strict(self.config.strict_responses)
    }

    /// Export `resource` to its output file, overwriting it
    ///
    /// Config and output failures are returned as errors. A failed page
    /// request ends the run with `ExportOutcome::Interrupted`; rows from
    /// earlier pages are already in the file.
    pub async fn export(&self, resource: Resource) -> Result<ExportReport> {
        let schema = resource.schema()?;
        let output = self.output_path(resource);

        let mut writer = CsvWriter::create(&output, &schema)?;
        let (stats, outcome) = self.export_with_writer(resource, &schema, &mut writer).await?;
        writer.close()?;

        match &outcome {
            ExportOutcome::Complete(reason) => info!(
                "Exported {} {} to {} ({} pages, stopped on {})",
                stats.records_written,
                resource,
                output.display(),
                stats.pages_fetched,
                reason
            ),
            ExportOutcome::Interrupted(e) => warn!(
                "Export of {} interrupted after {} records: {}",
                resource, stats.records_written, e
            ),
        }

        Ok(ExportReport {
            resource,
            output,
            stats,
            outcome,
        })
    }

    /// Stream every page of `resource` into `writer`
    ///
    /// The writer must have been created with `schema`.
    pub async fn export_with_writer<W: Write>(
        &self,
        resource: Resource,
        schema: &Schema,
        writer: &mut CsvWriter<W>,
    ) -> Result<(ExportStats, ExportOutcome)> {
        let start = Instant::now();
        let mut stats = ExportStats::new();
        let mut pages = self.pages(resource);

        info!(
            "Starting export of {} (page size {})",
            resource,
            self.page_size(resource)
        );

        let mut failure = None;
        {
            let mut stream = pages.stream();

            while let Some(item) = stream.next().await {
                let page = match item {
                    Ok(page) => page,
                    Err(e) => {
                        failure = Some(e);
                        break;
                    }
                };

                for record in &page.records {
                    writer.write_row(flatten(record, schema))?;
                }
                writer.flush()?;

                stats.add_page();
                stats.add_records(page.len());
                debug!("Page {}: wrote {} records", page.number, page.len());
            }
        }

        stats.requests_made = pages.requests_made();
        stats.set_duration(start.elapsed().as_millis() as u64);

        let outcome = match failure {
            Some(e) => ExportOutcome::Interrupted(e),
            None => ExportOutcome::Complete(pages.stop_reason().unwrap_or(StopReason::EmptyPage)),
        };

        Ok((stats, outcome))
    }
}

impl std::fmt::Debug for ExportEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExportEngine")
            .field("client", &self.client)
            .field("config", &self.config)
            .finish()
    }
}

//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::config::ExportConfig;
use crate::engine::{ExportEngine, ExportOutcome};
use crate::error::{Error, Result};
use crate::resources::Resource;
use std::time::Duration;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Export {
                resource,
                page_size,
                output,
                timeout_secs,
                lenient,
            } => {
                let config = self
                    .load_config()?
                    .with_page_size(*page_size)
                    .with_output(output.clone())
                    .with_timeout(timeout_secs.map(Duration::from_secs))
                    .with_strict_responses(!*lenient);
                self.export(*resource, config).await
            }
            Commands::Resources => {
                self.list_resources();
                Ok(())
            }
        }
    }

    /// Build the run configuration from global options and the config file
    fn load_config(&self) -> Result<ExportConfig> {
        let path = self.cli.config.as_ref().ok_or_else(|| {
            Error::config("Config file not specified (use --config or FIREHYDRANT_CONFIG)")
        })?;

        Ok(ExportConfig::from_file(path, &self.cli.token_field)?
            .with_base_url(self.cli.base_url.clone())
            .with_auth_scheme(self.cli.auth_scheme))
    }

    /// Export a resource
    async fn export(&self, resource: Resource, config: ExportConfig) -> Result<()> {
        let engine = ExportEngine::new(config)?;
        let report = engine.export(resource).await?;

        match &report.outcome {
            ExportOutcome::Complete(_) => {
                println!(
                    "Exported {} {} to {}",
                    report.stats.records_written,
                    resource,
                    report.output.display()
                );
            }
            ExportOutcome::Interrupted(e) => {
                eprintln!("Failed to retrieve {resource}: {e}");
                eprintln!(
                    "Wrote {} records fetched before the failure to {}",
                    report.stats.records_written,
                    report.output.display()
                );
            }
        }

        report.into_result().map(|_| ())
    }

    /// List built-in resources
    fn list_resources(&self) {
        for resource in Resource::all() {
            let columns = match resource.schema() {
                Ok(schema) => schema.headers().join(", "),
                Err(e) => format!("<invalid schema: {e}>"),
            };
            println!("{resource}");
            println!("  endpoint:  {}{}", self.cli.base_url, resource.path());
            println!("  page size: {}", resource.default_page_size());
            println!("  output:    {}", resource.default_output());
            println!("  columns:   {columns}");
        }
    }
}

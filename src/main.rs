// src/main.rs

// Modules defined in the crate
mod api;
mod config;
mod constants;
mod error;
mod model;
mod pipeline;
mod table;
mod types;
mod validation;

// Specific imports
use crate::api::NotionClient;
use crate::config::{CommandLineInput, RunConfig};
use crate::error::AppError;
use crate::pipeline::{BatchValidator, ReportDelivery, RowSource};
use crate::table::Table;
use crate::types::NotionId;
use crate::validation::{BatchRequest, Checkpoint, CheckpointResult, ValidationContext};
use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::ConsoleAppender,
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use std::fs;

/// Sets up logging configuration.
fn setup_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let log_file_path = std::env::temp_dir().join("notion2table.log");
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    let stdout_appender = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("stdout")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    log::info!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

/// Fetches collection rows through the authenticated client.
struct NotionRows<'a> {
    client: &'a NotionClient,
    config: &'a RunConfig,
}

impl RowSource for NotionRows<'_> {
    fn fetch_rows(&self, collection: &NotionId) -> Result<Table, AppError> {
        log::info!("Querying collection {}", collection.as_str());
        let table = self
            .client
            .query_table(collection, self.config.filter.as_ref())?;
        log::info!(
            "Fetched {} row(s) across {} column(s)",
            table.row_count(),
            table.column_count()
        );
        Ok(table)
    }
}

/// Runs the configured checkpoint against a batch, recording the result
/// into the validation context for persistence.
struct CheckpointStage<'a> {
    context: ValidationContext,
    config: &'a RunConfig,
    data_asset_name: String,
}

impl CheckpointStage<'_> {
    /// Flushes recorded results and closes the context.
    fn finish(self) -> Result<(), AppError> {
        self.context.teardown()
    }
}

impl BatchValidator for CheckpointStage<'_> {
    fn validate(&mut self, table: &Table) -> Result<CheckpointResult, AppError> {
        let suite = self.context.suite(&self.config.expectation_suite)?;
        let checkpoint = Checkpoint::new(
            "notion_checkpoint",
            &self.config.data_source,
            &self.config.data_connector,
        );

        let result = checkpoint.run(
            &suite,
            BatchRequest {
                data_asset_name: &self.data_asset_name,
                batch: table,
            },
            self.config.run_name.as_deref(),
        )?;

        self.context.record_result(result.clone());
        Ok(result)
    }
}

/// Logs the checkpoint outcome expectation by expectation.
struct ConsoleReport;

impl ReportDelivery for ConsoleReport {
    fn deliver(&self, result: &CheckpointResult) -> Result<(), AppError> {
        for expectation in &result.results {
            if expectation.success {
                log::info!("✓ {}", expectation.description);
            } else {
                log::warn!(
                    "✗ {} ({}/{} unexpected{})",
                    expectation.description,
                    expectation.unexpected_count,
                    expectation.element_count,
                    expectation
                        .message
                        .as_ref()
                        .map(|m| format!("; {}", m))
                        .unwrap_or_default()
                );
            }
        }
        log::info!("{}", result.summary());
        Ok(())
    }
}

/// Executes the three-stage pipeline: fetch rows → run checkpoint → report.
fn execute_pipeline(config: &RunConfig) -> Result<CheckpointResult, AppError> {
    log::info!("Validating Notion API key and testing connection");
    let client = NotionClient::connect(config.api_key.clone())?;

    let source = NotionRows {
        client: &client,
        config,
    };
    let table = source.fetch_rows(&config.collection_id)?;
    log::info!("Table preview:\n{}", table.preview());

    // The collection title becomes the data-asset name in the report,
    // falling back to the raw id for untitled collections.
    let collection = client.fetch_collection(&config.collection_id)?;
    let title = collection.title_text();
    let data_asset_name = if title.is_empty() {
        config.collection_id.as_str().to_string()
    } else {
        title
    };

    let context = ValidationContext::init(&config.context_root)?;
    let mut validator = CheckpointStage {
        context,
        config,
        data_asset_name,
    };
    let result = validator.validate(&table)?;
    validator.finish()?;

    ConsoleReport.deliver(&result)?;
    Ok(result)
}

fn main() -> anyhow::Result<()> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose)
        .map_err(|e| anyhow::anyhow!("{}", e))
        .context("failed to initialize logging")?;

    let config = RunConfig::resolve(cli)?;

    let result = execute_pipeline(&config)?;

    if !result.success {
        anyhow::bail!("{}", result.summary());
    }

    log::info!("Done running validation. Check the run store to see the result.");
    Ok(())
}

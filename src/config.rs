// src/config.rs
use crate::error::AppError;
use crate::types::{ApiKey, NotionId, SuiteName};
use clap::Parser;
use std::path::PathBuf;

/// Parsed and validated command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// Notion database id or full browser URL
    #[arg(long)]
    pub db: String,

    /// Data source name recorded in the checkpoint result
    #[arg(long, default_value = "notion_data_source")]
    pub data_source: String,

    /// Data connector name recorded in the checkpoint result
    #[arg(long, default_value = "notion_data_connector")]
    pub data_connector: String,

    /// Expectation suite name to be used. Must exist in the context store.
    #[arg(long)]
    pub expectation_suite: String,

    /// Run name. This will appear in the persisted checkpoint result.
    #[arg(long)]
    pub run_name: Option<String>,

    /// Root directory of the validation context store
    #[arg(long, default_value = "./expectation_store")]
    pub context_root: String,

    /// Raw Notion filter JSON merged into every query request
    #[arg(long)]
    pub filter: Option<String>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Resolved run configuration — validated and ready to drive all three stages.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub collection_id: NotionId,
    pub api_key: ApiKey,
    pub data_source: String,
    pub data_connector: String,
    pub expectation_suite: SuiteName,
    pub run_name: Option<String>,
    pub context_root: PathBuf,
    pub filter: Option<serde_json::Value>,
    #[allow(dead_code)] // Logging is configured from the CLI flag before resolve
    pub verbose: bool,
}

impl RunConfig {
    /// Resolves a complete run configuration from CLI input and environment.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        let api_key_str = std::env::var("NOTION_API_KEY").map_err(|_| {
            AppError::MissingConfiguration(
                "NOTION_API_KEY environment variable not set".to_string(),
            )
        })?;

        let api_key = ApiKey::new(api_key_str)?;
        let collection_id = NotionId::parse(&cli.db)?;
        let expectation_suite = SuiteName::new(cli.expectation_suite)?;

        let filter = cli
            .filter
            .map(|raw| {
                serde_json::from_str(&raw).map_err(|e| {
                    AppError::InvalidArgument(format!("--filter is not valid JSON: {}", e))
                })
            })
            .transpose()?;

        Ok(RunConfig {
            collection_id,
            api_key,
            data_source: cli.data_source,
            data_connector: cli.data_connector,
            expectation_suite,
            run_name: cli.run_name,
            context_root: PathBuf::from(cli.context_root),
            filter,
            verbose: cli.verbose,
        })
    }
}

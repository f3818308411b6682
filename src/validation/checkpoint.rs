// src/validation/checkpoint.rs
//! Checkpoints — run a named expectation suite against a tabular batch.

use super::suite::{ExpectationResult, ExpectationSuite};
use crate::error::AppError;
use crate::table::Table;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A configured validation checkpoint.
///
/// The datasource and data-connector names are bookkeeping labels
/// carried into the persisted result; they do not affect evaluation.
#[derive(Debug, Clone)]
pub struct Checkpoint {
    pub name: String,
    pub datasource_name: String,
    pub data_connector_name: String,
}

impl Checkpoint {
    pub fn new(
        name: impl Into<String>,
        datasource_name: impl Into<String>,
        data_connector_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            datasource_name: datasource_name.into(),
            data_connector_name: data_connector_name.into(),
        }
    }

    /// Evaluates every expectation of the suite against the batch.
    ///
    /// Returns the structured result; a failed expectation does not
    /// abort the run, but a malformed rule does.
    pub fn run(
        &self,
        suite: &ExpectationSuite,
        batch: BatchRequest<'_>,
        run_name: Option<&str>,
    ) -> Result<CheckpointResult, AppError> {
        log::info!(
            "running checkpoint '{}' with suite '{}' against asset '{}' ({} row(s))",
            self.name,
            suite.name,
            batch.data_asset_name,
            batch.batch.row_count()
        );

        let results = suite
            .expectations
            .iter()
            .map(|expectation| expectation.evaluate(batch.batch))
            .collect::<Result<Vec<_>, _>>()?;

        let statistics = CheckpointStatistics::from_results(&results);
        let success = statistics.unsuccessful_expectations == 0;

        Ok(CheckpointResult {
            run_id: Uuid::new_v4().to_string(),
            run_name: run_name.map(String::from),
            run_time: Utc::now(),
            checkpoint_name: self.name.clone(),
            datasource_name: self.datasource_name.clone(),
            data_connector_name: self.data_connector_name.clone(),
            data_asset_name: batch.data_asset_name.to_string(),
            suite_name: suite.name.clone(),
            success,
            statistics,
            results,
        })
    }
}

/// A batch handed to a checkpoint: the table plus the asset name it
/// should be reported under.
#[derive(Debug, Clone, Copy)]
pub struct BatchRequest<'a> {
    pub data_asset_name: &'a str,
    pub batch: &'a Table,
}

/// Aggregate counts over one checkpoint run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckpointStatistics {
    pub evaluated_expectations: usize,
    pub successful_expectations: usize,
    pub unsuccessful_expectations: usize,
    pub success_percent: f64,
}

impl CheckpointStatistics {
    fn from_results(results: &[ExpectationResult]) -> Self {
        let evaluated = results.len();
        let successful = results.iter().filter(|r| r.success).count();
        let success_percent = if evaluated == 0 {
            100.0
        } else {
            (successful as f64 / evaluated as f64) * 100.0
        };

        Self {
            evaluated_expectations: evaluated,
            successful_expectations: successful,
            unsuccessful_expectations: evaluated - successful,
            success_percent,
        }
    }
}

/// The structured report of one checkpoint run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckpointResult {
    pub run_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_name: Option<String>,
    pub run_time: DateTime<Utc>,
    pub checkpoint_name: String,
    pub datasource_name: String,
    pub data_connector_name: String,
    pub data_asset_name: String,
    pub suite_name: String,
    pub success: bool,
    pub statistics: CheckpointStatistics,
    pub results: Vec<ExpectationResult>,
}

impl CheckpointResult {
    /// One-line summary for logs and the console.
    pub fn summary(&self) -> String {
        format!(
            "checkpoint '{}' {}: {}/{} expectation(s) met against '{}'",
            self.checkpoint_name,
            if self.success { "passed" } else { "FAILED" },
            self.statistics.successful_expectations,
            self.statistics.evaluated_expectations,
            self.data_asset_name
        )
    }
}

// src/pipeline.rs
//! Pipeline capability traits — abstract the three stages of the
//! Notion-to-checkpoint pipeline.
//!
//! Each trait describes a single capability, enabling testing each
//! stage in isolation.

use crate::error::AppError;
use crate::table::Table;
use crate::types::NotionId;
use crate::validation::CheckpointResult;

/// Retrieves the rows of a collection as a tabular batch.
pub trait RowSource {
    fn fetch_rows(&self, collection: &NotionId) -> Result<Table, AppError>;
}

/// Runs the configured expectation suite against a batch.
pub trait BatchValidator {
    fn validate(&mut self, table: &Table) -> Result<CheckpointResult, AppError>;
}

/// Delivers a checkpoint result to its destinations.
pub trait ReportDelivery {
    fn deliver(&self, result: &CheckpointResult) -> Result<(), AppError>;
}

// src/validation/suite.rs
//! Expectation suites — named, externally persisted rule sets.
//!
//! A suite document lists the expectations a tabular batch must satisfy.
//! Authoring and rendering stay with the owning data team; this module
//! only loads and evaluates.

use crate::error::AppError;
use crate::model::CellValue;
use crate::table::Table;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// A named set of data-quality expectations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpectationSuite {
    pub name: String,
    #[serde(default)]
    pub expectations: Vec<Expectation>,
}

/// One data-quality rule over a single column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "expectation_type", rename_all = "snake_case")]
pub enum Expectation {
    /// Every cell in the column must hold a value.
    ValuesNotNull { column: String },
    /// Every present cell, rendered as text, must match the pattern.
    /// Absent cells are out of scope for this rule.
    ValuesMatchRegex {
        column: String,
        pattern: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        notes: Option<String>,
    },
}

impl Expectation {
    /// The column this expectation constrains.
    pub fn column(&self) -> &str {
        match self {
            Expectation::ValuesNotNull { column } => column,
            Expectation::ValuesMatchRegex { column, .. } => column,
        }
    }

    /// Human-readable description used in reports.
    pub fn describe(&self) -> String {
        match self {
            Expectation::ValuesNotNull { column } => {
                format!("expect values in '{}' to not be null", column)
            }
            Expectation::ValuesMatchRegex {
                column, pattern, ..
            } => format!("expect values in '{}' to match /{}/", column, pattern),
        }
    }

    /// Evaluates this expectation against a batch.
    ///
    /// A column missing from the batch fails the expectation outright;
    /// a malformed rule (bad regex) is an error, not a failure.
    pub fn evaluate(&self, table: &Table) -> Result<ExpectationResult, AppError> {
        let column = self.column();
        let Some(values) = table.column_values(column) else {
            return Ok(ExpectationResult {
                description: self.describe(),
                column: column.to_string(),
                success: false,
                element_count: 0,
                unexpected_count: 0,
                message: Some(format!("column '{}' not present in batch", column)),
            });
        };

        match self {
            Expectation::ValuesNotNull { .. } => {
                let unexpected = values.iter().filter(|cell| cell.is_absent()).count();
                Ok(ExpectationResult {
                    description: self.describe(),
                    column: column.to_string(),
                    success: unexpected == 0,
                    element_count: values.len(),
                    unexpected_count: unexpected,
                    message: None,
                })
            }
            Expectation::ValuesMatchRegex { pattern, .. } => {
                let regex = Regex::new(pattern).map_err(|e| {
                    AppError::InvalidExpectation(format!(
                        "pattern /{}/ for column '{}' does not compile: {}",
                        pattern, column, e
                    ))
                })?;

                let present: Vec<&&CellValue> =
                    values.iter().filter(|cell| !cell.is_absent()).collect();
                let unexpected = present
                    .iter()
                    .filter(|cell| !regex.is_match(&cell.render()))
                    .count();

                Ok(ExpectationResult {
                    description: self.describe(),
                    column: column.to_string(),
                    success: unexpected == 0,
                    element_count: present.len(),
                    unexpected_count: unexpected,
                    message: None,
                })
            }
        }
    }
}

/// Outcome of evaluating one expectation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpectationResult {
    pub description: String,
    pub column: String,
    pub success: bool,
    /// How many cells the rule inspected.
    pub element_count: usize,
    /// How many inspected cells violated the rule.
    pub unexpected_count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

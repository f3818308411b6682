// src/validation/context.rs
//! The validation context — an explicit handle on the expectation store.
//!
//! Suites live as JSON documents under `<root>/suites/`; checkpoint
//! results are buffered on the handle and written under `<root>/runs/`
//! at teardown. The handle is passed explicitly to whatever performs
//! validation; there is no process-wide state.

use super::checkpoint::CheckpointResult;
use super::suite::ExpectationSuite;
use crate::constants::{RUN_STORE_DIR, SUITE_STORE_DIR};
use crate::error::AppError;
use crate::types::SuiteName;
use std::fs;
use std::path::{Path, PathBuf};

/// An open handle on a validation store.
#[derive(Debug)]
pub struct ValidationContext {
    root: PathBuf,
    pending_results: Vec<CheckpointResult>,
}

impl ValidationContext {
    /// Opens (or lays out) a store rooted at the given directory.
    pub fn init(root: impl Into<PathBuf>) -> Result<Self, AppError> {
        let root = root.into();
        fs::create_dir_all(root.join(SUITE_STORE_DIR))?;
        fs::create_dir_all(root.join(RUN_STORE_DIR))?;
        log::debug!("validation context opened at {}", root.display());

        Ok(Self {
            root,
            pending_results: Vec::new(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Loads a named expectation suite from the store.
    pub fn suite(&self, name: &SuiteName) -> Result<ExpectationSuite, AppError> {
        let path = self
            .root
            .join(SUITE_STORE_DIR)
            .join(format!("{}.json", name.as_str()));

        if !path.exists() {
            return Err(AppError::SuiteNotFound {
                name: name.as_str().to_string(),
                store: self.root.join(SUITE_STORE_DIR),
            });
        }

        let text = fs::read_to_string(&path)?;
        serde_json::from_str(&text).map_err(|source| AppError::MalformedSuite { path, source })
    }

    /// Buffers a checkpoint result for persistence at teardown.
    pub fn record_result(&mut self, result: CheckpointResult) {
        self.pending_results.push(result);
    }

    /// Flushes buffered results to the run store and closes the handle.
    pub fn teardown(self) -> Result<(), AppError> {
        let run_dir = self.root.join(RUN_STORE_DIR);
        for result in &self.pending_results {
            let file_name = format!(
                "{}-{}.json",
                result.run_time.format("%Y%m%dT%H%M%SZ"),
                result.run_id
            );
            let path = run_dir.join(file_name);
            let body = serde_json::to_string_pretty(result)
                .map_err(|e| AppError::MalformedResponse(e.to_string()))?;
            fs::write(&path, body)?;
            log::info!("checkpoint result written to {}", path.display());
        }
        Ok(())
    }
}

// src/lib.rs
//! notion2table library — flattens Notion databases into tabular batches
//! and runs data-quality expectation checkpoints against them.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling** — `AppError`, `ValidationError`
//! - **Configuration** — `RunConfig`
//! - **Domain model** — `Page`, `CellValue`, `PropertyPayload`, `Table`
//! - **Domain types** — `NotionId`, `ApiKey`, `PropertyName`, `SuiteName`
//! - **API client** — `NotionClient`, `NotionHttpClient`, parsers
//! - **Validation** — `ValidationContext`, `Checkpoint`, `ExpectationSuite`

// Internal modules — must match what's in main.rs
mod api;
mod config;
mod constants;
mod error;
mod model;
mod pipeline;
mod table;
mod types;
mod validation;

// --- Error Handling ---
pub use crate::error::{AppError, NotionErrorCode};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{CommandLineInput, RunConfig};

// --- Domain Model ---
pub use crate::model::{
    normalize, CellValue, Page, PropertyPayload, PropertyRecord, RecordPayload, RollupValue,
};
pub use crate::table::Table;

// --- Domain Types ---
pub use crate::types::{
    Annotations, ApiKey, DateValue, FileRef, NotionId, PropertyName, RelationRef, RichTextSpan,
    SelectOption, SpanType, SuiteName,
};

// --- API Client ---
pub use crate::api::{
    extract_response_text, fetch_all_pages,
    parser::{parse_collection_response, parse_query_response, parse_record_response},
    ApiResponse, CollectionMeta, NotionClient, NotionHttpClient, PaginatedResponse,
    PaginationResult,
};

// --- Validation ---
pub use crate::validation::{
    BatchRequest, Checkpoint, CheckpointResult, CheckpointStatistics, Expectation,
    ExpectationResult, ExpectationSuite, ValidationContext,
};

// --- Pipeline Traits ---
pub use crate::pipeline::{BatchValidator, ReportDelivery, RowSource};

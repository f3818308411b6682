// src/api/mod.rs
//! Notion API interaction — the ability to retrieve collection rows
//! from a workspace.
//!
//! This module provides a data-oriented interface to the Notion API,
//! with clear separation between I/O operations, parsing, and
//! projection into the domain model.

pub mod client;
mod pagination;
pub mod parser;
mod responses;

pub use client::{extract_response_text, ApiResponse, NotionHttpClient};
pub use pagination::{fetch_all_pages, PaginationResult};
pub use responses::{CollectionMeta, PaginatedResponse};

use crate::constants::CONNECTIVITY_PROBE_ENDPOINT;
use crate::error::AppError;
use crate::model::{Page, RecordPayload};
use crate::table::Table;
use crate::types::{ApiKey, NotionId};
use serde_json::Value;

/// An authenticated Notion client.
///
/// `connect` is a fallible factory: the credential format is checked
/// and a connectivity probe must succeed before a client exists at all.
/// Callers either get a usable client or an error — never a
/// partially-initialized one.
#[derive(Debug, Clone)]
pub struct NotionClient {
    http: NotionHttpClient,
}

impl NotionClient {
    /// Connects to the Notion API, validating the credential eagerly.
    pub fn connect(api_key: ApiKey) -> Result<Self, AppError> {
        let http = NotionHttpClient::new(&api_key)?;
        Self::probe_and_build(http)
    }

    /// Connects against a custom base URL (mock servers in tests).
    pub fn connect_with_base_url(api_key: ApiKey, base_url: &str) -> Result<Self, AppError> {
        let http = NotionHttpClient::with_base_url(&api_key, base_url)?;
        Self::probe_and_build(http)
    }

    fn probe_and_build(http: NotionHttpClient) -> Result<Self, AppError> {
        let probe = http.get(CONNECTIVITY_PROBE_ENDPOINT)?;
        let status = probe.status();
        if !status.is_success() {
            return Err(AppError::ConnectionProbe { status });
        }
        log::debug!("connectivity probe succeeded ({})", status);
        Ok(Self { http })
    }

    /// Retrieves a single record.
    pub fn fetch_record(&self, id: &NotionId) -> Result<RecordPayload, AppError> {
        let endpoint = format!("pages/{}", id.to_hyphenated());
        let response = self.http.get(&endpoint)?;
        parser::parse_record_response(extract_response_text(response)?)
    }

    /// Retrieves a collection's metadata (title included).
    pub fn fetch_collection(&self, id: &NotionId) -> Result<CollectionMeta, AppError> {
        let endpoint = format!("databases/{}", id.to_hyphenated());
        let response = self.http.get(&endpoint)?;
        parser::parse_collection_response(extract_response_text(response)?)
    }

    /// Runs a collection query, draining all pages, and returns the raw
    /// JSON records in arrival order.
    ///
    /// An optional filter document is merged into every request body
    /// unchanged, the way the query endpoint expects it.
    pub fn query_raw(
        &self,
        collection: &NotionId,
        filter: Option<&Value>,
    ) -> Result<Vec<Value>, AppError> {
        let endpoint = format!("databases/{}/query", collection.to_hyphenated());
        log::info!("querying collection {}", collection.as_str());

        let result = fetch_all_pages(|page_size, cursor| {
            let mut body = serde_json::json!({ "page_size": page_size });
            if let Some(filter) = filter {
                body["filter"] = filter.clone();
            }
            if let Some(cursor) = cursor {
                body["start_cursor"] = serde_json::json!(cursor);
            }
            let response = self.http.post(&endpoint, &body)?;
            parser::parse_query_response(extract_response_text(response)?)
        })?;

        log::info!(
            "collection {} returned {} record(s) in {} request(s)",
            collection.as_str(),
            result.items.len(),
            result.total_requests
        );
        Ok(result.items)
    }

    /// Runs a collection query and converts every record into a Page.
    pub fn query_pages(
        &self,
        collection: &NotionId,
        filter: Option<&Value>,
    ) -> Result<Vec<Page>, AppError> {
        self.query_raw(collection, filter)?
            .into_iter()
            .map(|raw| parser::record_from_raw(raw).map(Page::from_record))
            .collect()
    }

    /// Runs a collection query and projects the rows into a table.
    pub fn query_table(
        &self,
        collection: &NotionId,
        filter: Option<&Value>,
    ) -> Result<Table, AppError> {
        let pages = self.query_pages(collection, filter)?;
        Ok(Table::from_pages(&pages))
    }
}

// src/api/responses.rs
//! Wire-level response envelopes for the Notion API.

use crate::types::RichTextSpan;
use serde::{Deserialize, Serialize};

/// Generic paginated response wrapper.
///
/// Every paginated endpoint shares this envelope: a slice of results
/// plus a continuation cursor that is only meaningful while `has_more`
/// is set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    #[serde(default)]
    pub object: String,
    pub results: Vec<T>,
    #[serde(default)]
    pub next_cursor: Option<String>,
    #[serde(default)]
    pub has_more: bool,
}

/// Collection (database) metadata from the single-object endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionMeta {
    pub id: String,
    #[serde(default)]
    pub title: Vec<RichTextSpan>,
}

impl CollectionMeta {
    /// The collection title as plain text, spans concatenated.
    pub fn title_text(&self) -> String {
        self.title
            .iter()
            .map(|span| span.plain_text.as_str())
            .collect()
    }
}

/// Error body the Notion API returns on non-success statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct NotionApiError {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
}

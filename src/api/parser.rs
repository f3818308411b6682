// src/api/parser.rs
//! Response parsing — turns raw HTTP bodies into typed payloads.
//!
//! Success bodies deserialize into the caller's target type; non-success
//! statuses map into the typed `NotionErrorCode` vocabulary, falling
//! back to the bare HTTP status when the error body is unparseable.

use super::client::ApiResponse;
use super::responses::{CollectionMeta, NotionApiError, PaginatedResponse};
use crate::constants::ERROR_BODY_PREVIEW_LENGTH;
use crate::error::{AppError, NotionErrorCode};
use crate::model::RecordPayload;
use reqwest::StatusCode;
use serde_json::Value;

/// Parse any Notion API response into the requested type.
pub fn parse_api_response<T>(result: ApiResponse<String>) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    if result.status.is_success() {
        parse_success_body(&result.data, &result.url)
    } else {
        parse_error_body(&result.data, result.status, &result.url)
    }
}

fn parse_success_body<T>(body: &str, url: &str) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(body).map_err(|e| {
        log::error!("Failed to parse response from {}: {}", url, e);

        let preview = if body.len() > ERROR_BODY_PREVIEW_LENGTH {
            format!("{}...", &body[..ERROR_BODY_PREVIEW_LENGTH])
        } else {
            body.to_string()
        };

        AppError::MalformedResponse(format!("{} (body: {})", e, preview))
    })
}

fn parse_error_body<T>(body: &str, status: StatusCode, url: &str) -> Result<T, AppError> {
    if let Ok(api_error) = serde_json::from_str::<NotionApiError>(body) {
        if !api_error.code.is_empty() {
            return Err(AppError::NotionService {
                code: NotionErrorCode::from_api_response(&api_error.code),
                message: api_error.message,
                status,
            });
        }
    }

    Err(AppError::NotionService {
        code: NotionErrorCode::from_http_status(status.as_u16()),
        message: format!("HTTP {} from {}", status, url),
        status,
    })
}

/// Parse one page of collection query results, records kept raw.
pub fn parse_query_response(
    result: ApiResponse<String>,
) -> Result<PaginatedResponse<Value>, AppError> {
    parse_api_response(result)
}

/// Parse a single-record response.
pub fn parse_record_response(result: ApiResponse<String>) -> Result<RecordPayload, AppError> {
    parse_api_response(result)
}

/// Parse a collection-metadata response.
pub fn parse_collection_response(result: ApiResponse<String>) -> Result<CollectionMeta, AppError> {
    parse_api_response(result)
}

/// Converts an accumulated raw record into its typed payload.
pub fn record_from_raw(raw: Value) -> Result<RecordPayload, AppError> {
    serde_json::from_value(raw)
        .map_err(|e| AppError::MalformedResponse(format!("record did not match schema: {}", e)))
}

// src/api/pagination.rs
//! Cursor-driven pagination over the Notion API.

use super::responses::PaginatedResponse;
use crate::constants::NOTION_API_PAGE_SIZE;
use crate::error::AppError;

/// The accumulated outcome of draining a paginated endpoint.
#[derive(Debug)]
pub struct PaginationResult<T> {
    pub items: Vec<T>,
    pub total_requests: usize,
}

/// Drains a paginated endpoint, re-issuing the request with the
/// continuation cursor until the service reports completion.
///
/// No page-count or time limit is enforced: the loop runs until
/// `has_more` clears or a request fails. A failed round-trip aborts
/// the whole fetch and discards everything accumulated so far.
pub fn fetch_all_pages<T, F>(mut fetch_fn: F) -> Result<PaginationResult<T>, AppError>
where
    F: FnMut(usize, Option<String>) -> Result<PaginatedResponse<T>, AppError>,
{
    let mut all_items = Vec::new();
    let mut cursor = None;
    let mut total_requests = 0usize;

    loop {
        let response = fetch_fn(NOTION_API_PAGE_SIZE, cursor)?;
        total_requests += 1;

        let has_more = response.has_more;
        cursor = response.next_cursor.clone();
        all_items.extend(response.results);

        if !has_more || cursor.is_none() {
            break;
        }
    }

    log::debug!(
        "pagination complete: {} item(s) over {} request(s)",
        all_items.len(),
        total_requests
    );

    Ok(PaginationResult {
        items: all_items,
        total_requests,
    })
}

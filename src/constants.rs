// src/constants.rs
//! Domain constants that define the operational boundaries of the system.
//!
//! Each constant is named for the domain concept it constrains, not its
//! technical role. Reading these constants should tell you the story
//! of how the system operates: where it connects, how much it fetches
//! per round-trip, where expectation suites live.

// ---------------------------------------------------------------------------
// Notion API boundaries
// ---------------------------------------------------------------------------

/// Base URL for all Notion API requests.
pub const NOTION_API_BASE_URL: &str = "https://api.notion.com/v1";

/// The Notion API version this client speaks, sent on every request.
pub const NOTION_VERSION: &str = "2021-08-16";

/// How many objects the Notion API returns per page of results.
///
/// The Notion API maximum is 100. We use the maximum to minimize
/// round-trips during paginated queries.
pub const NOTION_API_PAGE_SIZE: usize = 100;

/// Required prefix for Notion integration credentials.
///
/// Rejecting keys without this prefix catches copy-paste mistakes
/// before any request is attempted.
pub const API_KEY_PREFIX: &str = "secret";

/// Endpoint used to probe connectivity at client construction time.
///
/// A GET against the users listing is the cheapest authenticated call
/// the API offers; a non-success status here means every later query
/// would fail too.
pub const CONNECTIVITY_PROBE_ENDPOINT: &str = "users";

// ---------------------------------------------------------------------------
// Validation store layout
// ---------------------------------------------------------------------------

/// Directory under the context root holding expectation suite documents.
pub const SUITE_STORE_DIR: &str = "suites";

/// Directory under the context root where checkpoint results are persisted.
pub const RUN_STORE_DIR: &str = "runs";

// ---------------------------------------------------------------------------
// Reporting
// ---------------------------------------------------------------------------

/// Number of rows shown when previewing a fetched table in the log.
pub const TABLE_PREVIEW_ROWS: usize = 5;

/// Maximum characters shown when previewing error response bodies.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 200;

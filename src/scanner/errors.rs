//! Error types for scan operations
//!
//! A scan performs no local recovery: any fetch or selector failure aborts
//! the whole operation and surfaces to the caller as a single error. There
//! is no partial-result return on failure.

use thiserror::Error;

/// Result type alias for scan operations
pub type ScanResult<T> = Result<T, ScanError>;

/// Error types for scan operations
#[derive(Debug, Error)]
pub enum ScanError {
    /// The lookup string did not compile to a valid pattern
    #[error("invalid lookup pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Transport-level failure retrieving a snapshot page
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// A snapshot page answered with a non-success status
    #[error("page request {url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// A profile's result criterion failed to parse as a CSS selector
    #[error("invalid result selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    /// The scan hit its liveness bound before the budget was met: either a
    /// page yielded zero counted results or the page ceiling was reached
    #[error("scan exhausted at page {page} with {total_so_far} results counted")]
    Exhausted { page: u32, total_so_far: usize },
}

impl ScanError {
    /// Whether the failure happened while retrieving a page, as opposed to
    /// interpreting its content or the request itself.
    #[must_use]
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, ScanError::Fetch { .. } | ScanError::Status { .. })
    }
}

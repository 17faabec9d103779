//! Paginated match scanning
//!
//! Walks successive pre-rendered search-result snapshot pages, extracts
//! the counted result elements in document order, tests each element's
//! inner content against a lookup pattern, and accumulates the global
//! ordinal positions of the matches until the result budget is met.

mod errors;
mod extract;
mod scan;
mod types;

pub use errors::{ScanError, ScanResult};
pub use scan::scan;
pub use types::{MAX_SCAN_PAGES, SearchRequest, SearchResponse};

use regex::Regex;
use reqwest::Client;
use tracing::info;

use crate::engine;

/// Find which ordinal result positions contain the lookup pattern.
///
/// Compiles `lookup_string` into a non-anchored pattern, resolves the
/// engine profile, and drives the paginated scan. Returns the ascending
/// list of matching ordinals, every one of them within
/// `1..=max_results`.
///
/// This is the sole operation exposed to the surrounding request-handling
/// layer.
///
/// # Arguments
/// * `lookup_string` - Pattern to look for in each result's inner content
/// * `search_engine` - Engine selector; unrecognized values resolve to Bing
/// * `max_results` - Upper bound on considered ordinal positions
///
/// # Errors
/// Fails on an invalid lookup pattern, on any page fetch or selector
/// failure, or when the scan exhausts its page bound before meeting the
/// budget. Failures abort the whole scan; no partial list is returned.
pub async fn search_engine_outcomes(
    lookup_string: &str,
    search_engine: &str,
    max_results: usize,
) -> ScanResult<Vec<usize>> {
    let pattern = Regex::new(lookup_string)?;
    let profile = engine::resolve(search_engine);

    info!(
        engine = search_engine,
        base_url = %profile.base_url,
        max_results,
        "starting result scan"
    );

    let client = Client::new();
    let outcome = scan(&client, &profile, &pattern, max_results).await?;

    info!(matches = outcome.len(), "scan completed");
    Ok(outcome)
}

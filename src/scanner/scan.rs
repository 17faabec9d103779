//! The paginated fetch/extract/match loop
//!
//! Pages are fetched strictly sequentially; each page's matches are folded
//! into the accumulator before the next fetch is issued. The loop stops
//! once the running result count reaches the budget, overshooting by at
//! most one page rather than truncating extraction mid-page.

use regex::Regex;
use reqwest::Client;
use scraper::Html;
use tracing::{debug, warn};

use super::errors::{ScanError, ScanResult};
use super::extract::extract_ordered_results;
use super::types::{MAX_SCAN_PAGES, PageOutcome, ScanState};
use crate::engine::EngineProfile;

/// Scan successive snapshot pages of `profile` for results whose inner
/// content matches `pattern`, and return the sorted global ordinals of the
/// matches, bounded by `max_results`.
///
/// A zero budget returns an empty list without fetching anything. A page
/// that yields no counted results, or a scan that outlives
/// [`MAX_SCAN_PAGES`], aborts with [`ScanError::Exhausted`] instead of
/// looping forever. Any fetch or selector failure aborts the whole scan;
/// no partial list is returned.
///
/// # Arguments
/// * `client` - HTTP client used for every page fetch of this scan
/// * `profile` - Engine profile naming the page set and result criteria
/// * `pattern` - Compiled, non-anchored lookup pattern
/// * `max_results` - Upper bound on considered ordinal positions
pub async fn scan(
    client: &Client,
    profile: &EngineProfile,
    pattern: &Regex,
    max_results: usize,
) -> ScanResult<Vec<usize>> {
    if max_results == 0 {
        debug!("result budget is zero, nothing to scan");
        return Ok(Vec::new());
    }

    let mut state = ScanState::default();

    for page_index in 1..=MAX_SCAN_PAGES {
        let url = profile.page_url(page_index);
        debug!(url = %url, total_so_far = state.total_so_far, "fetching result page");

        let body = fetch_page(client, &url).await?;
        let outcome = match_page(&body, profile, pattern, state.total_so_far)?;

        if outcome.counted == 0 {
            warn!(
                page = page_index,
                "page yielded no counted results, aborting scan"
            );
            return Err(ScanError::Exhausted {
                page: page_index,
                total_so_far: state.total_so_far,
            });
        }

        debug!(
            page = page_index,
            counted = outcome.counted,
            matched = outcome.matched.len(),
            "page processed"
        );
        state.absorb(outcome);

        if state.total_so_far >= max_results {
            return Ok(state.finalize(max_results));
        }
    }

    warn!(
        max_pages = MAX_SCAN_PAGES,
        total_so_far = state.total_so_far,
        "page ceiling reached before the result budget was met"
    );
    Err(ScanError::Exhausted {
        page: MAX_SCAN_PAGES,
        total_so_far: state.total_so_far,
    })
}

/// Fetch one snapshot page body, treating any non-success status as fatal.
async fn fetch_page(client: &Client, url: &str) -> ScanResult<String> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| ScanError::Fetch {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScanError::Status {
            url: url.to_string(),
            status,
        });
    }

    response.text().await.map_err(|source| ScanError::Fetch {
        url: url.to_string(),
        source,
    })
}

/// Parse one page body and compute its contribution to the scan.
///
/// Ordinals are global: the 1-based intra-page index of a matching element
/// plus the count of results on all prior pages.
fn match_page(
    body: &str,
    profile: &EngineProfile,
    pattern: &Regex,
    total_so_far: usize,
) -> ScanResult<PageOutcome> {
    let document = Html::parse_document(body);
    let results = extract_ordered_results(&document, profile)?;

    let matched = results
        .iter()
        .enumerate()
        .filter(|(_, element)| pattern.is_match(&element.inner_html()))
        .map(|(index, _)| index + 1 + total_so_far)
        .collect();

    Ok(PageOutcome {
        counted: results.len(),
        matched,
    })
}

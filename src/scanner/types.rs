//! Data structures and constants for the paginated match scanner

use serde::{Deserialize, Serialize};

// =============================================================================
// Constants
// =============================================================================

/// Ceiling on pages fetched by one scan.
///
/// The recursive original had no such bound and would loop forever against
/// a source that never accumulates enough counted results. Exceeding the
/// ceiling aborts with [`ScanError::Exhausted`](super::ScanError::Exhausted).
pub const MAX_SCAN_PAGES: u32 = 64;

// =============================================================================
// Data Structures
// =============================================================================

/// Loop-local accumulator threaded through the page loop.
///
/// `matches` may overshoot the budget by at most one page's worth of
/// ordinals before [`finalize`](ScanState::finalize) applies the bound.
#[derive(Debug, Default)]
pub(super) struct ScanState {
    /// Results counted on all pages processed so far
    pub total_so_far: usize,

    /// Ordinals of matching results accumulated across pages
    pub matches: Vec<usize>,
}

impl ScanState {
    /// Fold one page's outcome into the running state.
    pub fn absorb(&mut self, outcome: PageOutcome) {
        self.total_so_far += outcome.counted;
        self.matches.extend(outcome.matched);
    }

    /// Apply the budget bound and return the sorted ordinal list.
    pub fn finalize(mut self, max_results: usize) -> Vec<usize> {
        self.matches.retain(|&ordinal| ordinal <= max_results);
        self.matches.sort_unstable();
        self.matches
    }
}

/// What one page contributed to the scan: how many result elements it held
/// and which global ordinals matched the pattern.
#[derive(Debug)]
pub(super) struct PageOutcome {
    pub counted: usize,
    pub matched: Vec<usize>,
}

/// Request shape accepted by the runner binary.
///
/// Mirrors the upstream JSON contract. `searchKeyword` is accepted for
/// compatibility but never used; the scan always runs against the fixed
/// snapshot pages.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    /// Pattern to look for in each result element's inner content
    pub lookup_string: String,

    /// Engine selector, `"google"` or `"bing"`
    pub search_engine: String,

    /// Result budget: upper bound on considered ordinal positions
    pub max_results: usize,

    /// Ignored; logged and discarded
    #[serde(default)]
    pub search_keyword: Option<String>,
}

/// Response shape produced by the runner binary
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    /// Sorted matching ordinals, each within `1..=max_results`
    pub outcome: Vec<usize>,
}

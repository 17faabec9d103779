//! Engine profile data and the fixed two-engine table constants

// =============================================================================
// Constants
// =============================================================================

/// Base location of the Google result snapshot set
pub(super) const GOOGLE_BASE_URL: &str = "https://infotrack-tests.infotrack.com.au/Google";

/// Base location of the Bing result snapshot set
pub(super) const BING_BASE_URL: &str = "https://infotrack-tests.infotrack.com.au/Bing";

/// CSS criterion for Google results: organic hits plus inline ad placements
/// as one combined selector. Ads count toward ordinal position.
pub(super) const GOOGLE_RESULT_SELECTOR: &str = "div.rc, li.ads-fr";

/// CSS criterion for Bing organic results
pub(super) const BING_ORGANIC_SELECTOR: &str = "li.b_algo";

/// CSS criterion for Bing's trailing ad placement, counted independently
/// of the organic criterion
pub(super) const BING_TRAILING_AD_SELECTOR: &str = ".b_adLastChild";

// =============================================================================
// Data Structures
// =============================================================================

/// Where one engine's snapshot pages live and which DOM nodes count as
/// results on them.
///
/// An element counts as a result if it matches ANY of `result_selectors`;
/// document order is preserved across criteria. Built once per scan from
/// the fixed engine table, or directly by tests pointing at a mock server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineProfile {
    /// Snapshot root, without a trailing slash
    pub base_url: String,

    /// Ordered CSS criteria identifying counted result elements
    pub result_selectors: Vec<String>,
}

impl EngineProfile {
    /// Create a profile from a base location and result criteria.
    #[must_use]
    pub fn new(base_url: impl Into<String>, result_selectors: &[&str]) -> Self {
        Self {
            base_url: base_url.into(),
            result_selectors: result_selectors.iter().map(ToString::to_string).collect(),
        }
    }

    /// URL of one snapshot page, named by the fixed two-digit zero-padded
    /// convention: `Page01.html`, `Page02.html`, ...
    #[must_use]
    pub fn page_url(&self, page_index: u32) -> String {
        format!("{}/Page{:02}.html", self.base_url, page_index)
    }
}

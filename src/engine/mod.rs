//! Engine profile resolution
//!
//! Maps a search-engine selector to the fixed snapshot location and the
//! CSS criteria that identify a counted result element on a rendered page.
//! Pure lookup against a two-engine table; no I/O.

mod types;

pub use types::EngineProfile;

use types::{
    BING_BASE_URL, BING_ORGANIC_SELECTOR, BING_TRAILING_AD_SELECTOR, GOOGLE_BASE_URL,
    GOOGLE_RESULT_SELECTOR,
};

/// Resolve an engine selector to its profile.
///
/// Recognized selectors are `"google"` and `"bing"`, matched
/// case-sensitively. Any other value (including the empty string) resolves
/// to the Bing profile. More engines can be added by extending the match.
///
/// # Arguments
/// * `engine` - Engine selector from the caller's request
#[must_use]
pub fn resolve(engine: &str) -> EngineProfile {
    match engine {
        "google" => EngineProfile::new(GOOGLE_BASE_URL, &[GOOGLE_RESULT_SELECTOR]),
        // Unrecognized selectors fall through to Bing, empty string included.
        _ => EngineProfile::new(
            BING_BASE_URL,
            &[BING_ORGANIC_SELECTOR, BING_TRAILING_AD_SELECTOR],
        ),
    }
}

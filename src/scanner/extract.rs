//! Structural extraction of counted result elements
//!
//! The scanner's only view of a page is the ordered element sequence this
//! module produces, which keeps the page loop independent of the HTML
//! library behind it.

use std::collections::HashSet;

use ego_tree::NodeId;
use scraper::{ElementRef, Html, Selector};

use super::errors::{ScanError, ScanResult};
use crate::engine::EngineProfile;

/// Extract the ordered sequence of counted result elements from a parsed
/// page.
///
/// An element counts if it matches ANY of the profile's criteria. Matches
/// from independent criteria are interleaved in document order: the
/// criteria are evaluated into a set of node ids first, then a single tree
/// walk keeps the document's own ordering. The 1-based position of each
/// element in the returned sequence is its intra-page ordinal.
pub(super) fn extract_ordered_results<'a>(
    document: &'a Html,
    profile: &EngineProfile,
) -> ScanResult<Vec<ElementRef<'a>>> {
    let mut counted: HashSet<NodeId> = HashSet::new();
    for raw in &profile.result_selectors {
        let selector = Selector::parse(raw).map_err(|e| ScanError::Selector {
            selector: raw.clone(),
            message: e.to_string(),
        })?;
        for element in document.select(&selector) {
            counted.insert(element.id());
        }
    }

    Ok(document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|element| counted.contains(&element.id()))
        .collect())
}

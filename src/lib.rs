//! serp-scan: paginated search-result snapshot scanner
//!
//! Given a lookup pattern, a search-engine selector, and a result budget,
//! scans successive pre-rendered result pages and reports which 1-based
//! ordinal positions (ads included) contain the pattern, sorted ascending
//! and bounded by the budget.
//!
//! ```no_run
//! #[tokio::main]
//! async fn main() -> Result<(), serp_scan::ScanError> {
//!     let positions = serp_scan::search_engine_outcomes(
//!         "https://www.infotrack.com.au",
//!         "google",
//!         50,
//!     )
//!     .await?;
//!     println!("matched positions: {positions:?}");
//!     Ok(())
//! }
//! ```

pub mod engine;
pub mod scanner;

pub use engine::EngineProfile;
pub use scanner::{
    MAX_SCAN_PAGES, ScanError, ScanResult, SearchRequest, SearchResponse, scan,
    search_engine_outcomes,
};

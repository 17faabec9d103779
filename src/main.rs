// Scan runner: reads one JSON search request from stdin and writes the
// scan outcome to stdout as `{ "outcome": [...] }`.
//
// Carries the same request contract as the HTTP endpoint that fronts the
// scanner in production: lookupString, searchEngine, maxResults, and an
// ignored searchKeyword field.

use anyhow::{Context, Result};
use serp_scan::{SearchRequest, SearchResponse, search_engine_outcomes};
use tokio::io::{self, AsyncReadExt};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .await
        .context("failed to read request from stdin")?;

    let request: SearchRequest =
        serde_json::from_str(&input).context("request is not a valid search request")?;

    if let Some(keyword) = &request.search_keyword {
        info!("{keyword} has been passed but using default pages instead");
    }

    let outcome = search_engine_outcomes(
        &request.lookup_string,
        &request.search_engine,
        request.max_results,
    )
    .await
    .context("scan failed")?;

    let response = SearchResponse { outcome };
    println!("{}", serde_json::to_string(&response)?);
    Ok(())
}

//! Pipeline module: from a page to stored statistics and a report
//!
//! This module contains the orchestration logic, including:
//! - Fetching the page through an injected [`DocumentSource`]
//! - Parsing it through an injected [`DocumentParser`]
//! - Extracting, aggregating and storing the four collections
//! - Querying the store for the final [`Report`]

mod fetcher;
mod orchestrator;

pub use fetcher::{build_http_client, DocumentSource, FetchError, HttpSource};
pub use orchestrator::{run_pipeline, run_pipeline_with_top, Report, DEFAULT_TOP_N};

use crate::extract::{DocumentParser, ParsedDocument};
use crate::storage::RecordStore;

/// Parses raw markup and runs the pipeline over it
///
/// # Arguments
///
/// * `parser` - Turns the markup into a document tree
/// * `raw` - The page markup
/// * `store` - A freshly created, empty store
/// * `top_n` - Number of words and tags in the report
pub fn process_document<P, S>(
    parser: &P,
    raw: &str,
    store: &mut S,
    top_n: usize,
) -> crate::Result<Report>
where
    P: DocumentParser,
    S: RecordStore + ?Sized,
{
    let document = parser.parse(raw);
    let text = document.text();
    let report = run_pipeline_with_top(document.root(), &text, store, top_n)?;
    Ok(report)
}

/// Fetches `url` and runs the pipeline over the page
///
/// Nothing is written to `store` unless the fetch succeeds.
///
/// # Returns
///
/// * `Ok(Report)` - Page processed and stored
/// * `Err(PagestatError::Fetch)` - The page could not be fetched
/// * `Err(PagestatError::Storage)` - A store operation failed; no report
pub async fn process_url<Src, P, S>(
    source: &Src,
    parser: &P,
    store: &mut S,
    url: &str,
    top_n: usize,
) -> crate::Result<Report>
where
    Src: DocumentSource,
    P: DocumentParser,
    S: RecordStore + ?Sized,
{
    tracing::info!("Fetching {}", url);
    let body = source.fetch(url).await?;
    tracing::debug!("Fetched {} bytes from {}", body.len(), url);
    process_document(parser, &body, store, top_n)
}

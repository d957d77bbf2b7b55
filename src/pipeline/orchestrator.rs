//! Pipeline orchestration over a parsed document
//!
//! One run extracts the four token streams, aggregates words and tags,
//! writes every collection with ids starting at zero and finally reads the
//! report back from the store. Any store failure aborts the run.

use crate::aggregate::aggregate;
use crate::extract::{DocumentNode, Extracted};
use crate::storage::{
    image_records, link_records, RecordStore, StorageResult, TagStat, WordStat,
};

/// Number of words and tags listed in a report by default
pub const DEFAULT_TOP_N: usize = 10;

/// Summary of a stored page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    /// Most used words, most frequent first
    pub top_words: Vec<String>,
    /// Most used element names, most frequent first
    pub top_tags: Vec<String>,
    pub link_count: u64,
    pub image_count: u64,
}

impl Report {
    /// Reads a report from a populated store
    pub fn load<S: RecordStore + ?Sized>(store: &S, top_n: usize) -> StorageResult<Self> {
        Ok(Self {
            top_words: store.top_words(top_n)?,
            top_tags: store.top_tags(top_n)?,
            link_count: store.count_links()?,
            image_count: store.count_images()?,
        })
    }
}

/// Runs the pipeline with the default report size
///
/// # Arguments
///
/// * `tree` - Root of the parsed document
/// * `document_text` - The document's full text content
/// * `store` - A freshly created, empty store
pub fn run_pipeline<N, S>(tree: N, document_text: &str, store: &mut S) -> StorageResult<Report>
where
    N: DocumentNode,
    S: RecordStore + ?Sized,
{
    run_pipeline_with_top(tree, document_text, store, DEFAULT_TOP_N)
}

/// Runs the pipeline, reporting the `top_n` most used words and tags
pub fn run_pipeline_with_top<N, S>(
    tree: N,
    document_text: &str,
    store: &mut S,
    top_n: usize,
) -> StorageResult<Report>
where
    N: DocumentNode,
    S: RecordStore + ?Sized,
{
    let extracted = Extracted::from_document(tree, document_text);
    tracing::debug!(
        "Extracted {} words, {} tags, {} links, {} images",
        extracted.words.len(),
        extracted.tags.len(),
        extracted.links.len(),
        extracted.images.len()
    );
    if extracted.is_empty() {
        tracing::info!("Document has no content to record");
    }

    let Extracted {
        words,
        tags,
        links,
        images,
    } = extracted;

    let words: Vec<WordStat> = aggregate(&words).into_iter().map(WordStat::from).collect();
    let tags: Vec<TagStat> = aggregate(&tags).into_iter().map(TagStat::from).collect();
    let links = link_records(links);
    let images = image_records(images);

    store.insert_words(&words)?;
    store.insert_tags(&tags)?;
    store.insert_links(&links)?;
    store.insert_images(&images)?;
    tracing::info!(
        "Stored {} distinct words, {} distinct tags, {} links, {} images",
        words.len(),
        tags.len(),
        links.len(),
        images.len()
    );

    Report::load(store, top_n)
}

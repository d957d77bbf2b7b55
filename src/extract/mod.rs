//! Feature extraction from parsed HTML documents
//!
//! This module turns a document into the four ordered token streams the
//! pipeline aggregates and stores:
//! - Words, split out of the document's text content
//! - Element names, in document order
//! - Hyperlink targets from `<a href>`
//! - Image sources from `<img src>`
//!
//! Extraction is written against the [`DocumentNode`] abstraction; the
//! `scraper`-backed implementation lives in [`html`].

pub mod html;
mod node;
mod structure;
mod tokenizer;

pub use html::{HtmlNode, HtmlParser};
pub use node::{DocumentNode, DocumentParser, ParsedDocument};
pub use structure::{extract_images, extract_links, extract_tag_names};
pub use tokenizer::{tokenize, tokens};

/// All token streams extracted from one document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extracted {
    pub words: Vec<String>,
    pub tags: Vec<String>,
    pub links: Vec<String>,
    pub images: Vec<String>,
}

impl Extracted {
    /// Runs every extractor over `root` and tokenizes `text`
    pub fn from_document<N: DocumentNode>(root: N, text: &str) -> Self {
        Self {
            words: tokenize(text),
            tags: extract_tag_names(root.clone()),
            links: extract_links(root.clone()),
            images: extract_images(root),
        }
    }

    /// Returns true if the document yielded nothing at all
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
            && self.tags.is_empty()
            && self.links.is_empty()
            && self.images.is_empty()
    }
}

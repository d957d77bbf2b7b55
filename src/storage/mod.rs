//! Storage module for persisting page statistics
//!
//! This module handles all database operations, including:
//! - Creating a fresh SQLite store (never overwriting an existing one)
//! - Append-only inserts of word, tag, link and image records
//! - Ranking and counting queries for the report

mod schema;
mod sqlite;
mod traits;

pub use sqlite::SqliteStore;
pub use traits::{RecordStore, StorageError, StorageResult};

use crate::aggregate::TokenStat;
use std::path::PathBuf;

/// A distinct word with its statistics
#[derive(Debug, Clone, PartialEq)]
pub struct WordStat {
    pub id: i64,
    pub word: String,
    pub count: i64,
    pub frequency: f64,
}

/// A distinct element name with its statistics
#[derive(Debug, Clone, PartialEq)]
pub struct TagStat {
    pub id: i64,
    pub tag: String,
    pub count: i64,
    pub frequency: f64,
}

/// A hyperlink target exactly as written in the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRecord {
    pub id: i64,
    pub link: String,
}

/// An image source exactly as written in the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRecord {
    pub id: i64,
    pub image: String,
}

impl From<TokenStat> for WordStat {
    fn from(stat: TokenStat) -> Self {
        Self {
            id: stat.index as i64,
            word: stat.value,
            count: stat.count as i64,
            frequency: stat.frequency,
        }
    }
}

impl From<TokenStat> for TagStat {
    fn from(stat: TokenStat) -> Self {
        Self {
            id: stat.index as i64,
            tag: stat.value,
            count: stat.count as i64,
            frequency: stat.frequency,
        }
    }
}

/// Numbers raw link targets sequentially from zero
pub fn link_records(links: Vec<String>) -> Vec<LinkRecord> {
    links
        .into_iter()
        .enumerate()
        .map(|(id, link)| LinkRecord {
            id: id as i64,
            link,
        })
        .collect()
}

/// Numbers raw image sources sequentially from zero
pub fn image_records(images: Vec<String>) -> Vec<ImageRecord> {
    images
        .into_iter()
        .enumerate()
        .map(|(id, image)| ImageRecord {
            id: id as i64,
            image,
        })
        .collect()
}

/// Turns a user-supplied database name into a file path
///
/// `extension` is appended when the name has none. Blank names yield `None`.
pub fn resolve_destination(name: &str, extension: &str) -> Option<PathBuf> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }

    let mut path = PathBuf::from(name);
    if path.extension().is_none() {
        path.set_extension(extension);
    }
    Some(path)
}

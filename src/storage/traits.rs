//! Storage traits and error types
//!
//! This module defines the trait interface for record stores and
//! associated error types.

use crate::storage::{ImageRecord, LinkRecord, TagStat, WordStat};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("A store already exists at {}", .0.display())]
    AlreadyExists(PathBuf),

    #[error("No store found at {}", .0.display())]
    NotFound(PathBuf),

    #[error("Store is closed")]
    Unavailable,

    #[error("Invalid store schema: {0}")]
    InvalidSchema(String),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Trait for record store implementations
///
/// A store holds four append-only collections (words, tags, links, images).
/// Every insert is durable once it returns. After [`RecordStore::close`],
/// every operation fails with [`StorageError::Unavailable`].
pub trait RecordStore {
    // ===== Inserts =====

    fn insert_word(&mut self, record: &WordStat) -> StorageResult<()>;

    fn insert_tag(&mut self, record: &TagStat) -> StorageResult<()>;

    fn insert_link(&mut self, record: &LinkRecord) -> StorageResult<()>;

    fn insert_image(&mut self, record: &ImageRecord) -> StorageResult<()>;

    /// Inserts many words; durable as a whole once it returns
    fn insert_words(&mut self, records: &[WordStat]) -> StorageResult<()> {
        records.iter().try_for_each(|r| self.insert_word(r))
    }

    fn insert_tags(&mut self, records: &[TagStat]) -> StorageResult<()> {
        records.iter().try_for_each(|r| self.insert_tag(r))
    }

    fn insert_links(&mut self, records: &[LinkRecord]) -> StorageResult<()> {
        records.iter().try_for_each(|r| self.insert_link(r))
    }

    fn insert_images(&mut self, records: &[ImageRecord]) -> StorageResult<()> {
        records.iter().try_for_each(|r| self.insert_image(r))
    }

    // ===== Queries =====

    /// Returns up to `n` words by descending count
    ///
    /// Words with equal counts keep their insertion order.
    fn top_words(&self, n: usize) -> StorageResult<Vec<String>>;

    /// Returns up to `n` tags by descending count, ties in insertion order
    fn top_tags(&self, n: usize) -> StorageResult<Vec<String>>;

    fn count_links(&self) -> StorageResult<u64>;

    fn count_images(&self) -> StorageResult<u64>;

    // ===== Lifecycle =====

    /// Releases the backing resource
    fn close(&mut self) -> StorageResult<()>;
}

//! SQLite storage implementation
//!
//! This module provides a SQLite-based implementation of the RecordStore trait.

use crate::storage::schema::{
    initialize_schema, missing_tables, INSERT_IMAGE_SQL, INSERT_LINK_SQL, INSERT_TAG_SQL,
    INSERT_WORD_SQL, TOP_TAGS_SQL, TOP_WORDS_SQL,
};
use crate::storage::traits::{RecordStore, StorageError, StorageResult};
use crate::storage::{ImageRecord, LinkRecord, TagStat, WordStat};
use rusqlite::{params, Connection, OpenFlags, Statement};
use std::fs::OpenOptions;
use std::io::ErrorKind;
use std::path::Path;

/// SQLite record store
///
/// The connection is dropped on [`RecordStore::close`]; the store then
/// answers every call with [`StorageError::Unavailable`].
pub struct SqliteStore {
    conn: Option<Connection>,
}

impl SqliteStore {
    /// Creates a new store file at `path`
    ///
    /// The destination is claimed with an exclusive create, so an existing
    /// file is never opened, truncated or modified.
    ///
    /// # Arguments
    ///
    /// * `path` - Destination of the SQLite database file
    ///
    /// # Returns
    ///
    /// * `Ok(SqliteStore)` - Store created with four empty collections
    /// * `Err(StorageError::AlreadyExists)` - Something already exists at `path`
    /// * `Err(StorageError)` - Failed to create the database
    pub fn create(path: &Path) -> StorageResult<Self> {
        match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(_) => {}
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(StorageError::AlreadyExists(path.to_path_buf()));
            }
            Err(e) => return Err(e.into()),
        }

        let conn = match Self::init_connection(path) {
            Ok(conn) => conn,
            Err(e) => {
                // The file is ours and unusable; don't leave it behind
                if let Err(remove_err) = std::fs::remove_file(path) {
                    tracing::warn!(
                        "Failed to remove incomplete store {}: {}",
                        path.display(),
                        remove_err
                    );
                }
                return Err(e);
            }
        };

        tracing::debug!("Created store at {}", path.display());
        Ok(Self { conn: Some(conn) })
    }

    fn init_connection(path: &Path) -> StorageResult<Connection> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;

        // Every commit reaches disk before the call returns
        conn.execute_batch("PRAGMA synchronous = FULL;")?;

        initialize_schema(&conn)?;
        Ok(conn)
    }

    /// Opens an existing store read-only for reporting
    ///
    /// # Returns
    ///
    /// * `Ok(SqliteStore)` - Store opened and schema verified
    /// * `Err(StorageError::NotFound)` - No file at `path`
    /// * `Err(StorageError::InvalidSchema)` - The file lacks one of the four tables
    pub fn open(path: &Path) -> StorageResult<Self> {
        if !path.is_file() {
            return Err(StorageError::NotFound(path.to_path_buf()));
        }

        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;

        let missing = missing_tables(&conn)?;
        if !missing.is_empty() {
            return Err(StorageError::InvalidSchema(format!(
                "missing tables: {}",
                missing.join(", ")
            )));
        }

        Ok(Self { conn: Some(conn) })
    }

    /// Creates an in-memory store (for testing)
    #[cfg(test)]
    pub fn new_in_memory() -> StorageResult<Self> {
        let conn = Connection::open_in_memory()?;
        initialize_schema(&conn)?;
        Ok(Self { conn: Some(conn) })
    }

    /// Returns true until the store has been closed
    pub fn is_open(&self) -> bool {
        self.conn.is_some()
    }

    fn conn(&self) -> StorageResult<&Connection> {
        self.conn.as_ref().ok_or(StorageError::Unavailable)
    }

    fn conn_mut(&mut self) -> StorageResult<&mut Connection> {
        self.conn.as_mut().ok_or(StorageError::Unavailable)
    }

    /// Runs one prepared insert per record inside a single transaction
    fn insert_batch<T, F>(&mut self, sql: &str, records: &[T], mut bind: F) -> StorageResult<()>
    where
        F: FnMut(&mut Statement<'_>, &T) -> rusqlite::Result<usize>,
    {
        let tx = self.conn_mut()?.transaction()?;
        {
            let mut stmt = tx.prepare(sql)?;
            for record in records {
                bind(&mut stmt, record)?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn top_values(&self, sql: &str, n: usize) -> StorageResult<Vec<String>> {
        let limit = i64::try_from(n).unwrap_or(i64::MAX);
        let mut stmt = self.conn()?.prepare(sql)?;
        let values = stmt
            .query_map(params![limit], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(values)
    }

    fn count_rows(&self, table: &str) -> StorageResult<u64> {
        let count: i64 = self.conn()?.query_row(
            &format!("SELECT COUNT(*) FROM \"{}\"", table),
            [],
            |row| row.get(0),
        )?;
        Ok(count as u64)
    }
}

impl RecordStore for SqliteStore {
    // ===== Inserts =====

    fn insert_word(&mut self, record: &WordStat) -> StorageResult<()> {
        self.conn()?.execute(
            INSERT_WORD_SQL,
            params![record.id, record.word, record.count, record.frequency],
        )?;
        tracing::trace!("Inserted word {} ({})", record.id, record.word);
        Ok(())
    }

    fn insert_tag(&mut self, record: &TagStat) -> StorageResult<()> {
        self.conn()?.execute(
            INSERT_TAG_SQL,
            params![record.id, record.tag, record.count, record.frequency],
        )?;
        tracing::trace!("Inserted tag {} ({})", record.id, record.tag);
        Ok(())
    }

    fn insert_link(&mut self, record: &LinkRecord) -> StorageResult<()> {
        self.conn()?
            .execute(INSERT_LINK_SQL, params![record.id, record.link])?;
        Ok(())
    }

    fn insert_image(&mut self, record: &ImageRecord) -> StorageResult<()> {
        self.conn()?
            .execute(INSERT_IMAGE_SQL, params![record.id, record.image])?;
        Ok(())
    }

    fn insert_words(&mut self, records: &[WordStat]) -> StorageResult<()> {
        self.insert_batch(INSERT_WORD_SQL, records, |stmt, r| {
            stmt.execute(params![r.id, r.word, r.count, r.frequency])
        })
    }

    fn insert_tags(&mut self, records: &[TagStat]) -> StorageResult<()> {
        self.insert_batch(INSERT_TAG_SQL, records, |stmt, r| {
            stmt.execute(params![r.id, r.tag, r.count, r.frequency])
        })
    }

    fn insert_links(&mut self, records: &[LinkRecord]) -> StorageResult<()> {
        self.insert_batch(INSERT_LINK_SQL, records, |stmt, r| {
            stmt.execute(params![r.id, r.link])
        })
    }

    fn insert_images(&mut self, records: &[ImageRecord]) -> StorageResult<()> {
        self.insert_batch(INSERT_IMAGE_SQL, records, |stmt, r| {
            stmt.execute(params![r.id, r.image])
        })
    }

    // ===== Queries =====

    fn top_words(&self, n: usize) -> StorageResult<Vec<String>> {
        self.top_values(TOP_WORDS_SQL, n)
    }

    fn top_tags(&self, n: usize) -> StorageResult<Vec<String>> {
        self.top_values(TOP_TAGS_SQL, n)
    }

    fn count_links(&self) -> StorageResult<u64> {
        self.count_rows("links")
    }

    fn count_images(&self) -> StorageResult<u64> {
        self.count_rows("images")
    }

    // ===== Lifecycle =====

    fn close(&mut self) -> StorageResult<()> {
        if let Some(conn) = self.conn.take() {
            conn.close().map_err(|(_, e)| StorageError::Sqlite(e))?;
        }
        Ok(())
    }
}

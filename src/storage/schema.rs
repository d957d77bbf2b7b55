//! Database schema definitions
//!
//! The four tables below are the store's external contract; other tools may
//! read them directly.

/// SQL schema for a new store
pub const SCHEMA_SQL: &str = r#"
CREATE TABLE "tags" (
    "id" INTEGER PRIMARY KEY AUTOINCREMENT UNIQUE,
    "tag" TEXT,
    "count" INTEGER,
    "frequency" REAL
);

CREATE TABLE "words" (
    "id" INTEGER PRIMARY KEY AUTOINCREMENT UNIQUE,
    "word" TEXT,
    "count" INTEGER,
    "frequency" REAL
);

CREATE TABLE "links" (
    "id" INTEGER PRIMARY KEY AUTOINCREMENT UNIQUE,
    "link" TEXT
);

CREATE TABLE "images" (
    "id" INTEGER PRIMARY KEY AUTOINCREMENT UNIQUE,
    "image" TEXT
);
"#;

/// Tables every store must contain
pub const TABLES: [&str; 4] = ["words", "tags", "links", "images"];

pub const INSERT_WORD_SQL: &str =
    "INSERT INTO words (id, word, count, frequency) VALUES (?1, ?2, ?3, ?4)";
pub const INSERT_TAG_SQL: &str =
    "INSERT INTO tags (id, tag, count, frequency) VALUES (?1, ?2, ?3, ?4)";
pub const INSERT_LINK_SQL: &str = "INSERT INTO links (id, link) VALUES (?1, ?2)";
pub const INSERT_IMAGE_SQL: &str = "INSERT INTO images (id, image) VALUES (?1, ?2)";

pub const TOP_WORDS_SQL: &str = "SELECT word FROM words ORDER BY count DESC, id ASC LIMIT ?1";
pub const TOP_TAGS_SQL: &str = "SELECT tag FROM tags ORDER BY count DESC, id ASC LIMIT ?1";

/// Creates the four empty collections
///
/// Not idempotent: a second call fails because the tables already exist.
pub fn initialize_schema(conn: &rusqlite::Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(SCHEMA_SQL)
}

/// Lists the expected tables missing from `conn`
pub fn missing_tables(conn: &rusqlite::Connection) -> Result<Vec<&'static str>, rusqlite::Error> {
    let mut stmt =
        conn.prepare("SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1")?;

    let mut missing = Vec::new();
    for table in TABLES {
        let count: i64 = stmt.query_row([table], |row| row.get(0))?;
        if count == 0 {
            missing.push(table);
        }
    }
    Ok(missing)
}

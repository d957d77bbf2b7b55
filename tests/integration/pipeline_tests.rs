//! Integration tests for the pipeline
//!
//! These tests use wiremock to serve pages over HTTP and write real SQLite
//! files into temporary directories, then check the stored rows directly.

use pagestat::config::FetchConfig;
use pagestat::extract::HtmlParser;
use pagestat::pipeline::{process_url, FetchError, HttpSource, Report, DEFAULT_TOP_N};
use pagestat::storage::{RecordStore, SqliteStore, StorageError};
use pagestat::PagestatError;
use rusqlite::Connection;
use std::path::Path;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PETS_PAGE: &str = r#"<html><head></head><body>Cat and dog. Cat runs!<a href="/a"></a><a></a><img src=""></body></html>"#;

async fn serve(server: &MockServer, route: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html; charset=utf-8"),
        )
        .mount(server)
        .await;
}

fn source() -> HttpSource {
    HttpSource::new(&FetchConfig::default()).expect("client builds")
}

fn word_rows(db: &Path) -> Vec<(i64, String, i64, f64)> {
    let conn = Connection::open(db).unwrap();
    let mut stmt = conn
        .prepare("SELECT id, word, count, frequency FROM words ORDER BY id")
        .unwrap();
    let rows = stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?)))
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    rows
}

fn count(db: &Path, table: &str) -> i64 {
    let conn = Connection::open(db).unwrap();
    conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| row.get(0))
        .unwrap()
}

#[tokio::test]
async fn test_full_run_stores_expected_rows() {
    let server = MockServer::start().await;
    serve(&server, "/pets", PETS_PAGE).await;

    let dir = TempDir::new().unwrap();
    let db = dir.path().join("pets.db");
    let mut store = SqliteStore::create(&db).unwrap();

    let url = format!("{}/pets", server.uri());
    let report = process_url(&source(), &HtmlParser, &mut store, &url, DEFAULT_TOP_N)
        .await
        .unwrap();
    store.close().unwrap();

    assert_eq!(report.top_words, vec!["Cat", "and", "dog", "runs"]);
    assert_eq!(report.top_tags, vec!["a", "html", "head", "body", "img"]);
    assert_eq!(report.link_count, 1);
    assert_eq!(report.image_count, 0);

    let words = word_rows(&db);
    let expected = [("Cat", 2, 0.4), ("and", 1, 0.2), ("dog", 1, 0.2), ("runs", 1, 0.2)];
    assert_eq!(words.len(), expected.len());
    for (i, ((id, word, count, freq), (e_word, e_count, e_freq))) in
        words.iter().zip(expected.iter()).enumerate()
    {
        assert_eq!(*id, i as i64);
        assert_eq!(word, e_word);
        assert_eq!(count, e_count);
        assert!((freq - e_freq).abs() < 1e-9);
    }

    let conn = Connection::open(&db).unwrap();
    let link: String = conn
        .query_row("SELECT link FROM links WHERE id = 0", [], |row| row.get(0))
        .unwrap();
    assert_eq!(link, "/a");
    assert_eq!(count(&db, "links"), 1);
    assert_eq!(count(&db, "images"), 0);
}

#[tokio::test]
async fn test_tag_rows_sum_to_tag_total() {
    let server = MockServer::start().await;
    let page = "<html><body><div><p>a</p><p>b</p></div><div><span>c</span></div></body></html>";
    serve(&server, "/", page).await;

    let dir = TempDir::new().unwrap();
    let db = dir.path().join("tags.db");
    let mut store = SqliteStore::create(&db).unwrap();
    process_url(&source(), &HtmlParser, &mut store, &format!("{}/", server.uri()), 10)
        .await
        .unwrap();
    store.close().unwrap();

    let conn = Connection::open(&db).unwrap();
    let (total, freq_sum, distinct): (i64, f64, i64) = conn
        .query_row(
            "SELECT SUM(count), SUM(frequency), COUNT(DISTINCT tag) FROM tags",
            [],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
        )
        .unwrap();

    // html, head, body, div, p, p, div, span
    assert_eq!(total, 8);
    assert_eq!(distinct, 6);
    assert!((freq_sum - 1.0).abs() < 1e-9);
    assert_eq!(count(&db, "tags"), 6);
}

#[tokio::test]
async fn test_top_words_follow_stored_counts() {
    let server = MockServer::start().await;
    let mut text = String::new();
    for i in 0..15 {
        for _ in 0..(i % 5 + 1) {
            text.push_str(&format!("w{} ", "a".repeat(i + 1)));
        }
    }
    serve(&server, "/", &format!("<p>{}</p>", text)).await;

    let dir = TempDir::new().unwrap();
    let db = dir.path().join("words.db");
    let mut store = SqliteStore::create(&db).unwrap();
    let report = process_url(&source(), &HtmlParser, &mut store, &format!("{}/", server.uri()), 10)
        .await
        .unwrap();
    store.close().unwrap();

    assert_eq!(report.top_words.len(), 10);

    let rows = word_rows(&db);
    let count_of = |word: &str| -> i64 {
        rows.iter()
            .find(|(_, w, _, _)| w == word)
            .map(|(_, _, c, _)| *c)
            .expect("reported word is stored")
    };
    let counts: Vec<i64> = report.top_words.iter().map(|w| count_of(w)).collect();
    assert!(counts.windows(2).all(|pair| pair[0] >= pair[1]));

    // Nothing left out of the report outranks what is in it
    let lowest_reported = *counts.last().unwrap();
    let best_unreported = rows
        .iter()
        .filter(|(_, w, _, _)| !report.top_words.contains(w))
        .map(|(_, _, c, _)| *c)
        .max()
        .unwrap();
    assert!(best_unreported <= lowest_reported);
}

#[tokio::test]
async fn test_empty_page() {
    let server = MockServer::start().await;
    serve(&server, "/empty", "").await;

    let dir = TempDir::new().unwrap();
    let db = dir.path().join("empty.db");
    let mut store = SqliteStore::create(&db).unwrap();

    let report = process_url(
        &source(),
        &HtmlParser,
        &mut store,
        &format!("{}/empty", server.uri()),
        10,
    )
    .await
    .unwrap();

    assert!(report.top_words.is_empty());
    assert_eq!(report.link_count, 0);
    assert_eq!(report.image_count, 0);
    assert_eq!(count(&db, "words"), 0);
}

#[tokio::test]
async fn test_fetch_failure_surfaces_and_stores_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let db = dir.path().join("broken.db");
    let mut store = SqliteStore::create(&db).unwrap();

    let result = process_url(
        &source(),
        &HtmlParser,
        &mut store,
        &format!("{}/down", server.uri()),
        10,
    )
    .await;

    assert!(matches!(
        result,
        Err(PagestatError::Fetch(FetchError::Status { status: 500, .. }))
    ));
    store.close().unwrap();
    for table in ["words", "tags", "links", "images"] {
        assert_eq!(count(&db, table), 0, "{} should be empty", table);
    }
}

#[tokio::test]
async fn test_invalid_url_is_a_fetch_error() {
    let dir = TempDir::new().unwrap();
    let mut store = SqliteStore::create(&dir.path().join("x.db")).unwrap();

    let result = process_url(&source(), &HtmlParser, &mut store, "not a url", 10).await;
    assert!(matches!(
        result,
        Err(PagestatError::Fetch(FetchError::InvalidUrl { .. }))
    ));
}

#[tokio::test]
async fn test_second_initialize_keeps_first_store() {
    let server = MockServer::start().await;
    serve(&server, "/pets", PETS_PAGE).await;

    let dir = TempDir::new().unwrap();
    let db = dir.path().join("pets.db");

    let mut first = SqliteStore::create(&db).unwrap();
    let url = format!("{}/pets", server.uri());
    let report = process_url(&source(), &HtmlParser, &mut first, &url, 10)
        .await
        .unwrap();
    first.close().unwrap();
    let before = std::fs::read(&db).unwrap();

    let second = SqliteStore::create(&db);
    assert!(matches!(second, Err(StorageError::AlreadyExists(_))));
    assert_eq!(std::fs::read(&db).unwrap(), before);

    // The stored data still yields the same report
    let reopened = SqliteStore::open(&db).unwrap();
    assert_eq!(Report::load(&reopened, 10).unwrap(), report);
}

#[tokio::test]
async fn test_closed_store_aborts_run() {
    let server = MockServer::start().await;
    serve(&server, "/pets", PETS_PAGE).await;

    let dir = TempDir::new().unwrap();
    let mut store = SqliteStore::create(&dir.path().join("closed.db")).unwrap();
    store.close().unwrap();

    let result = process_url(
        &source(),
        &HtmlParser,
        &mut store,
        &format!("{}/pets", server.uri()),
        10,
    )
    .await;
    assert!(matches!(
        result,
        Err(PagestatError::Storage(StorageError::Unavailable))
    ));
}

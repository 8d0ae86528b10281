//! Tests for JsonFileStore
//!
//! These tests verify:
//! - Missing and corrupt files load as an empty collection
//! - try_load / load_outcome keep "missing" and "recovered" distinct
//! - Save writes the fixed key order, 4-space indentation, unescaped UTF-8
//! - Save then load returns the same collection in the same order

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use bookshelf::catalog::{self, Book, Collection};
use bookshelf::storage::{JsonFileStore, LoadOutcome};
use bookshelf::BookshelfError;
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_temp_store() -> (TempDir, PathBuf, JsonFileStore) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("bibliotheque.json");
    let store = JsonFileStore::new(&path, 4);
    (temp_dir, path, store)
}

/// Log sink shared between the subscriber and the test
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn sample_collection() -> Collection {
    let mut books = Collection::new();
    catalog::add(&mut books, "Dune", "Frank Herbert", 1965).unwrap();
    catalog::add(&mut books, "L'Étranger", "Albert Camus", 1942).unwrap();
    catalog::add(&mut books, "Neuromancer", "William Gibson", 1984).unwrap();
    catalog::mark_read(&mut books, 2, Some(9), Some("très bien"));
    books
}

// =============================================================================
// Load Tests
// =============================================================================

#[test]
fn test_load_missing_file_is_empty() {
    let (_temp, path, store) = setup_temp_store();

    assert!(!path.exists());
    assert!(store.load().is_empty());
    assert!(store.try_load().unwrap().is_none());
    assert!(matches!(store.load_outcome(), LoadOutcome::Missing));
}

#[test]
fn test_load_invalid_json_is_empty() {
    let (_temp, path, store) = setup_temp_store();
    fs::write(&path, "{ this is not json").unwrap();

    assert!(store.load().is_empty());
}

#[test]
fn test_load_empty_file_is_empty() {
    let (_temp, path, store) = setup_temp_store();
    fs::write(&path, "").unwrap();

    assert!(store.load().is_empty());
}

#[test]
fn test_load_wrong_shape_is_empty() {
    let (_temp, path, store) = setup_temp_store();
    fs::write(&path, r#"{"ID": 1}"#).unwrap();

    assert!(store.load().is_empty());
}

#[test]
fn test_corrupt_file_is_distinguishable() {
    let (_temp, path, store) = setup_temp_store();
    fs::write(&path, "[{]").unwrap();

    assert!(matches!(store.try_load(), Err(BookshelfError::Serialization(_))));

    let outcome = store.load_outcome();
    assert!(outcome.is_recovered());
    assert!(outcome.into_collection().is_empty());
}

#[test]
fn test_corrupt_file_logs_nothing_at_warn_level() {
    let (_temp, path, store) = setup_temp_store();
    fs::write(&path, "{ broken").unwrap();

    let logs = CapturedLogs::default();
    let sink = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_writer(move || sink.clone())
        .finish();

    let books = tracing::subscriber::with_default(subscriber, || store.load());

    assert!(books.is_empty());
    assert!(logs.0.lock().unwrap().is_empty());
}

#[test]
fn test_load_large_year() {
    let (_temp, path, store) = setup_temp_store();
    let json = r#"[{"ID": 1, "Titre": "T", "Auteur": "A", "Année": 3000000000, "Lu": false, "Note": null, "Commentaire": null}]"#;
    fs::write(&path, json).unwrap();

    let outcome = store.load_outcome();

    assert!(!outcome.is_recovered());
    assert_eq!(outcome.into_collection()[0].year, 3_000_000_000);
}

#[test]
fn test_load_empty_array() {
    let (_temp, path, store) = setup_temp_store();
    fs::write(&path, "[]").unwrap();

    let outcome = store.load_outcome();
    assert!(!outcome.is_recovered());
    assert!(matches!(outcome, LoadOutcome::Loaded(ref books) if books.is_empty()));
}

#[test]
fn test_load_hand_written_file() {
    let (_temp, path, store) = setup_temp_store();
    let json = r#"[
    {
        "ID": 3,
        "Titre": "Germinal",
        "Auteur": "Émile Zola",
        "Année": 1885,
        "Lu": true,
        "Note": 8,
        "Commentaire": null
    }
]"#;
    fs::write(&path, json).unwrap();

    let books = store.load();

    assert_eq!(books.len(), 1);
    assert_eq!(books[0].id, 3);
    assert_eq!(books[0].author, "Émile Zola");
    assert!(books[0].read);
    assert_eq!(books[0].rating, Some(8));
    assert_eq!(books[0].comment, None);
}

// =============================================================================
// Save Tests
// =============================================================================

#[test]
fn test_save_format() {
    let (_temp, path, store) = setup_temp_store();
    let mut books = vec![Book::new(1, "Dune", "Herbert", 1965)];
    catalog::mark_read(&mut books, 1, Some(9), Some("great"));

    store.save(&books).unwrap();

    let expected = r#"[
    {
        "ID": 1,
        "Titre": "Dune",
        "Auteur": "Herbert",
        "Année": 1965,
        "Lu": true,
        "Note": 9,
        "Commentaire": "great"
    }
]"#;
    assert_eq!(fs::read_to_string(&path).unwrap(), expected);
}

#[test]
fn test_save_writes_nulls_and_unescaped_text() {
    let (_temp, path, store) = setup_temp_store();
    let books = vec![Book::new(1, "Le Rouge et le Noir", "Stendhal", 1830)];

    store.save(&books).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains("\"Année\": 1830"));
    assert!(contents.contains("\"Note\": null"));
    assert!(contents.contains("\"Commentaire\": null"));
    assert!(!contents.contains("\\u"));
}

#[test]
fn test_save_empty_collection() {
    let (_temp, path, store) = setup_temp_store();

    store.save(&[]).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
}

#[test]
fn test_save_overwrites_previous_contents() {
    let (_temp, _path, store) = setup_temp_store();
    store.save(&sample_collection()).unwrap();

    let smaller = vec![Book::new(10, "Only", "One", 2001)];
    store.save(&smaller).unwrap();

    assert_eq!(store.load(), smaller);
}

#[test]
fn test_save_creates_parent_directories() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("dir").join("books.json");
    let store = JsonFileStore::new(&path, 4);

    store.save(&sample_collection()).unwrap();

    assert!(path.exists());
}

#[test]
fn test_save_custom_indent() {
    let (_temp, path, _) = setup_temp_store();
    let store = JsonFileStore::new(&path, 2);

    store.save(&[Book::new(1, "A", "B", 1)]).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("[\n  {\n    \"ID\": 1,"));
}

// =============================================================================
// Persistence Tests
// =============================================================================

#[test]
fn test_save_then_load_round_trip() {
    let (_temp, _path, store) = setup_temp_store();
    let books = sample_collection();

    store.save(&books).unwrap();
    let loaded = store.load();

    assert_eq!(loaded, books);
}

#[test]
fn test_save_recovers_corrupt_file() {
    let (_temp, path, store) = setup_temp_store();
    fs::write(&path, "garbage").unwrap();

    let mut books = store.load();
    catalog::add(&mut books, "Fresh", "Start", 2020).unwrap();
    store.save(&books).unwrap();

    let reloaded = store.load();
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded[0].id, 1);
}

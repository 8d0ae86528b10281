//! Record store operations
//!
//! Free functions over an explicitly passed collection. Lookups are linear
//! scans; views (`search`, `filter_by_read`, `sort`) borrow from the collection
//! and never change its stored order.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use tracing::debug;

use super::book::{validate_rating, Book, Collection};
use crate::error::{BookshelfError, Result};

/// Sort criterion for `sort`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Publication year, ascending
    Year,

    /// Author, case-insensitive ascending
    Author,

    /// Rating, descending; unrated books always last
    Rating,
}

impl FromStr for SortKey {
    type Err = BookshelfError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "year" => Ok(SortKey::Year),
            "author" => Ok(SortKey::Author),
            "rating" => Ok(SortKey::Rating),
            other => Err(BookshelfError::validation(format!("unknown sort key '{}'", other))),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortKey::Year => "year",
            SortKey::Author => "author",
            SortKey::Rating => "rating",
        };
        f.write_str(name)
    }
}

/// Result of `mark_read`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkRead {
    /// No record carries the requested id; nothing changed
    NotFound,

    /// The record is now read. `rating_rejected` is set when a rating was
    /// supplied but fell outside `0..=10` and was dropped.
    Marked { rating_rejected: bool },
}

impl MarkRead {
    /// Whether the target record was found (and therefore updated)
    pub fn found(&self) -> bool {
        matches!(self, MarkRead::Marked { .. })
    }

    /// Whether a supplied rating was discarded
    pub fn rating_rejected(&self) -> bool {
        matches!(self, MarkRead::Marked { rating_rejected: true })
    }
}

/// Next id to assign: 1 for an empty collection, else max id + 1.
/// `None` once the highest id is `u64::MAX`.
pub fn next_id(collection: &[Book]) -> Option<u64> {
    match collection.iter().map(|book| book.id).max() {
        Some(max) => max.checked_add(1),
        None => Some(1),
    }
}

/// Append a new unread record and return it
pub fn add(
    collection: &mut Collection,
    title: impl Into<String>,
    author: impl Into<String>,
    year: i64,
) -> Result<&Book> {
    let Some(id) = next_id(collection) else {
        return Err(BookshelfError::IdsExhausted(u64::MAX));
    };
    let book = Book::new(id, title, author, year);
    debug!(id, title = %book.title, author = %book.author, year, "Adding book");

    collection.push(book);
    Ok(&collection[collection.len() - 1])
}

/// Remove the first record with `id`; returns whether one was removed
pub fn remove(collection: &mut Collection, id: u64) -> bool {
    match collection.iter().position(|book| book.id == id) {
        Some(index) => {
            let removed = collection.remove(index);
            debug!(id, title = %removed.title, "Removed book");
            true
        }
        None => {
            debug!(id, "No book to remove");
            false
        }
    }
}

/// First record with `id`, if any
pub fn find_by_id(collection: &[Book], id: u64) -> Option<&Book> {
    collection.iter().find(|book| book.id == id)
}

/// Records whose title or author contains `keyword`, ignoring case.
/// An empty keyword matches everything.
pub fn search<'a>(collection: &'a [Book], keyword: &str) -> Vec<&'a Book> {
    let needle = keyword.to_lowercase();
    collection
        .iter()
        .filter(|book| book.matches_lowercase(&needle))
        .collect()
}

/// Mark the record with `id` as read.
///
/// The previous rating and comment are replaced: a rating outside `0..=10`
/// becomes `None` (and is reported through `MarkRead::rating_rejected`), and
/// a blank comment becomes `None`.
pub fn mark_read(
    collection: &mut Collection,
    id: u64,
    rating: Option<i64>,
    comment: Option<&str>,
) -> MarkRead {
    let Some(book) = collection.iter_mut().find(|book| book.id == id) else {
        debug!(id, "No book to mark as read");
        return MarkRead::NotFound;
    };

    let accepted = rating.and_then(validate_rating);
    let rating_rejected = rating.is_some() && accepted.is_none();
    if rating_rejected {
        debug!(id, rating = ?rating, "Rating out of range, ignored");
    }

    book.read = true;
    book.rating = accepted;
    book.comment = comment
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string);

    debug!(id, rating = ?book.rating, has_comment = book.comment.is_some(), "Marked book as read");
    MarkRead::Marked { rating_rejected }
}

/// Records whose read flag equals `read`, in stored order
pub fn filter_by_read(collection: &[Book], read: bool) -> Vec<&Book> {
    collection.iter().filter(|book| book.read == read).collect()
}

/// A sorted view of the collection. Ties keep their stored order.
///
/// `SortKey::Rating` is always descending, with unrated books after every
/// rated one.
pub fn sort(collection: &[Book], key: SortKey) -> Vec<&Book> {
    let mut view: Vec<&Book> = collection.iter().collect();

    match key {
        SortKey::Year => view.sort_by_key(|book| book.year),
        SortKey::Author => view.sort_by_cached_key(|book| book.author.to_lowercase()),
        SortKey::Rating => view.sort_by(|a, b| compare_ratings_desc(a.rating, b.rating)),
    }

    view
}

fn compare_ratings_desc(a: Option<u8>, b: Option<u8>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

//! Book record
//!
//! The serialized key names and their order are the on-disk format of the
//! library file: `ID`, `Titre`, `Auteur`, `Année`, `Lu`, `Note`, `Commentaire`.

use serde::{Deserialize, Serialize};

/// Highest rating a book can receive
pub const MAX_RATING: u8 = 10;

/// The full ordered set of records for a session
pub type Collection = Vec<Book>;

/// A single book entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Unique, positive identifier
    #[serde(rename = "ID")]
    pub id: u64,

    #[serde(rename = "Titre")]
    pub title: String,

    #[serde(rename = "Auteur")]
    pub author: String,

    /// Publication year
    #[serde(rename = "Année")]
    pub year: i64,

    #[serde(rename = "Lu", default)]
    pub read: bool,

    /// Rating in `0..=MAX_RATING`, only set when marked as read
    #[serde(rename = "Note", default)]
    pub rating: Option<u8>,

    #[serde(rename = "Commentaire", default)]
    pub comment: Option<String>,
}

impl Book {
    /// Create an unread record with no rating and no comment
    pub fn new(id: u64, title: impl Into<String>, author: impl Into<String>, year: i64) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            year,
            read: false,
            rating: None,
            comment: None,
        }
    }

    /// Case-insensitive substring match on title or author.
    /// `needle` must already be lowercase.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.author.to_lowercase().contains(needle)
    }
}

/// Accept a raw rating only if it lies in `0..=MAX_RATING`
pub fn validate_rating(value: i64) -> Option<u8> {
    u8::try_from(value).ok().filter(|rating| *rating <= MAX_RATING)
}

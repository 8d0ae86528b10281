//! Menu choices
//!
//! Maps the numbered menu entries and the filter/sort sub-menus to typed
//! choices.

use std::str::FromStr;

use crate::catalog::SortKey;
use crate::error::BookshelfError;

/// A top-level menu action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    List,
    Add,
    Delete,
    Search,
    MarkRead,
    Filter,
    Sort,
    Quit,
}

impl MenuChoice {
    /// Every action in display order
    pub const ALL: [MenuChoice; 8] = [
        MenuChoice::List,
        MenuChoice::Add,
        MenuChoice::Delete,
        MenuChoice::Search,
        MenuChoice::MarkRead,
        MenuChoice::Filter,
        MenuChoice::Sort,
        MenuChoice::Quit,
    ];

    /// The key the user types to pick this action
    pub fn key(&self) -> char {
        match self {
            MenuChoice::List => '1',
            MenuChoice::Add => '2',
            MenuChoice::Delete => '3',
            MenuChoice::Search => '4',
            MenuChoice::MarkRead => '5',
            MenuChoice::Filter => '6',
            MenuChoice::Sort => '7',
            MenuChoice::Quit => '0',
        }
    }

    /// Menu label
    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::List => "Show all books",
            MenuChoice::Add => "Add a book",
            MenuChoice::Delete => "Delete a book",
            MenuChoice::Search => "Search for a book",
            MenuChoice::MarkRead => "Mark as read",
            MenuChoice::Filter => "Filter read/unread",
            MenuChoice::Sort => "Sort books",
            MenuChoice::Quit => "Quit",
        }
    }
}

impl FromStr for MenuChoice {
    type Err = BookshelfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        MenuChoice::ALL
            .iter()
            .copied()
            .find(|choice| s.len() == 1 && s.starts_with(choice.key()))
            .ok_or_else(|| BookshelfError::validation(format!("unknown menu choice '{}'", s)))
    }
}

/// Which half of the collection the filter view shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadFilter {
    Read,
    Unread,
}

impl ReadFilter {
    /// The `read` flag value this filter selects
    pub fn as_flag(&self) -> bool {
        matches!(self, ReadFilter::Read)
    }
}

impl FromStr for ReadFilter {
    type Err = BookshelfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(ReadFilter::Read),
            "2" => Ok(ReadFilter::Unread),
            other => Err(BookshelfError::validation(format!("unknown filter '{}'", other))),
        }
    }
}

/// Sort sub-menu: `1` year, `2` author, `3` rating, or the key's name
pub fn parse_sort_choice(s: &str) -> Result<SortKey, BookshelfError> {
    match s.trim() {
        "1" => Ok(SortKey::Year),
        "2" => Ok(SortKey::Author),
        "3" => Ok(SortKey::Rating),
        other => other.parse(),
    }
}

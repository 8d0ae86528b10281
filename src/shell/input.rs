//! Input validation
//!
//! Raw console text to typed values. Numbers must be plain ASCII digits: no
//! sign, no whitespace inside, no separators.

use crate::error::{BookshelfError, Result};

/// What the user typed at the rating prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingInput {
    /// Left blank
    Skipped,

    /// A whole number; range is checked by `catalog::mark_read`
    Value(i64),

    /// Not a whole number
    Invalid,
}

fn is_plain_number(raw: &str) -> bool {
    !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a record id
pub fn parse_id(raw: &str) -> Result<u64> {
    let raw = raw.trim();
    if !is_plain_number(raw) {
        return Err(BookshelfError::validation(format!("'{}' is not a valid id", raw)));
    }
    raw.parse()
        .map_err(|_| BookshelfError::validation(format!("'{}' is not a valid id", raw)))
}

/// Parse a publication year (non-negative whole number)
pub fn parse_year(raw: &str) -> Result<i64> {
    let raw = raw.trim();
    if !is_plain_number(raw) {
        return Err(BookshelfError::validation(format!("'{}' is not a valid year", raw)));
    }
    raw.parse()
        .map_err(|_| BookshelfError::validation(format!("'{}' is not a valid year", raw)))
}

/// Classify the rating prompt answer
pub fn parse_rating(raw: &str) -> RatingInput {
    let raw = raw.trim();
    if raw.is_empty() {
        return RatingInput::Skipped;
    }
    if !is_plain_number(raw) {
        return RatingInput::Invalid;
    }
    raw.parse().map_or(RatingInput::Invalid, RatingInput::Value)
}

/// Whether a delete confirmation answer means yes
pub fn is_confirmation(raw: &str) -> bool {
    matches!(raw.trim().to_lowercase().as_str(), "o" | "oui" | "y" | "yes")
}

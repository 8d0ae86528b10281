//! Book listing output

use std::io::{self, Write};

use crate::catalog::Book;

/// Width of the line printed after each book
pub const SEPARATOR_WIDTH: usize = 40;

/// Text block for one book. The comment line only appears when set.
pub fn format_book(book: &Book) -> String {
    let rating = book
        .rating
        .map_or_else(|| "-".to_string(), |rating| rating.to_string());

    let mut text = format!(
        "ID      : {}\nTitle   : {}\nAuthor  : {}\nYear    : {}\nRead    : {}\nRating  : {}\n",
        book.id,
        book.title,
        book.author,
        book.year,
        if book.read { "yes" } else { "no" },
        rating,
    );
    if let Some(comment) = book.comment.as_deref().filter(|c| !c.is_empty()) {
        text.push_str(&format!("Comment : {}\n", comment));
    }
    text
}

/// Print a listing, or an explicit notice when there is nothing to show
pub fn write_books<W: Write>(out: &mut W, books: &[&Book]) -> io::Result<()> {
    if books.is_empty() {
        return writeln!(out, "The library is empty.");
    }

    writeln!(out, "\nBooks:\n")?;
    for book in books {
        write!(out, "{}", format_book(book))?;
        writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))?;
    }
    Ok(())
}

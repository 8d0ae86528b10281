//! Interactive session
//!
//! The menu loop. Reads one line per prompt from any `BufRead`, writes to any
//! `Write`, and drives the `catalog` operations on the library it owns.
//!
//! Bad input never ends the session: validation messages are printed and the
//! loop goes back to the menu. The session ends on the quit action or when the
//! input is exhausted; both save the library first.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use super::command::{parse_sort_choice, MenuChoice, ReadFilter};
use super::input::{is_confirmation, parse_id, parse_rating, parse_year, RatingInput};
use super::render::write_books;
use crate::catalog::{self, Book};
use crate::error::{BookshelfError, Result};
use crate::library::Library;

/// Whether the loop keeps going after an action
enum Flow {
    Continue,
    Done,
}

/// A menu-driven session over one library
pub struct Shell<R, W> {
    library: Library,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(library: Library, input: R, output: W) -> Self {
        Self {
            library,
            input,
            output,
        }
    }

    /// Run the menu loop until quit or end of input, then save
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.write_menu()?;

            let line = match self.read_line("Your choice: ") {
                Ok(line) => line,
                Err(BookshelfError::InputClosed) => return self.finish(),
                Err(e) => return Err(e),
            };

            let choice = match line.parse::<MenuChoice>() {
                Ok(choice) => choice,
                Err(_) => {
                    writeln!(self.output, "Unrecognised choice, please try again.")?;
                    continue;
                }
            };

            debug!(?choice, "Menu action");
            match self.dispatch(choice) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Done) => return Ok(()),
                Err(BookshelfError::InputClosed) => return self.finish(),
                Err(e) => return Err(e),
            }
        }
    }

    /// Tear down the session, returning the library and output
    pub fn into_parts(self) -> (Library, W) {
        (self.library, self.output)
    }

    // =========================================================================
    // Actions
    // =========================================================================

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        match choice {
            MenuChoice::List => self.list()?,
            MenuChoice::Add => self.add()?,
            MenuChoice::Delete => self.delete()?,
            MenuChoice::Search => self.search()?,
            MenuChoice::MarkRead => self.mark_read()?,
            MenuChoice::Filter => self.filter()?,
            MenuChoice::Sort => self.sort()?,
            MenuChoice::Quit => {
                self.finish()?;
                return Ok(Flow::Done);
            }
        }
        Ok(Flow::Continue)
    }

    fn list(&mut self) -> Result<()> {
        let books: Vec<&Book> = self.library.books().iter().collect();
        write_books(&mut self.output, &books)?;
        Ok(())
    }

    fn add(&mut self) -> Result<()> {
        writeln!(self.output, "\nAdd a new book")?;
        let title = self.read_non_empty("Title: ", "The title cannot be empty.")?;
        let author = self.read_non_empty("Author: ", "The author cannot be empty.")?;
        let year = loop {
            let raw = self.read_line("Publication year: ")?;
            match parse_year(&raw) {
                Ok(year) => break year,
                Err(_) => writeln!(self.output, "Please enter a valid year.")?,
            }
        };

        match catalog::add(self.library.books_mut(), title, author, year) {
            Ok(book) => writeln!(self.output, "Book '{}' added (ID: {})", book.title, book.id)?,
            Err(BookshelfError::IdsExhausted(_)) => {
                writeln!(self.output, "Cannot add the book: no ID left to assign.")?
            }
            Err(e) => return Err(e),
        }
        Ok(())
    }

    fn delete(&mut self) -> Result<()> {
        writeln!(self.output, "\nDelete a book")?;
        let Some(id) = self.read_id("ID of the book to delete: ")? else {
            return Ok(());
        };

        let Some(title) = catalog::find_by_id(self.library.books(), id).map(|b| b.title.clone())
        else {
            writeln!(self.output, "No book found with this ID.")?;
            return Ok(());
        };

        let answer = self.read_line(&format!("Confirm deletion of '{}'? (o/N): ", title))?;
        if is_confirmation(&answer) {
            catalog::remove(self.library.books_mut(), id);
            writeln!(self.output, "Book deleted.")?;
        } else {
            writeln!(self.output, "Deletion cancelled.")?;
        }
        Ok(())
    }

    fn search(&mut self) -> Result<()> {
        writeln!(self.output, "\nSearch for a book")?;
        let keyword = self.read_line("Keyword (title or author): ")?;

        let results = catalog::search(self.library.books(), &keyword);
        if results.is_empty() {
            writeln!(self.output, "No result for this keyword.")?;
        } else {
            write_books(&mut self.output, &results)?;
        }
        Ok(())
    }

    fn mark_read(&mut self) -> Result<()> {
        writeln!(self.output, "\nMark a book as read")?;
        let Some(id) = self.read_id("Book ID: ")? else {
            return Ok(());
        };

        let Some(title) = catalog::find_by_id(self.library.books(), id).map(|b| b.title.clone())
        else {
            writeln!(self.output, "No book found with this ID.")?;
            return Ok(());
        };

        let raw_rating = self.read_line("Rating out of 10 (leave empty for none): ")?;
        let rating = match parse_rating(&raw_rating) {
            RatingInput::Skipped => None,
            RatingInput::Value(value) => Some(value),
            RatingInput::Invalid => {
                writeln!(self.output, "Invalid rating, ignored.")?;
                None
            }
        };
        let comment = self.read_line("Comment (optional): ")?;

        let outcome = catalog::mark_read(self.library.books_mut(), id, rating, Some(&comment));
        if outcome.rating_rejected() {
            writeln!(self.output, "Invalid rating, ignored.")?;
        }
        writeln!(self.output, "Book '{}' updated.", title)?;
        Ok(())
    }

    fn filter(&mut self) -> Result<()> {
        writeln!(self.output, "\nFilter books")?;
        let raw = self.read_line("Show (1) read, (2) unread: ")?;

        let Ok(filter) = raw.parse::<ReadFilter>() else {
            writeln!(self.output, "Invalid choice.")?;
            return Ok(());
        };
        let books = catalog::filter_by_read(self.library.books(), filter.as_flag());
        write_books(&mut self.output, &books)?;
        Ok(())
    }

    fn sort(&mut self) -> Result<()> {
        writeln!(self.output, "\nSort books")?;
        writeln!(self.output, "1. By year\n2. By author\n3. By rating")?;
        let raw = self.read_line("Your choice: ")?;

        let Ok(key) = parse_sort_choice(&raw) else {
            writeln!(self.output, "Invalid choice.")?;
            return Ok(());
        };
        debug!(%key, "Sorting view");
        let books = catalog::sort(self.library.books(), key);
        write_books(&mut self.output, &books)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.library.save()?;
        info!(books = self.library.books().len(), "Session ended");
        writeln!(self.output, "Goodbye!")?;
        self.output.flush()?;
        Ok(())
    }

    // =========================================================================
    // Prompt Helpers
    // =========================================================================

    fn write_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\n=== MENU ===")?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{}. {}", choice.key(), choice.label())?;
        }
        Ok(())
    }

    /// Prompt and read one trimmed line; `InputClosed` at end of input.
    /// Bytes that are not UTF-8 become U+FFFD instead of failing the read.
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(BookshelfError::InputClosed);
        }
        Ok(String::from_utf8_lossy(&buf).trim().to_string())
    }

    fn read_non_empty(&mut self, prompt: &str, complaint: &str) -> Result<String> {
        loop {
            let value = self.read_line(prompt)?;
            if !value.is_empty() {
                return Ok(value);
            }
            writeln!(self.output, "{}", complaint)?;
        }
    }

    /// Read an id, printing the validation message and yielding `None` if invalid
    fn read_id(&mut self, prompt: &str) -> Result<Option<u64>> {
        let raw = self.read_line(prompt)?;
        match parse_id(&raw) {
            Ok(id) => Ok(Some(id)),
            Err(_) => {
                writeln!(self.output, "Invalid ID.")?;
                Ok(None)
            }
        }
    }
}

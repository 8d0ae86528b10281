//! Shell Module
//!
//! Text menu front-end for the library.
//!
//! ## Responsibilities
//! - Present the numbered menu and read the user's choice
//! - Validate ids, years, ratings and confirmations before touching the store
//! - Render listings
//! - Save on quit (or when input runs out)
//!
//! ## Menu
//! ```text
//! 1. Show all books        5. Mark as read
//! 2. Add a book            6. Filter read/unread
//! 3. Delete a book         7. Sort books
//! 4. Search for a book     0. Quit
//! ```

mod command;
mod input;
mod render;
mod session;

pub use command::{parse_sort_choice, MenuChoice, ReadFilter};
pub use input::{is_confirmation, parse_id, parse_rating, parse_year, RatingInput};
pub use render::{format_book, write_books, SEPARATOR_WIDTH};
pub use session::Shell;

//! Catalog Module
//!
//! In-memory record store for the book collection.
//!
//! ## Responsibilities
//! - Own the `Book` record and the ordered `Collection`
//! - Assign ids (max existing id + 1)
//! - Add, remove, look up and mark records as read
//! - Produce search, filter and sort views without reordering the collection
//!
//! ## State Ownership
//! There is no ambient collection: every operation takes the collection it
//! works on as an argument. The session (see `Library`) is the single owner.

mod book;
mod store;

pub use book::{validate_rating, Book, Collection, MAX_RATING};
pub use store::{
    add, filter_by_read, find_by_id, mark_read, next_id, remove, search, sort, MarkRead, SortKey,
};

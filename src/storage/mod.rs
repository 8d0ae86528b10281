//! Storage Module
//!
//! Persists the whole collection as a single JSON document.
//!
//! ## Responsibilities
//! - Load the collection once at startup, tolerating a missing or corrupt file
//! - Save the collection wholesale, overwriting the previous file
//!
//! ## File Format
//! ```text
//! [
//!     {
//!         "ID": 1,
//!         "Titre": "Dune",
//!         "Auteur": "Herbert",
//!         "Année": 1965,
//!         "Lu": true,
//!         "Note": 9,
//!         "Commentaire": "great"
//!     }
//! ]
//! ```
//! UTF-8, 4-space indentation, non-ASCII text written as-is.

mod json_file;

pub use json_file::{JsonFileStore, LoadOutcome};

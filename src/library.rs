//! Library Module
//!
//! The session state object: one collection, the store it came from, and the
//! config it was opened with.
//!
//! ## Lifecycle
//! 1. `open` loads the collection once (missing/corrupt file → empty)
//! 2. Callers mutate it through `catalog` functions via `books_mut`
//! 3. `close` writes it back wholesale

use std::path::Path;

use tracing::info;

use crate::catalog::{Book, Collection};
use crate::config::Config;
use crate::error::Result;
use crate::storage::JsonFileStore;

/// A book collection bound to its library file
pub struct Library {
    /// Session configuration
    config: Config,

    /// Where the collection is loaded from and saved to
    store: JsonFileStore,

    /// The in-memory collection, exclusively owned by the session
    books: Collection,

    /// Set when the file existed but was unusable at open time
    recovered: bool,
}

impl Library {
    /// Open the library described by `config`
    pub fn open(config: Config) -> Result<Self> {
        config.validate()?;

        let store = JsonFileStore::from_config(&config);
        let outcome = store.load_outcome();
        let recovered = outcome.is_recovered();
        let books = outcome.into_collection();

        Ok(Self {
            config,
            store,
            books,
            recovered,
        })
    }

    /// Open with a path (convenience method)
    ///
    /// Uses default config with the specified library file
    pub fn open_path(path: &Path) -> Result<Self> {
        let config = Config::builder().data_file(path).build();
        Self::open(config)
    }

    /// Build a library around an already loaded collection
    pub fn with_books(config: Config, books: Collection) -> Self {
        let store = JsonFileStore::from_config(&config);
        Self {
            config,
            store,
            books,
            recovered: false,
        }
    }

    /// The collection, in stored order
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Mutable access for `catalog` operations
    pub fn books_mut(&mut self) -> &mut Collection {
        &mut self.books
    }

    /// Write the collection to the library file
    pub fn save(&self) -> Result<()> {
        self.store.save(&self.books)?;
        info!(path = %self.store.path().display(), books = self.books.len(), "Library saved");
        Ok(())
    }

    /// Save and end the session
    pub fn close(self) -> Result<()> {
        self.save()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Whether the library file was unusable and the session started empty
    pub fn was_recovered(&self) -> bool {
        self.recovered
    }

    /// Path of the library file
    pub fn data_file(&self) -> &Path {
        self.store.path()
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
